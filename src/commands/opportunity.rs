//! Opportunity Commands
//!
//! Frontend bindings for the opportunity controller commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use opportunity_core::{FetchFault, MutationFault, Opportunity, OpportunityId};

use super::{invoke, remote_error};

#[derive(Serialize)]
struct MarkClosedArgs<'a> {
    #[serde(rename = "opportunityId")]
    opportunity_id: &'a str,
}

pub async fn get_opportunities() -> Result<Vec<Opportunity>, FetchFault> {
    let result = invoke("get_opportunities", JsValue::NULL)
        .await
        .map_err(|e| FetchFault::from(remote_error(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| FetchFault::Decode(e.to_string()))
}

pub async fn mark_opportunity_closed(id: &OpportunityId) -> Result<(), MutationFault> {
    let js_args = serde_wasm_bindgen::to_value(&MarkClosedArgs {
        opportunity_id: id.as_str(),
    })
    .map_err(|e| MutationFault::transport(format!("Serialization error: {}", e)))?;
    invoke("mark_opportunity_closed", js_args)
        .await
        .map_err(|e| MutationFault::from(remote_error(e)))?;
    Ok(())
}
