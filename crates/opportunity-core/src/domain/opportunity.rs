//! Opportunity Entity
//!
//! One business deal as delivered by the provider. Field names on the wire
//! follow the host platform (`Id`, `StageName`, `Account.Name`, ...).

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Stable opportunity identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityId(String);

impl OpportunityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OpportunityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Reference to the owning account (only the display name is queried)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountRef {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// A deal tracked by the list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Unique identifier
    #[serde(rename = "Id")]
    pub id: OpportunityId,
    /// Display name
    #[serde(rename = "Name")]
    pub name: String,
    /// Pipeline stage, e.g. "Prospecting" or "Closed Won"
    #[serde(rename = "StageName")]
    pub stage_name: String,
    #[serde(rename = "Amount", default)]
    pub amount: Option<f64>,
    #[serde(rename = "CloseDate", default)]
    pub close_date: Option<NaiveDate>,
    /// Owning account, absent when the opportunity has none
    #[serde(rename = "Account", default)]
    pub account: Option<AccountRef>,
}

impl Opportunity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stage_name: impl Into<String>) -> Self {
        Self {
            id: OpportunityId::new(id),
            name: name.into(),
            stage_name: stage_name.into(),
            amount: None,
            close_date: None,
            account: None,
        }
    }

    /// Builder-style setter for the owning account's name
    pub fn with_account(mut self, account_name: impl Into<String>) -> Self {
        self.account = Some(AccountRef {
            name: Some(account_name.into()),
        });
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_close_date(mut self, close_date: NaiveDate) -> Self {
        self.close_date = Some(close_date);
        self
    }

    /// Account display name, `None` when there is no account or the name is empty
    pub fn account_name(&self) -> Option<&str> {
        self.account
            .as_ref()
            .and_then(|account| account.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Whether the opportunity sits at the given (terminal) stage
    pub fn is_at_stage(&self, stage: &str) -> bool {
        self.stage_name == stage
    }
}

impl Entity for Opportunity {
    type Id = OpportunityId;

    fn id(&self) -> &OpportunityId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_platform_payload() {
        let json = r#"{
            "Id": "006A",
            "Name": "Acme Deal",
            "StageName": "Prospecting",
            "Amount": 1500.5,
            "CloseDate": "2024-03-31",
            "Account": { "Name": "Acme" }
        }"#;
        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opp.id, OpportunityId::from("006A"));
        assert_eq!(opp.amount, Some(1500.5));
        assert_eq!(opp.close_date, NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(opp.account_name(), Some("Acme"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{ "Id": "006B", "Name": "Orphan", "StageName": "Qualification" }"#;
        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert!(opp.account.is_none());
        assert!(opp.amount.is_none());
        assert_eq!(opp.account_name(), None);
    }

    #[test]
    fn test_empty_account_name_is_none() {
        let mut opp = Opportunity::new("1", "Deal", "Prospecting");
        opp.account = Some(AccountRef { name: Some(String::new()) });
        assert_eq!(opp.account_name(), None);
    }

    #[test]
    fn test_stage_check() {
        let opp = Opportunity::new("1", "Deal", "Closed Won");
        assert!(opp.is_at_stage("Closed Won"));
        assert!(!opp.is_at_stage("closed won"));
    }
}
