//! Fault types reported by the collaborators.

use serde::Deserialize;
use thiserror::Error;

/// The data provider could not deliver the opportunity list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchFault {
    #[error("failed to load opportunities: {0}")]
    Provider(String),
    #[error("malformed opportunity payload: {0}")]
    Decode(String),
}

impl FetchFault {
    /// Message shown to the user, without the category prefix
    pub fn message(&self) -> &str {
        match self {
            FetchFault::Provider(msg) | FetchFault::Decode(msg) => msg,
        }
    }
}

/// The remote state transition failed.
///
/// Remote errors may carry a structured body with its own message; the
/// transport message is always present. The structured one wins.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct MutationFault {
    message: String,
    transport_message: String,
}

impl MutationFault {
    /// Fault with a structured body message
    pub fn structured(body_message: impl Into<String>, transport_message: impl Into<String>) -> Self {
        Self {
            message: body_message.into(),
            transport_message: transport_message.into(),
        }
    }

    /// Fault known only at transport level
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            transport_message: message.clone(),
            message,
        }
    }

    /// Structured message when present, transport message otherwise
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn transport_message(&self) -> &str {
        &self.transport_message
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error object as rejected by the remote call: an optional structured
/// `body` and a transport-level `message`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteErrorPayload {
    #[serde(default)]
    pub body: Option<RemoteErrorBody>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<RemoteErrorPayload> for MutationFault {
    fn from(payload: RemoteErrorPayload) -> Self {
        let transport = payload.message.unwrap_or_else(|| "Unknown error".to_string());
        match payload.body.and_then(|body| body.message) {
            Some(body_message) => MutationFault::structured(body_message, transport),
            None => MutationFault::transport(transport),
        }
    }
}

impl From<RemoteErrorPayload> for FetchFault {
    fn from(payload: RemoteErrorPayload) -> Self {
        FetchFault::Provider(MutationFault::from(payload).message().to_string())
    }
}

/// Why a mark-closed dispatch failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Mutation(#[from] MutationFault),
    #[error(transparent)]
    Refresh(#[from] FetchFault),
}

impl DispatchError {
    pub fn message(&self) -> &str {
        match self {
            DispatchError::Mutation(fault) => fault.message(),
            DispatchError::Refresh(fault) => fault.message(),
        }
    }
}
