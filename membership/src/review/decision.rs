use super::error::ValidationError;
use crate::domain::RegisterStatus;
use serde::Serialize;

/// Operator's answer to the reject-reason dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonPrompt {
    /// No reason asked for (approval).
    NotRequired,
    Provided(String),
    Cancelled,
}

/// Variables of the register-status mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub email: String,
    pub register_status: RegisterStatus,
    pub reject_reason: Option<String>,
}

impl StatusChange {
    /// Builds the mutation input, refusing rejections without a reason.
    pub fn new(
        email: impl Into<String>,
        target: RegisterStatus,
        prompt: ReasonPrompt,
    ) -> Result<Self, ValidationError> {
        let reject_reason = match target {
            RegisterStatus::Approved => None,
            RegisterStatus::Rejected => match prompt {
                ReasonPrompt::Provided(reason) if !reason.trim().is_empty() => {
                    Some(reason.trim().to_string())
                }
                _ => return Err(ValidationError::MissingRejectReason),
            },
            other => return Err(ValidationError::UnsupportedTarget(other)),
        };

        Ok(Self {
            email: email.into(),
            register_status: target,
            reject_reason,
        })
    }
}

/// A status change the server accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOutcome {
    pub email: String,
    pub status: RegisterStatus,
}

impl StatusOutcome {
    pub fn confirmation(&self) -> String {
        match self.status {
            RegisterStatus::Rejected => format!("Rejected the request from {}", self.email),
            _ => format!("Approved the request from {}", self.email),
        }
    }
}
