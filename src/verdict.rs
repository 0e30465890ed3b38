//! The review status vocabulary and notification rendering.
//!
//! The vocabulary is closed: anything outside it coming off the wire is an
//! error, never a passthrough.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("homework item has no usable `{0}` attribute")]
    MissingAttribute(&'static str),
    #[error("unknown review status `{0}`")]
    UnknownStatus(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_wire(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Fixed reviewer verdict text shown to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// A parsed status snapshot together with its rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub status: HomeworkStatus,
    pub message: String,
}

/// Extract the tracked homework's status from one raw item and render the
/// notification text. Pure and deterministic.
pub fn parse_status(item: &Value) -> Result<StatusChange, FormatError> {
    let name = item
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(FormatError::MissingAttribute("homework_name"))?;
    let code = item
        .get("status")
        .and_then(Value::as_str)
        .ok_or(FormatError::MissingAttribute("status"))?;
    let status = HomeworkStatus::from_wire(code)
        .ok_or_else(|| FormatError::UnknownStatus(code.to_string()))?;

    Ok(StatusChange {
        status,
        message: format!("Changed status for \"{name}\". {}", status.verdict()),
    })
}
