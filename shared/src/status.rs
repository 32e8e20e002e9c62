use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Run Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    InProgress,
    PendingIncomingConfirmations,
    PendingOutgoingConfirmations,
    PendingConnection,
    PendingBridge,
    PendingSleep,
    Errored,
    Completed,
    Cancelled,
}

impl RunStatus {
    pub const ALL: [RunStatus; 9] = [
        RunStatus::InProgress,
        RunStatus::PendingIncomingConfirmations,
        RunStatus::PendingOutgoingConfirmations,
        RunStatus::PendingConnection,
        RunStatus::PendingBridge,
        RunStatus::PendingSleep,
        RunStatus::Errored,
        RunStatus::Completed,
        RunStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::InProgress => "in_progress",
            RunStatus::PendingIncomingConfirmations => "pending_incoming_confirmations",
            RunStatus::PendingOutgoingConfirmations => "pending_outgoing_confirmations",
            RunStatus::PendingConnection => "pending_connection",
            RunStatus::PendingBridge => "pending_bridge",
            RunStatus::PendingSleep => "pending_sleep",
            RunStatus::Errored => "errored",
            RunStatus::Completed => "completed",
            RunStatus::Cancelled => "cancelled",
        }
    }

    /// True once the run has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            RunStatus::Errored | RunStatus::Completed | RunStatus::Cancelled
        )
    }

    pub fn glyph(&self) -> StatusGlyph {
        match self {
            RunStatus::Completed => StatusGlyph::Success,
            RunStatus::Errored => StatusGlyph::Failure,
            RunStatus::Cancelled => StatusGlyph::Cancelled,
            RunStatus::InProgress
            | RunStatus::PendingIncomingConfirmations
            | RunStatus::PendingOutgoingConfirmations
            | RunStatus::PendingConnection
            | RunStatus::PendingBridge
            | RunStatus::PendingSleep => StatusGlyph::Pending,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusParseError {
    #[error("status label is empty")]
    Empty,
    #[error("unknown status label: {0}")]
    Unknown(String),
}

impl FromStr for RunStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() {
            return Err(StatusParseError::Empty);
        }
        let normalized = label.to_lowercase();
        RunStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| StatusParseError::Unknown(label.to_string()))
    }
}

// ============================================================================
// Status Glyphs
// ============================================================================

/// Visual class of a status icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusGlyph {
    Success,
    Failure,
    Pending,
    Cancelled,
    Unknown,
}

impl StatusGlyph {
    /// Resolves any label to a glyph; unparseable labels map to `Unknown`.
    pub fn resolve(label: &str) -> StatusGlyph {
        label
            .parse::<RunStatus>()
            .map(|status| status.glyph())
            .unwrap_or(StatusGlyph::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusGlyph::Success => "success",
            StatusGlyph::Failure => "failure",
            StatusGlyph::Pending => "pending",
            StatusGlyph::Cancelled => "cancelled",
            StatusGlyph::Unknown => "unknown",
        }
    }
}
