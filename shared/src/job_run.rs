use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::RunStatus;

pub const OUTPUT_RETRIEVAL_ERROR: &str = "error: unable to retrieve outputs";
pub const INPUT_RETRIEVAL_ERROR: &str = "error: unable to retrieve inputs";

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Finish time is only meaningful once the status is terminal.
fn finished_display(status: RunStatus, finished_at: Option<&DateTime<Utc>>) -> Option<String> {
    finished_at
        .filter(|_| status.is_finished())
        .map(format_timestamp)
}

// ============================================================================
// Job Run Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRun {
    pub id: i64,
    pub pipeline_spec_id: i64,
    /// `None` when the stored outputs could not be read.
    #[serde(default)]
    pub outputs: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub all_errors: Vec<Option<String>>,
    #[serde(default)]
    pub fatal_errors: Vec<Option<String>>,
    #[serde(default)]
    pub inputs: serde_json::Value,
    #[serde(default)]
    pub observation_source: String,
    #[serde(default)]
    pub task_runs: Vec<TaskRun>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl JobRun {
    pub fn status(&self) -> RunStatus {
        if self.fatal_errors.iter().any(Option::is_some) {
            RunStatus::Errored
        } else if self.finished_at.is_some() {
            RunStatus::Completed
        } else {
            RunStatus::InProgress
        }
    }

    /// Outputs as display strings. JSON nulls stay `None`.
    pub fn output_strings(&self) -> Vec<Option<String>> {
        match &self.outputs {
            None => vec![Some(OUTPUT_RETRIEVAL_ERROR.to_string())],
            Some(outputs) => outputs.iter().map(value_to_display).collect(),
        }
    }

    pub fn error_strings(&self) -> Vec<String> {
        self.all_errors.iter().flatten().cloned().collect()
    }

    pub fn inputs_display(&self) -> String {
        serde_json::to_string(&self.inputs)
            .unwrap_or_else(|_| INPUT_RETRIEVAL_ERROR.to_string())
    }

    pub fn task_runs(&self) -> &[TaskRun] {
        &self.task_runs
    }

    pub fn created_display(&self) -> String {
        format_timestamp(&self.created_at)
    }

    pub fn finished_display(&self) -> Option<String> {
        finished_display(self.status(), self.finished_at.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRun {
    pub id: Uuid,
    pub dot_id: String,
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl TaskRun {
    pub fn status(&self) -> RunStatus {
        if self.error.is_some() {
            RunStatus::Errored
        } else if self.finished_at.is_some() {
            RunStatus::Completed
        } else {
            RunStatus::InProgress
        }
    }

    pub fn output_display(&self) -> Option<String> {
        self.output.as_ref().and_then(value_to_display)
    }

    pub fn created_display(&self) -> String {
        format_timestamp(&self.created_at)
    }

    pub fn finished_display(&self) -> Option<String> {
        finished_display(self.status(), self.finished_at.as_ref())
    }
}

fn value_to_display(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
