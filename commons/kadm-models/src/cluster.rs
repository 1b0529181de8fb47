use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::node::Node;

/// Lifecycle task state reported on the cluster record. The four in-flight
/// values double as connection states while the operation runs; `success`
/// is the only steady value. Unrecognized backend values map to `Unknown`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Success,
    Creating,
    Deleting,
    Updating,
    Upgrading,
    #[serde(other)]
    Unknown,
}

impl TaskState {
    /// True while a cluster-level operation is in flight. A transient task
    /// state overrides any steady-state derivation.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Creating | Self::Deleting | Self::Updating | Self::Upgrading
        )
    }
}

impl Default for TaskState {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Snapshot of a cluster plus its member nodes, as handed over by the
/// poller on every tick. The derivation engine treats this as read-only
/// input and recomputes everything from scratch per snapshot.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Validate, JsonSchema,
)]
pub struct Cluster {
    #[validate(length(min = 1, message = "Cluster uuid cannot be empty"))]
    pub uuid: String,
    #[serde(default)]
    pub task_state: TaskState,
    #[serde(default)]
    pub can_upgrade: bool,
    #[validate(nested)]
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// When the poller captured this snapshot, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polled_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_task_states() {
        assert!(TaskState::Creating.is_transient());
        assert!(TaskState::Deleting.is_transient());
        assert!(TaskState::Updating.is_transient());
        assert!(TaskState::Upgrading.is_transient());
        assert!(!TaskState::Success.is_transient());
        assert!(!TaskState::Unknown.is_transient());
    }

    #[test]
    fn unrecognized_task_state_degrades_to_unknown() {
        let state: TaskState =
            serde_json::from_str("\"rebooting\"").unwrap();
        assert_eq!(state, TaskState::Unknown);
    }

    #[test]
    fn cluster_snapshot_exposes_a_json_schema() {
        let schema = schemars::schema_for!(Cluster);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("\"nodes\""));
        assert!(json.contains("\"polled_at\""));
    }
}
