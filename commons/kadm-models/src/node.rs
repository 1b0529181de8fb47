use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw node status as reported by the poller. `ok` and `failed` are both
/// "settled" outcomes; only `converging` marks an in-flight node. Anything
/// the backend sends that we do not recognize collapses to `Unknown` so a
/// malformed snapshot can never fail deserialization.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Ok,
    Failed,
    Converging,
    #[serde(other)]
    Unknown,
}

impl Default for NodeStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Immutable snapshot of a single cluster member. Produced by the external
/// poller; never mutated by the derivation engine.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Validate, JsonSchema,
)]
pub struct Node {
    #[validate(length(min = 1, message = "Node uuid cannot be empty"))]
    pub uuid: String,
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default)]
    pub is_master: bool,
    #[validate(length(min = 1, message = "Cluster uuid cannot be empty"))]
    pub cluster_uuid: String,
}
