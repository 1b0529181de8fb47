use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color grouping attached to every derived status. Consumed only by the
/// presentation boundary; the engine never branches on it.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Ok,
    Warn,
    Fail,
    Unknown,
}

/// Health verdict for one node set (the masters or the workers).
/// `Converging` short-circuits the steady three-way classification.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum NodeSetHealth {
    Healthy,
    PartiallyHealthy,
    Unhealthy,
    Converging,
}

/// Cluster-wide connectivity as derived from the task state plus the raw
/// node statuses. The four task-transient values are reused verbatim.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Connected,
    PartiallyConnected,
    Disconnected,
    Converging,
    Creating,
    Deleting,
    Updating,
    Upgrading,
}

impl ConnectionState {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Converging
                | Self::Creating
                | Self::Deleting
                | Self::Updating
                | Self::Upgrading
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::PartiallyConnected => "Partially connected",
            Self::Disconnected => "Disconnected",
            Self::Converging => "Converging",
            Self::Creating => "Creating",
            Self::Deleting => "Deleting",
            Self::Updating => "Updating",
            Self::Upgrading => "Upgrading",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Connected => "All nodes in the cluster are reporting",
            Self::PartiallyConnected => {
                "Some nodes in the cluster are not reporting"
            }
            Self::Disconnected => "No nodes in the cluster are reporting",
            Self::Converging => "One or more nodes are still converging",
            Self::Creating => "The cluster is being created",
            Self::Deleting => "The cluster is being deleted",
            Self::Updating => "The cluster is being updated",
            Self::Upgrading => "The cluster is being upgraded",
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Connected => StatusCategory::Ok,
            Self::Disconnected => StatusCategory::Fail,
            _ => StatusCategory::Warn,
        }
    }
}

/// Single overall verdict for the cluster, combining connectivity, the two
/// node-set verdicts and upgrade availability.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OverallHealth {
    Healthy,
    PartiallyHealthy,
    Unhealthy,
    Unknown,
    NeedsUpgrade,
    Converging,
    Creating,
    Deleting,
    Updating,
    Upgrading,
}

impl OverallHealth {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::PartiallyHealthy => "Partially healthy",
            Self::Unhealthy => "Unhealthy",
            Self::Unknown => "Unknown",
            Self::NeedsUpgrade => "Upgrade available",
            Self::Converging => "Converging",
            Self::Creating => "Creating",
            Self::Deleting => "Deleting",
            Self::Updating => "Updating",
            Self::Upgrading => "Upgrading",
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Healthy => StatusCategory::Ok,
            Self::Unhealthy => StatusCategory::Fail,
            Self::Unknown => StatusCategory::Unknown,
            _ => StatusCategory::Warn,
        }
    }
}

/// Verdict of a scale-constraint lookup. `Deny` blocks submission; `Warn`
/// permits it but the message must be surfaced to the operator first.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ScaleRelation {
    Allow,
    Warn,
    Deny,
}

/// Connectivity result handed to the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ConnectionStatusResult {
    pub state: ConnectionState,
    pub label: String,
    pub message: String,
    pub category: StatusCategory,
}

/// Overall health result handed to the rendering layer. The details URL is
/// supplied by the caller, never computed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct HealthStatusResult {
    pub state: OverallHealth,
    pub label: String,
    pub message: String,
    pub category: StatusCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_details_url: Option<String>,
}

impl HealthStatusResult {
    /// Attach the node-details link. The URL is owned by the caller's
    /// routing layer; the engine never computes one.
    pub fn with_nodes_details_url(
        mut self,
        url: impl Into<String>,
    ) -> Self {
        self.nodes_details_url = Some(url.into());
        self
    }
}

/// Outcome of a proposed scale operation. Always data, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ScaleValidationResult {
    pub relation: ScaleRelation,
    pub message: String,
}

impl ScaleValidationResult {
    /// Whether the UI may proceed with submission at all.
    pub fn allows_submission(&self) -> bool {
        self.relation != ScaleRelation::Deny
    }

    /// Whether the operator must confirm the surfaced message first.
    pub fn requires_confirmation(&self) -> bool {
        self.relation == ScaleRelation::Warn
    }
}
