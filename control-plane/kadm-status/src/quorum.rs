use kadm_models::{Node, NodeSetHealth};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classifier;

/// Healthy/total tally for one node set, taken from a single snapshot.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    JsonSchema,
)]
pub struct NodeSetCounts {
    pub total: usize,
    pub healthy: usize,
}

impl NodeSetCounts {
    pub fn from_nodes(nodes: &[&Node]) -> Self {
        Self {
            total: nodes.len(),
            healthy: nodes
                .iter()
                .filter(|n| classifier::is_healthy(n))
                .count(),
        }
    }

    pub fn unhealthy(&self) -> usize {
        self.total.saturating_sub(self.healthy)
    }
}

/// Quorum threshold for the master set: a strict majority of all masters
/// must be healthy for the control plane to keep serving. Kept as a named
/// function so the policy is a one-line change.
pub fn master_quorum_threshold(total: usize) -> usize {
    total / 2 + 1
}

/// Workers use a strict-majority framing: more than half must be healthy.
pub fn worker_majority_threshold(total: usize) -> usize {
    total.div_ceil(2)
}

/// Steady three-way verdict for one node set. Callers must short-circuit
/// to `Converging` before calling this; the resolver only classifies
/// settled sets.
pub fn resolve(counts: NodeSetCounts, threshold: usize) -> NodeSetHealth {
    if counts.healthy == counts.total {
        NodeSetHealth::Healthy
    } else if counts.healthy >= threshold {
        NodeSetHealth::PartiallyHealthy
    } else {
        NodeSetHealth::Unhealthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_healthy_is_healthy() {
        let counts = NodeSetCounts {
            total: 3,
            healthy: 3,
        };
        assert_eq!(resolve(counts, 2), NodeSetHealth::Healthy);
    }

    #[test]
    fn quorum_boundary_three_masters() {
        // Majority threshold: 2 of 3 healthy keeps quorum, 1 of 3 loses it.
        let threshold = 2;
        let two = NodeSetCounts {
            total: 3,
            healthy: 2,
        };
        assert_eq!(resolve(two, threshold), NodeSetHealth::PartiallyHealthy);
        let one = NodeSetCounts {
            total: 3,
            healthy: 1,
        };
        assert_eq!(resolve(one, threshold), NodeSetHealth::Unhealthy);
    }

    #[test]
    fn master_threshold_is_strict_majority() {
        assert_eq!(master_quorum_threshold(1), 1);
        assert_eq!(master_quorum_threshold(3), 2);
        assert_eq!(master_quorum_threshold(5), 3);
    }

    #[test]
    fn worker_majority_threshold_rounds_up() {
        assert_eq!(worker_majority_threshold(4), 2);
        assert_eq!(worker_majority_threshold(5), 3);
        assert_eq!(worker_majority_threshold(1), 1);
        assert_eq!(worker_majority_threshold(0), 0);
    }

    #[test]
    fn empty_set_is_healthy() {
        // Zero nodes means nothing is unhealthy; the connection resolver is
        // responsible for flagging an empty cluster as disconnected.
        let counts = NodeSetCounts {
            total: 0,
            healthy: 0,
        };
        assert_eq!(resolve(counts, 0), NodeSetHealth::Healthy);
    }
}
