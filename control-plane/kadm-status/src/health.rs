use std::collections::HashMap;
use std::sync::LazyLock;

use kadm_models::{
    Cluster, ConnectionState, ConnectionStatusResult, HealthStatusResult,
    ModelError, Node, NodeSetHealth, OverallHealth,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::classifier;
use crate::connection::resolve_connection;
use crate::quorum::{
    self, NodeSetCounts, master_quorum_threshold, worker_majority_threshold,
};

/// One row of the verdict-combination table. The message builder is a pure
/// function over the live counts; rows hold no derived state, so repeated
/// lookups can never observe a stale message.
struct CombinationRule {
    masters: NodeSetHealth,
    workers: NodeSetHealth,
    overall: OverallHealth,
    message: fn(&NodeSetCounts, &NodeSetCounts) -> String,
}

fn master_part(verdict: NodeSetHealth, c: &NodeSetCounts) -> String {
    match verdict {
        NodeSetHealth::Healthy if c.total == 0 => {
            "the cluster has no masters".to_string()
        }
        NodeSetHealth::Healthy => {
            format!("all {} masters are healthy", c.total)
        }
        NodeSetHealth::PartiallyHealthy => format!(
            "{} out of {} masters are unhealthy (Quorum still established)",
            c.unhealthy(),
            c.total
        ),
        _ => format!(
            "{} out of {} masters are unhealthy (Quorum failed)",
            c.unhealthy(),
            c.total
        ),
    }
}

fn worker_part(verdict: NodeSetHealth, c: &NodeSetCounts) -> String {
    match verdict {
        NodeSetHealth::Healthy if c.total == 0 => {
            "the cluster has no workers".to_string()
        }
        NodeSetHealth::Healthy => {
            format!("all {} workers are healthy", c.total)
        }
        NodeSetHealth::PartiallyHealthy => format!(
            "{} out of {} workers are unhealthy (Majority of workers still \
             healthy)",
            c.unhealthy(),
            c.total
        ),
        _ => format!(
            "{} out of {} workers are unhealthy (Majority of workers \
             unhealthy)",
            c.unhealthy(),
            c.total
        ),
    }
}

macro_rules! combined_message {
    ($name:ident, $masters:ident, $workers:ident) => {
        fn $name(m: &NodeSetCounts, w: &NodeSetCounts) -> String {
            format!(
                "{} and {}",
                master_part(NodeSetHealth::$masters, m),
                worker_part(NodeSetHealth::$workers, w)
            )
        }
    };
}

combined_message!(msg_h_h, Healthy, Healthy);
combined_message!(msg_h_p, Healthy, PartiallyHealthy);
combined_message!(msg_h_u, Healthy, Unhealthy);
combined_message!(msg_p_h, PartiallyHealthy, Healthy);
combined_message!(msg_p_p, PartiallyHealthy, PartiallyHealthy);
combined_message!(msg_p_u, PartiallyHealthy, Unhealthy);
combined_message!(msg_u_h, Unhealthy, Healthy);
combined_message!(msg_u_p, Unhealthy, PartiallyHealthy);
combined_message!(msg_u_u, Unhealthy, Unhealthy);

/// Total over the nine steady master/worker verdict pairs. A lost master
/// quorum always dominates; while quorum holds, a degraded master set caps
/// the overall verdict at partially healthy.
static COMBINATIONS: &[CombinationRule] = &[
    CombinationRule {
        masters: NodeSetHealth::Healthy,
        workers: NodeSetHealth::Healthy,
        overall: OverallHealth::Healthy,
        message: msg_h_h,
    },
    CombinationRule {
        masters: NodeSetHealth::Healthy,
        workers: NodeSetHealth::PartiallyHealthy,
        overall: OverallHealth::PartiallyHealthy,
        message: msg_h_p,
    },
    CombinationRule {
        masters: NodeSetHealth::Healthy,
        workers: NodeSetHealth::Unhealthy,
        overall: OverallHealth::Unhealthy,
        message: msg_h_u,
    },
    CombinationRule {
        masters: NodeSetHealth::PartiallyHealthy,
        workers: NodeSetHealth::Healthy,
        overall: OverallHealth::PartiallyHealthy,
        message: msg_p_h,
    },
    CombinationRule {
        masters: NodeSetHealth::PartiallyHealthy,
        workers: NodeSetHealth::PartiallyHealthy,
        overall: OverallHealth::PartiallyHealthy,
        message: msg_p_p,
    },
    CombinationRule {
        masters: NodeSetHealth::PartiallyHealthy,
        workers: NodeSetHealth::Unhealthy,
        overall: OverallHealth::PartiallyHealthy,
        message: msg_p_u,
    },
    CombinationRule {
        masters: NodeSetHealth::Unhealthy,
        workers: NodeSetHealth::Healthy,
        overall: OverallHealth::Unhealthy,
        message: msg_u_h,
    },
    CombinationRule {
        masters: NodeSetHealth::Unhealthy,
        workers: NodeSetHealth::PartiallyHealthy,
        overall: OverallHealth::Unhealthy,
        message: msg_u_p,
    },
    CombinationRule {
        masters: NodeSetHealth::Unhealthy,
        workers: NodeSetHealth::Unhealthy,
        overall: OverallHealth::Unhealthy,
        message: msg_u_u,
    },
];

static COMBINATION_INDEX: LazyLock<
    HashMap<(NodeSetHealth, NodeSetHealth), &'static CombinationRule>,
> = LazyLock::new(|| {
    COMBINATIONS
        .iter()
        .map(|rule| ((rule.masters, rule.workers), rule))
        .collect()
});

fn result(state: OverallHealth, message: String) -> HealthStatusResult {
    HealthStatusResult {
        state,
        label: state.label().to_string(),
        message,
        category: state.category(),
        nodes_details_url: None,
    }
}

/// Combine connectivity, the two node-set verdicts and upgrade
/// availability into the overall verdict.
///
/// Precedence: disconnected clusters cannot be assessed; a transient
/// connection state is mirrored; an available upgrade is surfaced even on
/// an otherwise healthy cluster; anything still converging defers the
/// steady table.
pub fn resolve_health(
    connection: ConnectionState,
    masters: NodeSetHealth,
    workers: NodeSetHealth,
    can_upgrade: bool,
    master_counts: &NodeSetCounts,
    worker_counts: &NodeSetCounts,
) -> HealthStatusResult {
    if connection == ConnectionState::Disconnected {
        return result(
            OverallHealth::Unknown,
            "Cluster health cannot be assessed while the cluster is \
             disconnected"
                .to_string(),
        );
    }

    let transient = match connection {
        ConnectionState::Creating => Some(OverallHealth::Creating),
        ConnectionState::Deleting => Some(OverallHealth::Deleting),
        ConnectionState::Updating => Some(OverallHealth::Updating),
        ConnectionState::Upgrading => Some(OverallHealth::Upgrading),
        ConnectionState::Converging => Some(OverallHealth::Converging),
        _ => None,
    };
    if let Some(state) = transient {
        return result(state, connection.message().to_string());
    }

    if can_upgrade {
        return result(
            OverallHealth::NeedsUpgrade,
            "A newer version is available for this cluster".to_string(),
        );
    }

    if masters == NodeSetHealth::Converging
        || workers == NodeSetHealth::Converging
    {
        return result(
            OverallHealth::Converging,
            ConnectionState::Converging.message().to_string(),
        );
    }

    match COMBINATION_INDEX.get(&(masters, workers)) {
        Some(rule) => result(
            rule.overall,
            (rule.message)(master_counts, worker_counts),
        ),
        // The table is total over steady verdicts; degrade instead of
        // panicking if that ever stops being true.
        None => {
            debug!(?masters, ?workers, "no combination rule matched");
            result(
                OverallHealth::Unknown,
                "Cluster health cannot be determined".to_string(),
            )
        }
    }
}

/// Per-set verdict plus the counts it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct NodeSetStatus {
    pub verdict: NodeSetHealth,
    pub counts: NodeSetCounts,
}

/// Everything the console needs to render a cluster row, derived from one
/// snapshot. Recomputed on every poll tick; nothing is cached here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ClusterStatus {
    pub connection: ConnectionStatusResult,
    pub masters: NodeSetStatus,
    pub workers: NodeSetStatus,
    pub health: HealthStatusResult,
}

fn node_set_status(
    nodes: &[&Node],
    threshold: fn(usize) -> usize,
) -> NodeSetStatus {
    let counts = NodeSetCounts::from_nodes(nodes);
    let verdict = if nodes.iter().any(|n| classifier::is_converging(n)) {
        NodeSetHealth::Converging
    } else {
        quorum::resolve(counts, threshold(counts.total))
    };
    NodeSetStatus { verdict, counts }
}

/// End-to-end derivation for one cluster snapshot: partition the nodes,
/// resolve both node-set verdicts, the connection state and the overall
/// health. Pure and idempotent; identical snapshots yield identical
/// output, message strings included.
///
/// A structurally invalid snapshot (empty uuids) is rejected up front, as
/// is a node attributed to another cluster; both are hard errors, never a
/// derived verdict.
pub fn resolve_cluster(
    cluster: &Cluster,
) -> Result<ClusterStatus, ModelError> {
    cluster.validate()?;
    let split = classifier::partition(&cluster.uuid, &cluster.nodes)?;

    let masters = node_set_status(&split.masters, master_quorum_threshold);
    let workers = node_set_status(&split.workers, worker_majority_threshold);
    let connection = resolve_connection(cluster.task_state, &cluster.nodes);
    let health = resolve_health(
        connection.state,
        masters.verdict,
        workers.verdict,
        cluster.can_upgrade,
        &masters.counts,
        &workers.counts,
    );

    debug!(
        cluster = %cluster.uuid,
        connection = ?connection.state,
        health = ?health.state,
        "resolved cluster status"
    );

    Ok(ClusterStatus {
        connection,
        masters,
        workers,
        health,
    })
}
