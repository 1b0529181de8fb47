use kadm_models::{
    ConnectionState, ConnectionStatusResult, Node, TaskState,
};
use tracing::debug;

use crate::classifier;

fn result(state: ConnectionState) -> ConnectionStatusResult {
    ConnectionStatusResult {
        state,
        label: state.label().to_string(),
        message: state.message().to_string(),
        category: state.category(),
    }
}

/// Derive the cluster-wide connection state from the task state plus raw
/// node statuses. A transient task state wins over anything the nodes
/// report; an empty cluster is valid and reads as disconnected.
pub fn resolve_connection(
    task_state: TaskState,
    nodes: &[Node],
) -> ConnectionStatusResult {
    let transient = match task_state {
        TaskState::Creating => Some(ConnectionState::Creating),
        TaskState::Deleting => Some(ConnectionState::Deleting),
        TaskState::Updating => Some(ConnectionState::Updating),
        TaskState::Upgrading => Some(ConnectionState::Upgrading),
        TaskState::Success | TaskState::Unknown => None,
    };
    if let Some(state) = transient {
        debug!(?state, "task state overrides node-derived connection state");
        return result(state);
    }

    if nodes.is_empty() {
        return result(ConnectionState::Disconnected);
    }
    if nodes.iter().any(classifier::is_converging) {
        return result(ConnectionState::Converging);
    }

    let settled = nodes.iter().filter(|n| classifier::is_settled(n)).count();
    if settled == nodes.len() {
        result(ConnectionState::Connected)
    } else if settled > 0 {
        result(ConnectionState::PartiallyConnected)
    } else {
        result(ConnectionState::Disconnected)
    }
}
