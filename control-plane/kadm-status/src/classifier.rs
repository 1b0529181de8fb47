use kadm_models::{ModelError, Node, NodeStatus};

/// A node is healthy only when it reports `ok`. A `failed` node is settled
/// but not healthy.
pub fn is_healthy(node: &Node) -> bool {
    node.status == NodeStatus::Ok
}

/// A node is settled once it has reached a terminal status, healthy or not.
/// Unrecognized statuses count as neither settled nor converging.
pub fn is_settled(node: &Node) -> bool {
    matches!(node.status, NodeStatus::Ok | NodeStatus::Failed)
}

pub fn is_converging(node: &Node) -> bool {
    node.status == NodeStatus::Converging
}

/// Borrowed split of a cluster's nodes into its master and worker sets.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub masters: Vec<&'a Node>,
    pub workers: Vec<&'a Node>,
}

/// Partition nodes by their master flag. Rejects a node attributed to a
/// different cluster; that is an upstream invariant violation, not a
/// validation outcome.
pub fn partition<'a>(
    cluster_uuid: &str,
    nodes: &'a [Node],
) -> Result<Partition<'a>, ModelError> {
    let mut split = Partition::default();
    for node in nodes {
        if node.cluster_uuid != cluster_uuid {
            return Err(ModelError::ForeignNode {
                node: node.uuid.clone(),
                cluster: cluster_uuid.to_string(),
            });
        }
        if node.is_master {
            split.masters.push(node);
        } else {
            split.workers.push(node);
        }
    }
    Ok(split)
}
