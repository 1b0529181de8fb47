use crate::health::resolve_health;
use crate::quorum::NodeSetCounts;
use kadm_models::{ConnectionState, NodeSetHealth, OverallHealth};

fn counts(total: usize, healthy: usize) -> NodeSetCounts {
    NodeSetCounts { total, healthy }
}

const STEADY: [NodeSetHealth; 3] = [
    NodeSetHealth::Healthy,
    NodeSetHealth::PartiallyHealthy,
    NodeSetHealth::Unhealthy,
];

#[test]
fn combination_table_is_total() {
    for masters in STEADY {
        for workers in STEADY {
            let res = resolve_health(
                ConnectionState::Connected,
                masters,
                workers,
                false,
                &counts(3, 2),
                &counts(4, 2),
            );
            assert_ne!(
                res.state,
                OverallHealth::Unknown,
                "no verdict for ({:?}, {:?})",
                masters,
                workers
            );
            assert!(!res.message.is_empty());
        }
    }
}

#[test]
fn both_healthy_is_healthy() {
    let res = resolve_health(
        ConnectionState::Connected,
        NodeSetHealth::Healthy,
        NodeSetHealth::Healthy,
        false,
        &counts(3, 3),
        &counts(4, 4),
    );
    assert_eq!(res.state, OverallHealth::Healthy);
    assert_eq!(
        res.message,
        "all 3 masters are healthy and all 4 workers are healthy"
    );
}

#[test]
fn lost_master_quorum_dominates() {
    for workers in STEADY {
        let res = resolve_health(
            ConnectionState::Connected,
            NodeSetHealth::Unhealthy,
            workers,
            false,
            &counts(3, 1),
            &counts(4, 4),
        );
        assert_eq!(res.state, OverallHealth::Unhealthy);
        assert!(res.message.contains("Quorum failed"));
    }
}

#[test]
fn degraded_masters_with_quorum_cap_verdict_at_partially_healthy() {
    // While quorum still holds, even a worker-majority loss does not push
    // the overall verdict to unhealthy; the master verdict dominates.
    let res = resolve_health(
        ConnectionState::Connected,
        NodeSetHealth::PartiallyHealthy,
        NodeSetHealth::Unhealthy,
        false,
        &counts(3, 2),
        &counts(4, 1),
    );
    assert_eq!(res.state, OverallHealth::PartiallyHealthy);
}

#[test]
fn healthy_masters_with_unhealthy_workers_is_unhealthy() {
    let res = resolve_health(
        ConnectionState::Connected,
        NodeSetHealth::Healthy,
        NodeSetHealth::Unhealthy,
        false,
        &counts(3, 3),
        &counts(4, 1),
    );
    assert_eq!(res.state, OverallHealth::Unhealthy);
    assert!(res.message.contains("3 out of 4 workers are unhealthy"));
}

#[test]
fn disconnected_cluster_health_is_unknown() {
    let res = resolve_health(
        ConnectionState::Disconnected,
        NodeSetHealth::Healthy,
        NodeSetHealth::Healthy,
        false,
        &counts(0, 0),
        &counts(0, 0),
    );
    assert_eq!(res.state, OverallHealth::Unknown);
}

#[test]
fn transient_connection_state_is_mirrored() {
    let cases = [
        (ConnectionState::Creating, OverallHealth::Creating),
        (ConnectionState::Deleting, OverallHealth::Deleting),
        (ConnectionState::Updating, OverallHealth::Updating),
        (ConnectionState::Upgrading, OverallHealth::Upgrading),
        (ConnectionState::Converging, OverallHealth::Converging),
    ];
    for (connection, expected) in cases {
        let res = resolve_health(
            connection,
            NodeSetHealth::Healthy,
            NodeSetHealth::Healthy,
            false,
            &counts(3, 3),
            &counts(4, 4),
        );
        assert_eq!(res.state, expected);
    }
}

#[test]
fn available_upgrade_wins_over_healthy_verdicts() {
    let res = resolve_health(
        ConnectionState::Connected,
        NodeSetHealth::Healthy,
        NodeSetHealth::Healthy,
        true,
        &counts(3, 3),
        &counts(4, 4),
    );
    assert_eq!(res.state, OverallHealth::NeedsUpgrade);
}

#[test]
fn messages_are_rebuilt_from_live_counts() {
    // The same table row looked up with different counts must produce
    // different messages; nothing may be memoized on the row.
    let first = resolve_health(
        ConnectionState::Connected,
        NodeSetHealth::PartiallyHealthy,
        NodeSetHealth::Healthy,
        false,
        &counts(3, 2),
        &counts(4, 4),
    );
    let second = resolve_health(
        ConnectionState::Connected,
        NodeSetHealth::PartiallyHealthy,
        NodeSetHealth::Healthy,
        false,
        &counts(5, 4),
        &counts(2, 2),
    );
    assert!(first.message.contains("1 out of 3 masters"));
    assert!(second.message.contains("1 out of 5 masters"));

    // And identical inputs reproduce the identical string.
    let again = resolve_health(
        ConnectionState::Connected,
        NodeSetHealth::PartiallyHealthy,
        NodeSetHealth::Healthy,
        false,
        &counts(3, 2),
        &counts(4, 4),
    );
    assert_eq!(first, again);
}
