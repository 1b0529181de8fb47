use kadm_models::{ScaleRelation, ScaleValidationResult};
use tracing::debug;

use crate::config::ScaleConfig;
use crate::tables::{self, NO_MATCH_MESSAGE, ResizeFlow};

fn result(relation: ScaleRelation, message: &str) -> ScaleValidationResult {
    ScaleValidationResult {
        relation,
        message: message.to_string(),
    }
}

/// Decide whether a proposed master-count change is permitted, consulting
/// the transition table of the flow that proposed it. Every outcome is
/// data; a transition with no row is a deterministic default deny, never
/// an error.
pub fn validate_master_resize(
    flow: ResizeFlow,
    start: u32,
    desired: u32,
) -> ScaleValidationResult {
    if start == desired {
        return result(ScaleRelation::Allow, "");
    }

    match tables::lookup(flow, start, desired) {
        Some(rule) => result(rule.relation, rule.message),
        None => {
            debug!(?flow, start, desired, "no transition rule; denying");
            result(ScaleRelation::Deny, NO_MATCH_MESSAGE)
        }
    }
}

/// Bound a single worker scale operation: at least one node must be
/// selected, and no more than the configured cap may move at once. The
/// bound is independent of the master quorum tables.
pub fn validate_worker_delta(
    selected: usize,
    cfg: &ScaleConfig,
) -> ScaleValidationResult {
    if selected == 0 {
        return result(
            ScaleRelation::Deny,
            "Select at least one node to scale",
        );
    }
    if selected > cfg.max_nodes_per_operation {
        return result(
            ScaleRelation::Deny,
            &format!(
                "No more than {} nodes can be added or removed in a single \
                 operation",
                cfg.max_nodes_per_operation
            ),
        );
    }
    result(ScaleRelation::Allow, "")
}
