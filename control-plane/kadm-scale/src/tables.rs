use std::collections::HashMap;
use std::sync::LazyLock;

use kadm_models::ScaleRelation;

/// The two console flows that propose master-count changes. They carry
/// intentionally different transition policies and must stay separate: the
/// adjust dialog moves one master at a time, while the templated picker
/// jumps directly between the supported sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeFlow {
    /// Single-step adjust dialog (±1 master per operation).
    Step,
    /// Templated masters picker over the supported sizes {1, 3, 5}.
    Jump,
}

/// One hand-authored row of a transition table, keyed by the exact
/// (start, desired) master counts.
#[derive(Debug)]
pub struct TransitionRule {
    pub start: u32,
    pub desired: u32,
    pub relation: ScaleRelation,
    pub message: &'static str,
}

/// Fallback when no row matches a proposed transition.
pub const NO_MATCH_MESSAGE: &str =
    "masters must total 1, 3, or 5 to hold quorum";

static STEP_TABLE: &[TransitionRule] = &[
    TransitionRule {
        start: 1,
        desired: 0,
        relation: ScaleRelation::Deny,
        message: "Removing the only master would destroy the cluster \
                  control plane",
    },
    TransitionRule {
        start: 1,
        desired: 2,
        relation: ScaleRelation::Deny,
        message: "Two masters cannot establish quorum; grow from one \
                  master directly to three",
    },
    TransitionRule {
        start: 2,
        desired: 1,
        relation: ScaleRelation::Warn,
        message: "A single master leaves no tolerance for master failure",
    },
    TransitionRule {
        start: 2,
        desired: 3,
        relation: ScaleRelation::Allow,
        message: "Three masters can establish quorum",
    },
    TransitionRule {
        start: 3,
        desired: 2,
        relation: ScaleRelation::Warn,
        message: "Two masters cannot establish quorum on their own; \
                  continue scaling down to one",
    },
    TransitionRule {
        start: 3,
        desired: 4,
        relation: ScaleRelation::Warn,
        message: "An even master count does not improve quorum resilience",
    },
    TransitionRule {
        start: 4,
        desired: 3,
        relation: ScaleRelation::Allow,
        message: "Three masters can establish quorum",
    },
    TransitionRule {
        start: 4,
        desired: 5,
        relation: ScaleRelation::Warn,
        message: "Five masters is the supported maximum",
    },
    TransitionRule {
        start: 5,
        desired: 4,
        relation: ScaleRelation::Warn,
        message: "An even master count does not improve quorum resilience",
    },
    TransitionRule {
        start: 5,
        desired: 6,
        relation: ScaleRelation::Deny,
        message: "Clusters cannot have more than five masters",
    },
];

static JUMP_TABLE: &[TransitionRule] = &[
    TransitionRule {
        start: 1,
        desired: 3,
        relation: ScaleRelation::Allow,
        message: "Three masters can establish quorum",
    },
    TransitionRule {
        start: 3,
        desired: 5,
        relation: ScaleRelation::Allow,
        message: "Five masters tolerate up to two master failures",
    },
    TransitionRule {
        start: 3,
        desired: 1,
        relation: ScaleRelation::Warn,
        message: "A single master leaves no tolerance for master failure",
    },
    TransitionRule {
        start: 5,
        desired: 3,
        relation: ScaleRelation::Warn,
        message: "Three masters tolerate only one master failure",
    },
    TransitionRule {
        start: 5,
        desired: 1,
        relation: ScaleRelation::Warn,
        message: "A single master leaves no tolerance for master failure",
    },
    TransitionRule {
        start: 1,
        desired: 5,
        relation: ScaleRelation::Deny,
        message: "Grow the control plane to three masters before five",
    },
];

fn index(
    table: &'static [TransitionRule],
) -> HashMap<(u32, u32), &'static TransitionRule> {
    table
        .iter()
        .map(|rule| ((rule.start, rule.desired), rule))
        .collect()
}

static STEP_INDEX: LazyLock<HashMap<(u32, u32), &'static TransitionRule>> =
    LazyLock::new(|| index(STEP_TABLE));
static JUMP_INDEX: LazyLock<HashMap<(u32, u32), &'static TransitionRule>> =
    LazyLock::new(|| index(JUMP_TABLE));

/// Exact-match lookup; "no match" is an explicit outcome the validator
/// turns into a default deny.
pub fn lookup(
    flow: ResizeFlow,
    start: u32,
    desired: u32,
) -> Option<&'static TransitionRule> {
    let idx = match flow {
        ResizeFlow::Step => &STEP_INDEX,
        ResizeFlow::Jump => &JUMP_INDEX,
    };
    idx.get(&(start, desired)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_no_duplicate_keys() {
        assert_eq!(STEP_INDEX.len(), STEP_TABLE.len());
        assert_eq!(JUMP_INDEX.len(), JUMP_TABLE.len());
    }

    #[test]
    fn flows_stay_separate() {
        // The jump from one to three masters exists only in the picker
        // flow; the adjust dialog has no such row.
        assert!(lookup(ResizeFlow::Jump, 1, 3).is_some());
        assert!(lookup(ResizeFlow::Step, 1, 3).is_none());
    }

    #[test]
    fn unlisted_transition_has_no_row() {
        assert!(lookup(ResizeFlow::Step, 6, 7).is_none());
        assert!(lookup(ResizeFlow::Jump, 2, 4).is_none());
    }
}
