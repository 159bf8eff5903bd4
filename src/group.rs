//! Grouping of placement candidates for collision resolution.
//!
//! The actual pruning policy (which labels lose against which) lives
//! outside this crate. A [`CandidateGroup`] only gathers the one or two
//! boxes of a placement and applies a caller-supplied rule with
//! all-or-none semantics: an articulated label either survives whole or
//! not at all.

use crate::placement::{LabelCandidate, LinePlacement};

/// The candidates of a single placement, resolved together.
#[derive(Debug, Clone, Default)]
pub struct CandidateGroup {
    candidates: Vec<LabelCandidate>,
}

impl CandidateGroup {
    /// Collect the candidates of a placement attempt. A discarded attempt
    /// yields an empty group.
    pub fn from_placement(placement: &LinePlacement<'_>) -> Self {
        Self {
            candidates: placement.candidates().to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &[LabelCandidate] {
        &self.candidates
    }

    /// Apply a pruning rule. `prune` returns the indices of candidates
    /// that must be dropped; a non-empty prune set discards the whole
    /// group. Returns the surviving candidates, or `None` when the group
    /// is pruned away (or was empty to begin with).
    pub fn resolve<F>(&self, prune: F) -> Option<&[LabelCandidate]>
    where
        F: FnOnce(&[LabelCandidate]) -> Vec<usize>,
    {
        if self.candidates.is_empty() {
            return None;
        }
        if prune(&self.candidates).is_empty() {
            Some(&self.candidates)
        } else {
            None
        }
    }
}
