// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forest construction from a flat parent-pointer record list.
//!
//! ## Algorithm
//!
//! One left-to-right pass over the records. For the record at position `i`:
//!
//! - its id becomes `i`;
//! - `parent_id == 0` makes it a root;
//! - otherwise, if at least `parent_id` nodes have been built, entry `parent_id - 1`
//!   of the build-order index becomes its parent;
//! - otherwise the parent is not built yet (a forward reference) or out of range.
//!
//! The last case is handled by the [`BuildPolicy`]. A lenient build skips the record
//! without growing the index, which shifts every later positional parent lookup by one.
//! This is the long-standing behavior of the control and is kept as-is; a strict build
//! reports the first such record instead.

use crate::error::BuildError;
use crate::forest::Forest;
use crate::types::{NodeId, NodeRecord};

/// What to do with a record whose parent has not been built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildPolicy {
    /// Drop the record and keep going. Dropped positions are listed in
    /// [`Forest::dropped`].
    #[default]
    Lenient,
    /// Fail with [`BuildError::DanglingParent`].
    Strict,
}

/// Converts record lists into forests.
///
/// Each build produces a brand-new [`Forest`]; nothing is patched incrementally.
/// The builder counts builds so callers can tell forests apart via [`Forest::epoch`].
#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    policy: BuildPolicy,
    epoch: u64,
}

impl TreeBuilder {
    /// Create a lenient builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an explicit policy.
    pub fn with_policy(policy: BuildPolicy) -> Self {
        Self { policy, epoch: 0 }
    }

    /// Current policy.
    pub fn policy(&self) -> BuildPolicy {
        self.policy
    }

    /// Change the policy for subsequent builds.
    pub fn set_policy(&mut self, policy: BuildPolicy) {
        self.policy = policy;
    }

    /// Number of builds started so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Build a forest, writing the assigned ids back into `records`.
    pub fn build_in_place(&mut self, records: &mut [NodeRecord]) -> Result<Forest, BuildError> {
        for (position, record) in records.iter_mut().enumerate() {
            record.node_id = NodeId::from_position(position).get();
        }
        self.build(records)
    }

    /// Build a forest from `records`.
    ///
    /// Record `node_id` fields are ignored; ids are record positions.
    pub fn build(&mut self, records: &[NodeRecord]) -> Result<Forest, BuildError> {
        self.epoch = self.epoch.wrapping_add(1);
        let mut forest = Forest::with_capacity(records.len(), self.epoch);

        for (position, record) in records.iter().enumerate() {
            let id = NodeId::from_position(position);
            if record.is_root() {
                forest.push(id, None, record);
                continue;
            }
            let parent_id = record.parent_id as usize;
            if forest.built() >= parent_id {
                forest.push(id, Some(parent_id - 1), record);
                continue;
            }
            match self.policy {
                BuildPolicy::Strict => {
                    return Err(BuildError::DanglingParent {
                        position,
                        parent_id: record.parent_id,
                        built: forest.built(),
                    });
                }
                BuildPolicy::Lenient => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        position,
                        parent_id = record.parent_id,
                        built = forest.built(),
                        "dropping record with unbuilt parent"
                    );
                    forest.skip(position);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            epoch = self.epoch,
            records = records.len(),
            nodes = forest.len(),
            roots = forest.roots().len(),
            dropped = forest.dropped().len(),
            "built forest"
        );

        Ok(forest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn names(forest: &Forest, ids: impl Iterator<Item = NodeId>) -> Vec<&str> {
        ids.map(|id| forest.get(id).unwrap().display_name()).collect()
    }

    #[test]
    fn builds_single_root_with_two_children() {
        let records = vec![
            NodeRecord::root("A"),
            NodeRecord::child(1, "B"),
            NodeRecord::child(1, "C"),
        ];
        let forest = TreeBuilder::new().build(&records).unwrap();

        assert_eq!(forest.len(), 3);
        assert_eq!(names(&forest, forest.roots()), vec!["A"]);
        let a = NodeId::new(0);
        assert_eq!(names(&forest, forest.children(a)), vec!["B", "C"]);

        let b = forest.get(NodeId::new(1)).unwrap();
        assert_eq!(b.parent_id(), 1);
        assert_eq!(forest.parent(b.id()), Some(a));
        let c = forest.get(NodeId::new(2)).unwrap();
        assert_eq!(c.parent_id(), 1);
        assert_eq!(forest.parent(c.id()), Some(a));
    }

    #[test]
    fn record_ids_are_replaced_by_positions() {
        let mut records = vec![
            NodeRecord {
                node_id: 42,
                ..NodeRecord::root("root")
            },
            NodeRecord {
                node_id: 7,
                ..NodeRecord::child(1, "leaf")
            },
        ];
        let forest = TreeBuilder::new().build_in_place(&mut records).unwrap();
        assert_eq!(records[0].node_id, 0);
        assert_eq!(records[1].node_id, 1);
        assert_eq!(forest.get(NodeId::new(1)).unwrap().display_name(), "leaf");
    }

    #[test]
    fn forward_reference_is_dropped() {
        // Record 0 points at position 2, which is not built yet.
        let records = vec![
            NodeRecord::child(2, "early"),
            NodeRecord::root("A"),
            NodeRecord::child(1, "B"),
        ];
        let forest = TreeBuilder::new().build(&records).unwrap();
        assert_eq!(forest.len(), records.len() - 1);
        assert_eq!(forest.dropped(), &[0]);
        assert!(!forest.contains(NodeId::new(0)));
    }

    #[test]
    fn drop_shifts_later_positional_lookups() {
        // Position 1 is dropped, so the index holds [A, C] and `parent_id: 2`
        // on the last record resolves to C instead of the dropped record.
        let records = vec![
            NodeRecord::root("A"),
            NodeRecord::child(5, "dangling"),
            NodeRecord::child(1, "C"),
            NodeRecord::child(2, "D"),
        ];
        let forest = TreeBuilder::new().build(&records).unwrap();
        assert_eq!(forest.dropped(), &[1]);
        let d = NodeId::new(3);
        assert_eq!(forest.parent(d), Some(NodeId::new(2)));
        assert_eq!(forest.get(d).unwrap().parent_id(), 2);
    }

    #[test]
    fn strict_policy_reports_dangling_parent() {
        let records = vec![NodeRecord::root("A"), NodeRecord::child(9, "lost")];
        let err = TreeBuilder::with_policy(BuildPolicy::Strict)
            .build(&records)
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DanglingParent {
                position: 1,
                parent_id: 9,
                built: 1,
            }
        );
    }

    #[test]
    fn self_reference_is_dropped() {
        // A record naming itself as parent is a forward reference.
        let records = vec![NodeRecord::child(1, "self")];
        let forest = TreeBuilder::new().build(&records).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.dropped(), &[0]);
    }

    #[test]
    fn each_build_bumps_the_epoch() {
        let records = vec![NodeRecord::root("A")];
        let mut builder = TreeBuilder::new();
        let first = builder.build(&records).unwrap();
        let second = builder.build(&records).unwrap();
        assert_eq!(first.epoch(), 1);
        assert_eq!(second.epoch(), 2);
        assert_eq!(builder.epoch(), 2);
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        let forest = TreeBuilder::new().build(&[]).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.roots().len(), 0);
    }
}
