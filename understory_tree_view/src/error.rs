// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural errors reported by a strict build.

use thiserror::Error;

/// Errors produced by [`TreeBuilder::build`](crate::builder::TreeBuilder::build)
/// under [`BuildPolicy::Strict`](crate::builder::BuildPolicy::Strict).
///
/// The lenient policy never fails; it drops the offending record instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A record references a parent that has not been built yet.
    #[error("record {position} references parent {parent_id}, but only {built} nodes were built")]
    DanglingParent {
        /// Position of the offending record.
        position: usize,
        /// The 1-based parent position it carried.
        parent_id: u32,
        /// Number of nodes built when the record was reached.
        built: usize,
    },
}
