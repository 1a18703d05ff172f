// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control configuration.

use crate::builder::BuildPolicy;
use crate::indent::{DEFAULT_INDENT, IndentCalculator};
use crate::layout::RowMetrics;
use crate::types::Margin;

/// Padding added around row content once per nesting level when none is configured.
pub const DEFAULT_ROW_PADDING: f64 = 4.0;

/// Appearance and behavior settings of a [`TreeView`](crate::view::TreeView).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeViewConfig {
    /// Added to every edge of the content padding once per nesting level.
    pub row_default_padding: Margin,
    /// Base padding of the text label.
    pub text_padding: Margin,
    /// Expander indent per nesting level.
    pub indent_amount: f64,
    /// Whether expander arrows are drawn and clickable.
    pub expander_visible: bool,
    /// How records with an unbuilt parent are handled.
    pub build_policy: BuildPolicy,
    /// Row sizes used by [`TreeView::layout`](crate::view::TreeView::layout).
    pub metrics: RowMetrics,
}

impl Default for TreeViewConfig {
    fn default() -> Self {
        Self {
            row_default_padding: Margin::uniform(DEFAULT_ROW_PADDING),
            text_padding: Margin::ZERO,
            indent_amount: DEFAULT_INDENT,
            expander_visible: true,
            build_policy: BuildPolicy::Lenient,
            metrics: RowMetrics::default(),
        }
    }
}

impl TreeViewConfig {
    /// Calculator for the expander margin.
    pub fn indent(&self) -> IndentCalculator {
        IndentCalculator::new(self.indent_amount, Margin::ZERO)
    }
}
