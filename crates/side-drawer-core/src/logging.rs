//! Logging and debugging facilities for side drawers.
//!
//! This module provides:
//! - Target and span names used with the `tracing` crate
//! - Debug visualization for view trees
//!
//! # Tracing Integration
//!
//! Everything is instrumented with `tracing`. To see logs, install a
//! subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("side_drawer=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use side_drawer_core::{Rect, ViewTree};
//! use side_drawer_core::logging::ViewTreeDebug;
//!
//! let mut tree = ViewTree::new();
//! let window = tree.create_view_with_frame("window", Rect::new(0.0, 0.0, 320.0, 480.0));
//! let panel = tree.create_view("panel");
//! tree.add_child(window, panel).unwrap();
//!
//! let dump = ViewTreeDebug::new().format_subtree(&tree, window).unwrap();
//! assert!(dump.contains("panel"));
//! ```

use std::fmt::Write as FmtWrite;

use crate::view::{ViewId, ViewResult, ViewTree};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// View tree mutations.
    pub const VIEW: &str = "side_drawer_core::view";
    /// Constraint solving.
    pub const LAYOUT: &str = "side_drawer::layout";
    /// Animation scheduling and completion.
    pub const ANIMATION: &str = "side_drawer::animation";
    /// Touch and tap handling.
    pub const GESTURE: &str = "side_drawer::gesture";
    /// Overlay state machine.
    pub const OVERLAY: &str = "side_drawer::overlay";
}

/// Span names used for tracing.
pub mod span_names {
    /// A single item show/hide transition.
    pub const TRANSITION: &str = "side_drawer::transition";
    /// A batched hide of every shown item.
    pub const HIDE_ALL: &str = "side_drawer::hide_all";
    /// A constraint layout pass.
    pub const LAYOUT_PASS: &str = "side_drawer::layout_pass";
}

/// Style options for view tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Configuration for view tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show view IDs.
    pub show_ids: bool,
    /// Whether to show frames.
    pub show_frames: bool,
    /// Whether to show opacity and interaction state.
    pub show_state: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_frames: true,
            show_state: true,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Names only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_frames: false,
            show_state: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a view hierarchy.
#[derive(Debug, Clone, Default)]
pub struct ViewTreeDebug {
    options: TreeFormatOptions,
}

impl ViewTreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the subtree rooted at `root`, one view per line.
    pub fn format_subtree(&self, tree: &ViewTree, root: ViewId) -> ViewResult<String> {
        let mut output = String::new();
        self.format_into(tree, root, "", true, 0, &mut output)?;
        Ok(output)
    }

    fn format_into(
        &self,
        tree: &ViewTree,
        id: ViewId,
        indent: &str,
        is_last: bool,
        depth: usize,
        output: &mut String,
    ) -> ViewResult<()> {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let (tee, corner, bar) = match self.options.style {
            TreeStyle::Ascii => ("+-- ", "`-- ", "|   "),
            TreeStyle::Unicode => (
                "\u{251c}\u{2500}\u{2500} ",
                "\u{2514}\u{2500}\u{2500} ",
                "\u{2502}   ",
            ),
        };

        output.push_str(indent);
        if depth > 0 {
            output.push_str(if is_last { corner } else { tee });
        }

        let name = tree.name(id)?;
        output.push_str(if name.is_empty() { "(unnamed)" } else { name });

        if self.options.show_ids {
            write!(output, " [{:?}]", id).expect("write to String");
        }
        if self.options.show_frames {
            let f = tree.frame(id)?;
            write!(
                output,
                " ({:.1}, {:.1}, {:.1}x{:.1})",
                f.origin.x, f.origin.y, f.size.width, f.size.height
            )
            .expect("write to String");
        }
        if self.options.show_state {
            write!(output, " alpha={:.2}", tree.alpha(id)?).expect("write to String");
            if !tree.is_interaction_enabled(id)? {
                output.push_str(" no-touch");
            }
        }
        output.push('\n');

        let child_indent = if depth == 0 {
            String::new()
        } else if is_last {
            format!("{indent}    ")
        } else {
            format!("{indent}{bar}")
        };

        let children = tree.children(id)?;
        let count = children.len();
        for (i, &child) in children.iter().enumerate() {
            self.format_into(tree, child, &child_indent, i + 1 == count, depth + 1, output)?;
        }

        Ok(())
    }
}
