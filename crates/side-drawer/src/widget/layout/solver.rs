//! Constraint resolution into frames.
//!
//! The solver walks a subtree parents-first and turns each view's installed
//! [`Constraint`]s into a frame in its parent's coordinates. A view's
//! constraints are the ones installed on the view itself or on its parent
//! whose `item` is that view.
//!
//! # Resolution Rules
//!
//! - If both opposing edges are bound (leading+trailing or top+bottom), the
//!   view is sized to fit between them.
//! - If only one edge is bound, the view keeps its width/height (from a
//!   dimension constraint, or its current frame) and sits against that edge.
//! - A center binding positions the view's center point.
//! - An axis with no positional binding keeps the current origin.
//! - `LessThanOrEqual`/`GreaterThanOrEqual` bound widths and heights. They
//!   are ignored on edges and centers.
//!
//! Related views may be the parent or an earlier sibling. Anything else is
//! skipped with a trace log.

use side_drawer_core::logging::{span_names, targets};
use side_drawer_core::{Attribute, Constraint, Rect, Relation, ViewId, ViewResult, ViewTree};

/// Resolved values for a single view during solving.
#[derive(Debug, Clone, Copy, Default)]
struct ResolvedAnchors {
    leading: Option<f32>,
    trailing: Option<f32>,
    top: Option<f32>,
    bottom: Option<f32>,
    center_x: Option<f32>,
    center_y: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    min_width: Option<f32>,
    max_width: Option<f32>,
    min_height: Option<f32>,
    max_height: Option<f32>,
}

impl ResolvedAnchors {
    fn set(&mut self, attribute: Attribute, value: f32) {
        let slot = match attribute {
            Attribute::Leading => &mut self.leading,
            Attribute::Trailing => &mut self.trailing,
            Attribute::Top => &mut self.top,
            Attribute::Bottom => &mut self.bottom,
            Attribute::CenterX => &mut self.center_x,
            Attribute::CenterY => &mut self.center_y,
            Attribute::Width => &mut self.width,
            Attribute::Height => &mut self.height,
        };
        *slot = Some(value);
    }

    fn bound(&mut self, attribute: Attribute, relation: Relation, value: f32) {
        let slot = match (attribute, relation) {
            (Attribute::Width, Relation::LessThanOrEqual) => &mut self.max_width,
            (Attribute::Width, Relation::GreaterThanOrEqual) => &mut self.min_width,
            (Attribute::Height, Relation::LessThanOrEqual) => &mut self.max_height,
            (Attribute::Height, Relation::GreaterThanOrEqual) => &mut self.min_height,
            _ => return,
        };
        *slot = Some(match (*slot, relation) {
            (Some(old), Relation::LessThanOrEqual) => old.min(value),
            (Some(old), _) => old.max(value),
            (None, _) => value,
        });
    }
}

/// Position of an attribute within a rectangle.
#[inline]
pub fn attribute_value(rect: Rect, attribute: Attribute) -> f32 {
    match attribute {
        Attribute::Leading => rect.left(),
        Attribute::Trailing => rect.right(),
        Attribute::Top => rect.top(),
        Attribute::Bottom => rect.bottom(),
        Attribute::CenterX => rect.center().x,
        Attribute::CenterY => rect.center().y,
        Attribute::Width => rect.width(),
        Attribute::Height => rect.height(),
    }
}

/// Compute the frame `view`'s constraints resolve to, without applying it.
///
/// Views with no constraints keep their current frame.
pub fn resolve_frame(tree: &ViewTree, view: ViewId) -> ViewResult<Rect> {
    let current = tree.frame(view)?;
    let constraints = tree.constraints_for(view)?;
    if constraints.is_empty() {
        return Ok(current);
    }

    let parent = tree.parent(view)?;
    let mut resolved = ResolvedAnchors::default();

    for constraint in &constraints {
        let Some(value) = constraint_value(tree, parent, constraint)? else {
            tracing::trace!(
                target: targets::LAYOUT,
                ?view,
                ?constraint,
                "skipping constraint with unreachable related view"
            );
            continue;
        };

        match constraint.relation {
            Relation::Equal => resolved.set(constraint.attribute, value),
            relation if constraint.is_dimension() => {
                resolved.bound(constraint.attribute, relation, value)
            }
            _ => {
                tracing::trace!(
                    target: targets::LAYOUT,
                    ?view,
                    ?constraint,
                    "inequality on a positional attribute is not supported"
                );
            }
        }
    }

    let width = clamp(
        resolved.width.unwrap_or(current.width()),
        resolved.min_width,
        resolved.max_width,
    );
    let height = clamp(
        resolved.height.unwrap_or(current.height()),
        resolved.min_height,
        resolved.max_height,
    );

    let (x, width) = resolve_axis(
        resolved.leading,
        resolved.trailing,
        resolved.center_x,
        width,
        current.origin.x,
    );
    let (y, height) = resolve_axis(
        resolved.top,
        resolved.bottom,
        resolved.center_y,
        height,
        current.origin.y,
    );

    Ok(Rect::new(x, y, width, height))
}

/// Solve and apply frames for `root` and every view beneath it.
///
/// `root` itself is solved only when it has a parent.
pub fn layout_if_needed(tree: &mut ViewTree, root: ViewId) -> ViewResult<()> {
    let _span =
        tracing::trace_span!(target: targets::LAYOUT, span_names::LAYOUT_PASS, ?root).entered();

    let order = tree.depth_first_preorder(root)?;
    let mut solved = 0usize;
    for view in order {
        if tree.parent(view)?.is_none() {
            continue;
        }
        let frame = resolve_frame(tree, view)?;
        if frame != tree.frame(view)? {
            tree.set_frame(view, frame)?;
            solved += 1;
        }
    }

    tracing::trace!(target: targets::LAYOUT, ?root, changed = solved, "layout pass finished");
    Ok(())
}

fn constraint_value(
    tree: &ViewTree,
    parent: Option<ViewId>,
    constraint: &Constraint,
) -> ViewResult<Option<f32>> {
    let Some((to_item, to_attribute)) = constraint.to else {
        return Ok(Some(constraint.constant));
    };

    let reference = if Some(to_item) == parent {
        tree.frame(to_item)?.bounds()
    } else if tree.contains(to_item)
        && to_item != constraint.item
        && parent.is_some()
        && tree.parent(to_item)? == parent
    {
        tree.frame(to_item)?
    } else {
        return Ok(None);
    };

    Ok(Some(
        attribute_value(reference, to_attribute) * constraint.multiplier + constraint.constant,
    ))
}

fn clamp(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let value = max.map_or(value, |max| value.min(max));
    min.map_or(value, |min| value.max(min)).max(0.0)
}

fn resolve_axis(
    start: Option<f32>,
    end: Option<f32>,
    center: Option<f32>,
    length: f32,
    fallback: f32,
) -> (f32, f32) {
    match (start, end, center) {
        (Some(start), Some(end), _) => (start, (end - start).max(0.0)),
        (Some(start), None, _) => (start, length),
        (None, Some(end), _) => (end - length, length),
        (None, None, Some(center)) => (center - length / 2.0, length),
        (None, None, None) => (fallback, length),
    }
}
