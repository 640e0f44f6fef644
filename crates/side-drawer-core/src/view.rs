//! View hierarchy for side drawer hosts.
//!
//! Provides the retained view tree that drawers attach to:
//! - Stable view identifiers via arena-based storage
//! - Parent-child relationships with cascading destruction
//! - Per-view frame, opacity, interaction flag and background color
//! - Installed layout constraints, keyed by owner view
//! - Hit testing in window coordinates
//!
//! # Key Types
//!
//! - [`ViewId`] - Unique stable identifier for each view
//! - [`ViewTree`] - Arena owning every view and its relationships
//! - [`SharedViewTree`] - Cloneable handle shared between a host and its overlays
//!
//! # Example
//!
//! ```
//! use side_drawer_core::{Rect, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! let window = tree.create_view_with_frame("window", Rect::new(0.0, 0.0, 320.0, 480.0));
//! let content = tree.create_view("content");
//! tree.add_child(window, content).unwrap();
//!
//! assert_eq!(tree.parent(content).unwrap(), Some(window));
//! assert!(tree.is_descendant_of(content, window));
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};
use static_assertions::assert_impl_all;
use thiserror::Error;

use crate::constraint::Constraint;
use crate::geometry::{Color, Point, Rect};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a view in a [`ViewTree`].
    ///
    /// `ViewId`s stay valid while the tree is rearranged and become invalid
    /// once the view is destroyed.
    pub struct ViewId;
}

impl ViewId {
    /// Convert the ViewId to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// Errors that can occur during view tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The view ID is invalid or the view has been destroyed.
    #[error("invalid or destroyed view id")]
    InvalidViewId,
    /// Attempted to make a view its own parent or ancestor.
    #[error("cannot make a view its own parent or ancestor")]
    CircularParentage,
}

/// Result type for view tree operations.
pub type ViewResult<T> = std::result::Result<T, ViewError>;

/// Opacity below which a view no longer receives touches.
pub const MIN_HIT_TEST_ALPHA: f32 = 0.01;

#[derive(Debug, Clone)]
struct ViewData {
    name: String,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    frame: Rect,
    alpha: f32,
    background: Option<Color>,
    interaction_enabled: bool,
    hidden: bool,
    constraints: Vec<Constraint>,
}

impl ViewData {
    fn new(name: String) -> Self {
        Self {
            name,
            parent: None,
            children: Vec::new(),
            frame: Rect::ZERO,
            alpha: 1.0,
            background: None,
            interaction_enabled: true,
            hidden: false,
            constraints: Vec::new(),
        }
    }
}

/// The arena that owns every view and its relationships.
///
/// # Related Types
///
/// - [`SharedViewTree`] - Shared handle for hosts and overlays
/// - [`ViewId`] - Keys into this tree
#[derive(Debug, Default)]
pub struct ViewTree {
    views: SlotMap<ViewId, ViewData>,
}

impl ViewTree {
    /// Create a new empty view tree.
    pub fn new() -> Self {
        Self {
            views: SlotMap::with_key(),
        }
    }

    /// Create a new parentless view and return its ID.
    pub fn create_view(&mut self, name: impl Into<String>) -> ViewId {
        let name = name.into();
        let id = self.views.insert(ViewData::new(name));
        tracing::trace!(target: targets::VIEW, ?id, name = %self.views[id].name, "created view");
        id
    }

    /// Create a new parentless view with an explicit frame.
    pub fn create_view_with_frame(&mut self, name: impl Into<String>, frame: Rect) -> ViewId {
        let id = self.create_view(name);
        self.views[id].frame = frame;
        id
    }

    /// Remove a view and all its descendants.
    ///
    /// Constraints referencing any removed view are uninstalled from the
    /// surviving views as well.
    #[tracing::instrument(skip(self), target = "side_drawer_core::view", level = "trace")]
    pub fn destroy(&mut self, id: ViewId) -> ViewResult<()> {
        let mut doomed = self.depth_first_preorder(id)?;
        self.detach_from_parent(id);

        for &view in &doomed {
            self.views.remove(view);
        }
        doomed.sort_unstable();

        for data in self.views.values_mut() {
            data.constraints.retain(|c| {
                doomed.binary_search(&c.item).is_err()
                    && c.to.is_none_or(|(to, _)| doomed.binary_search(&to).is_err())
            });
        }

        tracing::trace!(target: targets::VIEW, ?id, removed = doomed.len(), "destroyed view tree");
        Ok(())
    }

    /// Check if a view exists.
    #[inline]
    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(id)
    }

    fn data(&self, id: ViewId) -> ViewResult<&ViewData> {
        self.views.get(id).ok_or(ViewError::InvalidViewId)
    }

    fn data_mut(&mut self, id: ViewId) -> ViewResult<&mut ViewData> {
        self.views.get_mut(id).ok_or(ViewError::InvalidViewId)
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    /// Set the parent of a view, appending it as the topmost child.
    ///
    /// Passing `None` makes the view a root.
    pub fn set_parent(&mut self, id: ViewId, new_parent: Option<ViewId>) -> ViewResult<()> {
        if !self.views.contains_key(id) {
            return Err(ViewError::InvalidViewId);
        }

        if let Some(parent_id) = new_parent {
            if !self.views.contains_key(parent_id) {
                return Err(ViewError::InvalidViewId);
            }
            if self.is_descendant_of(parent_id, id) {
                return Err(ViewError::CircularParentage);
            }
        }

        self.detach_from_parent(id);
        self.views[id].parent = new_parent;
        if let Some(parent_id) = new_parent {
            self.views[parent_id].children.push(id);
        }

        Ok(())
    }

    /// Append `child` to `parent`'s children.
    #[inline]
    pub fn add_child(&mut self, parent: ViewId, child: ViewId) -> ViewResult<()> {
        self.set_parent(child, Some(parent))
    }

    /// Detach a view from its parent, making it a root.
    #[inline]
    pub fn remove_from_parent(&mut self, id: ViewId) -> ViewResult<()> {
        self.set_parent(id, None)
    }

    fn detach_from_parent(&mut self, id: ViewId) {
        let old_parent = self.views.get(id).and_then(|d| d.parent);
        if let Some(parent_id) = old_parent {
            if let Some(parent_data) = self.views.get_mut(parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }
        if let Some(data) = self.views.get_mut(id) {
            data.parent = None;
        }
    }

    /// Get the parent of a view.
    pub fn parent(&self, id: ViewId) -> ViewResult<Option<ViewId>> {
        self.data(id).map(|d| d.parent)
    }

    /// Get the children of a view, bottom-most first.
    pub fn children(&self, id: ViewId) -> ViewResult<&[ViewId]> {
        self.data(id).map(|d| d.children.as_slice())
    }

    /// Get the view's name.
    pub fn name(&self, id: ViewId) -> ViewResult<&str> {
        self.data(id).map(|d| d.name.as_str())
    }

    /// Get the topmost ancestor of a view (the view itself if it is a root).
    pub fn root(&self, id: ViewId) -> ViewResult<ViewId> {
        let mut current = id;
        while let Some(parent) = self.data(current)?.parent {
            current = parent;
        }
        Ok(current)
    }

    /// Check if `id` is `ancestor` or lies anywhere beneath it.
    ///
    /// Returns `false` if either view does not exist.
    pub fn is_descendant_of(&self, id: ViewId, ancestor: ViewId) -> bool {
        if !self.views.contains_key(ancestor) {
            return false;
        }
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == ancestor {
                return true;
            }
            current = self.views.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    /// Get all ancestors of a view, nearest first.
    pub fn ancestors(&self, id: ViewId) -> ViewResult<Vec<ViewId>> {
        let mut result = Vec::new();
        let mut current = self.data(id)?.parent;
        while let Some(parent) = current {
            result.push(parent);
            current = self.views.get(parent).and_then(|d| d.parent);
        }
        Ok(result)
    }

    /// The view and all its descendants, parents before children.
    pub fn depth_first_preorder(&self, id: ViewId) -> ViewResult<Vec<ViewId>> {
        self.data(id)?;
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            if let Some(data) = self.views.get(current) {
                stack.extend(data.children.iter().rev().copied());
            }
        }
        Ok(result)
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Get the view's frame in its parent's coordinates.
    pub fn frame(&self, id: ViewId) -> ViewResult<Rect> {
        self.data(id).map(|d| d.frame)
    }

    /// Set the view's frame in its parent's coordinates.
    pub fn set_frame(&mut self, id: ViewId, frame: Rect) -> ViewResult<()> {
        self.data_mut(id)?.frame = frame;
        Ok(())
    }

    /// Get the view's frame converted to its root's coordinates.
    pub fn frame_in_root(&self, id: ViewId) -> ViewResult<Rect> {
        let mut frame = self.data(id)?.frame;
        for ancestor in self.ancestors(id)? {
            let data = self.data(ancestor)?;
            // The root's own origin is in screen space, not part of the tree.
            if data.parent.is_some() {
                frame = frame.offset(data.frame.origin.x, data.frame.origin.y);
            }
        }
        Ok(frame)
    }

    /// Get the view's opacity.
    pub fn alpha(&self, id: ViewId) -> ViewResult<f32> {
        self.data(id).map(|d| d.alpha)
    }

    /// Set the view's opacity, clamped to 0.0-1.0.
    pub fn set_alpha(&mut self, id: ViewId, alpha: f32) -> ViewResult<()> {
        self.data_mut(id)?.alpha = alpha.clamp(0.0, 1.0);
        Ok(())
    }

    /// Get the view's background color, if any.
    pub fn background(&self, id: ViewId) -> ViewResult<Option<Color>> {
        self.data(id).map(|d| d.background)
    }

    /// Set the view's background color.
    pub fn set_background(&mut self, id: ViewId, color: Option<Color>) -> ViewResult<()> {
        self.data_mut(id)?.background = color;
        Ok(())
    }

    /// Check if the view takes part in hit testing.
    pub fn is_interaction_enabled(&self, id: ViewId) -> ViewResult<bool> {
        self.data(id).map(|d| d.interaction_enabled)
    }

    /// Enable or disable hit testing for the view and its subtree.
    pub fn set_interaction_enabled(&mut self, id: ViewId, enabled: bool) -> ViewResult<()> {
        self.data_mut(id)?.interaction_enabled = enabled;
        Ok(())
    }

    /// Check if the view is explicitly hidden.
    pub fn is_hidden(&self, id: ViewId) -> ViewResult<bool> {
        self.data(id).map(|d| d.hidden)
    }

    /// Hide or show the view.
    pub fn set_hidden(&mut self, id: ViewId, hidden: bool) -> ViewResult<()> {
        self.data_mut(id)?.hidden = hidden;
        Ok(())
    }

    // =========================================================================
    // Constraints
    // =========================================================================

    /// Install constraints on an owner view.
    pub fn install_constraints<I>(&mut self, owner: ViewId, constraints: I) -> ViewResult<()>
    where
        I: IntoIterator<Item = Constraint>,
    {
        let data = self.data_mut(owner)?;
        let before = data.constraints.len();
        data.constraints.extend(constraints);
        tracing::trace!(
            target: targets::VIEW,
            ?owner,
            added = data.constraints.len() - before,
            "installed constraints"
        );
        Ok(())
    }

    /// Uninstall constraints from an owner view.
    ///
    /// Each given constraint removes one equal installed constraint. Returns
    /// the number actually removed.
    pub fn uninstall_constraints(
        &mut self,
        owner: ViewId,
        constraints: &[Constraint],
    ) -> ViewResult<usize> {
        let data = self.data_mut(owner)?;
        let mut removed = 0;
        for constraint in constraints {
            if let Some(pos) = data.constraints.iter().position(|c| c == constraint) {
                data.constraints.remove(pos);
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Constraints installed on an owner view.
    pub fn constraints(&self, owner: ViewId) -> ViewResult<&[Constraint]> {
        self.data(owner).map(|d| d.constraints.as_slice())
    }

    /// Constraints that position `item`, gathered from the item itself and
    /// its parent, in installation order.
    pub fn constraints_for(&self, item: ViewId) -> ViewResult<Vec<Constraint>> {
        let data = self.data(item)?;
        let mut owners = vec![item];
        if let Some(parent) = data.parent {
            owners.push(parent);
        }

        let mut result = Vec::new();
        for owner in owners {
            if let Some(owner_data) = self.views.get(owner) {
                result.extend(owner_data.constraints.iter().filter(|c| c.item == item));
            }
        }
        Ok(result)
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Find the deepest view under `point`, given in `root`'s coordinates.
    ///
    /// Hidden views, views with opacity below [`MIN_HIT_TEST_ALPHA`] and views
    /// with interaction disabled are skipped along with their subtrees.
    /// Later siblings are on top.
    pub fn hit_test(&self, root: ViewId, point: Point) -> Option<ViewId> {
        let data = self.views.get(root)?;
        if !Rect::from_size(data.frame.size).contains(point) || !self.accepts_hits(data) {
            return None;
        }
        self.hit_test_children(root, point).or(Some(root))
    }

    fn hit_test_children(&self, id: ViewId, local: Point) -> Option<ViewId> {
        let data = self.views.get(id)?;
        for &child in data.children.iter().rev() {
            let Some(child_data) = self.views.get(child) else {
                continue;
            };
            if !self.accepts_hits(child_data) || !child_data.frame.contains(local) {
                continue;
            }
            let child_local = Point::new(
                local.x - child_data.frame.origin.x,
                local.y - child_data.frame.origin.y,
            );
            return self.hit_test_children(child, child_local).or(Some(child));
        }
        None
    }

    fn accepts_hits(&self, data: &ViewData) -> bool {
        !data.hidden && data.interaction_enabled && data.alpha >= MIN_HIT_TEST_ALPHA
    }
}

/// A cloneable, lock-protected handle to a [`ViewTree`].
///
/// Hosts keep one handle and hand clones to overlays. Every accessor takes
/// the lock for the duration of the call only.
#[derive(Debug, Clone, Default)]
pub struct SharedViewTree {
    inner: Arc<RwLock<ViewTree>>,
}

assert_impl_all!(SharedViewTree: Send, Sync);

impl SharedViewTree {
    /// Create a handle to a new empty tree.
    pub fn new() -> Self {
        Self::from_tree(ViewTree::new())
    }

    /// Wrap an existing tree.
    pub fn from_tree(tree: ViewTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Create a parentless view.
    pub fn create_view(&self, name: impl Into<String>) -> ViewId {
        self.inner.write().create_view(name)
    }

    /// Create a parentless view with an explicit frame.
    pub fn create_view_with_frame(&self, name: impl Into<String>, frame: Rect) -> ViewId {
        self.inner.write().create_view_with_frame(name, frame)
    }

    /// Append `child` to `parent`'s children.
    pub fn add_child(&self, parent: ViewId, child: ViewId) -> ViewResult<()> {
        self.inner.write().add_child(parent, child)
    }

    /// Destroy a view and its descendants.
    pub fn destroy(&self, id: ViewId) -> ViewResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if a view exists.
    pub fn contains(&self, id: ViewId) -> bool {
        self.inner.read().contains(id)
    }

    /// Get the parent of a view.
    pub fn parent(&self, id: ViewId) -> ViewResult<Option<ViewId>> {
        self.inner.read().parent(id)
    }

    /// Get a copy of the children of a view.
    pub fn children(&self, id: ViewId) -> ViewResult<Vec<ViewId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Get the frame of a view.
    pub fn frame(&self, id: ViewId) -> ViewResult<Rect> {
        self.inner.read().frame(id)
    }

    /// Set the frame of a view.
    pub fn set_frame(&self, id: ViewId, frame: Rect) -> ViewResult<()> {
        self.inner.write().set_frame(id, frame)
    }

    /// Get the opacity of a view.
    pub fn alpha(&self, id: ViewId) -> ViewResult<f32> {
        self.inner.read().alpha(id)
    }

    /// Check if a view takes part in hit testing.
    pub fn is_interaction_enabled(&self, id: ViewId) -> ViewResult<bool> {
        self.inner.read().is_interaction_enabled(id)
    }

    /// Find the deepest view under a point in `root`'s coordinates.
    pub fn hit_test(&self, root: ViewId, point: Point) -> Option<ViewId> {
        self.inner.read().hit_test(root, point)
    }

    /// Access the tree with a read lock for complex operations.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ViewTree) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the tree with a write lock for complex operations.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ViewTree) -> R,
    {
        f(&mut self.inner.write())
    }
}
