//! The drawer overlay.
//!
//! A [`DrawerOverlay`] is a mask view pinned over its parent. It owns a list
//! of [`DrawerItem`]s whose content views live inside the mask, and moves each
//! item between its hidden and shown anchors by swapping constraints.
//!
//! # State Machine
//!
//! Each item is either hidden or shown, and transitioning while a request is
//! in flight. A request for an item that is already transitioning is dropped
//! and its completion never runs.
//!
//! Animated transitions return immediately. The host drives them by calling
//! [`DrawerOverlay::advance`] from its frame loop; completions run from there.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use side_drawer::prelude::*;
//!
//! let views = SharedViewTree::new();
//! let window = views.create_view_with_frame("window", Rect::new(0.0, 0.0, 400.0, 800.0));
//! let menu = views.create_view("menu");
//!
//! let mut overlay = DrawerOverlay::new(views.clone(), window).unwrap();
//! let index = overlay.add_item(DrawerItem::with_defaults(menu)).unwrap();
//!
//! assert!(overlay.set_item_hidden(index, false, Duration::from_millis(300), true, None));
//! assert!(!overlay.is_item_hidden(index));
//!
//! overlay.advance(Duration::from_millis(300));
//! assert!(!overlay.is_animating());
//! assert_eq!(views.frame(menu).unwrap(), Rect::new(0.0, 0.0, 400.0, 800.0));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use side_drawer_core::logging::{span_names, targets};
use side_drawer_core::{
    Attribute, Color, Constraint, Rect, SharedViewTree, ViewError, ViewId, ViewResult, ViewTree,
};

use super::anchors::compute_constraints;
use super::item::DrawerItem;
use crate::config::OverlayConfig;
use crate::error::Result;
use crate::widget::animation::{AnimationId, AnimationRequest, Animator};
use crate::widget::gesture::{MaskTapFilter, TapRecognizer, TouchEvent, TouchFilter};
use crate::widget::layout::layout_if_needed;

/// Which view the overlay attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverMode {
    /// Cover the embedding view only.
    #[default]
    FullInSuperView,
    /// Cover the whole window, navigation bar included.
    CoverNavigationBarLevel,
}

/// Callback run once when a transition completes.
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Callback run when the mask is tapped outside every drawer.
pub type MaskTapCallback = Box<dyn FnMut(&mut DrawerOverlay)>;

struct PendingCompletion {
    items: Vec<usize>,
    on_complete: Option<CompletionCallback>,
}

/// A dimming mask hosting slide-in drawers.
pub struct DrawerOverlay {
    views: SharedViewTree,
    /// The mask view; parent of every item's content.
    view: ViewId,
    embedding: ViewId,
    parent: Option<ViewId>,
    boundary_constraints: Vec<Constraint>,
    config: OverlayConfig,
    items: Vec<DrawerItem>,
    animator: Animator,
    pending: HashMap<AnimationId, PendingCompletion>,
    mask_tap_callback: Option<MaskTapCallback>,
    /// Bumped on every `set_mask_tap_callback`.
    mask_tap_generation: u64,
    recognizer: TapRecognizer,
}

impl DrawerOverlay {
    /// Create an overlay over `embedding` with default configuration.
    pub fn new(views: SharedViewTree, embedding: ViewId) -> Result<Self> {
        Self::with_config(views, embedding, OverlayConfig::default())
    }

    /// Create an overlay over `embedding`.
    ///
    /// The overlay starts transparent and ignores touches until an item is
    /// shown.
    pub fn with_config(
        views: SharedViewTree,
        embedding: ViewId,
        config: OverlayConfig,
    ) -> Result<Self> {
        if !views.contains(embedding) {
            return Err(ViewError::InvalidViewId.into());
        }

        let view = views.with_write(|tree| -> ViewResult<ViewId> {
            let view = tree.create_view("drawer-overlay");
            tree.set_alpha(view, 0.0)?;
            tree.set_interaction_enabled(view, false)?;
            tree.set_background(view, Some(config.mask_color))?;
            Ok(view)
        })?;

        let mut overlay = Self {
            views,
            view,
            embedding,
            parent: None,
            boundary_constraints: Vec::new(),
            recognizer: TapRecognizer::with_config(config.tap_config()),
            config,
            items: Vec::new(),
            animator: Animator::new(),
            pending: HashMap::new(),
            mask_tap_callback: None,
            mask_tap_generation: 0,
        };
        overlay.attach()?;
        Ok(overlay)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The mask view.
    #[inline]
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// The view the overlay was created over.
    #[inline]
    pub fn embedding(&self) -> ViewId {
        self.embedding
    }

    /// The view the overlay is currently attached to.
    #[inline]
    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    /// Shared handle to the view tree.
    #[inline]
    pub fn views(&self) -> &SharedViewTree {
        &self.views
    }

    #[inline]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    // =========================================================================
    // Attachment
    // =========================================================================

    /// Get the cover mode.
    #[inline]
    pub fn cover_mode(&self) -> CoverMode {
        self.config.cover_mode
    }

    /// Set the cover mode, moving the overlay to the matching parent.
    pub fn set_cover_mode(&mut self, mode: CoverMode) -> Result<()> {
        if mode == self.config.cover_mode && self.parent.is_some() {
            return Ok(());
        }
        self.detach()?;
        self.config.cover_mode = mode;
        self.attach()
    }

    fn attach(&mut self) -> Result<()> {
        let view = self.view;
        let embedding = self.embedding;
        let mode = self.config.cover_mode;

        let (parent, pins) = self.views.with_write(|tree| -> ViewResult<_> {
            let parent = match mode {
                CoverMode::FullInSuperView => embedding,
                CoverMode::CoverNavigationBarLevel => tree.root(embedding)?,
            };
            tree.add_child(parent, view)?;

            let pins: Vec<Constraint> = [
                Attribute::Top,
                Attribute::Bottom,
                Attribute::Leading,
                Attribute::Trailing,
            ]
            .into_iter()
            .map(|attribute| Constraint::equal(view, attribute, parent, attribute))
            .collect();
            tree.install_constraints(parent, pins.iter().copied())?;
            layout_if_needed(tree, view)?;
            Ok((parent, pins))
        })?;

        tracing::debug!(target: targets::OVERLAY, ?view, ?parent, ?mode, "overlay attached");
        self.parent = Some(parent);
        self.boundary_constraints = pins;
        Ok(())
    }

    /// Remove the overlay from its parent.
    ///
    /// Items stay registered. Calling this on a detached overlay does nothing.
    pub fn detach(&mut self) -> Result<()> {
        let Some(parent) = self.parent.take() else {
            return Ok(());
        };
        let boundary = std::mem::take(&mut self.boundary_constraints);
        let view = self.view;

        self.views.with_write(|tree| -> ViewResult<()> {
            if tree.contains(parent) {
                tree.uninstall_constraints(parent, &boundary)?;
            }
            if tree.contains(view) {
                tree.remove_from_parent(view)?;
            }
            Ok(())
        })?;

        tracing::debug!(target: targets::OVERLAY, ?view, ?parent, "overlay detached");
        Ok(())
    }

    // =========================================================================
    // Mask
    // =========================================================================

    /// Get the mask color.
    #[inline]
    pub fn mask_color(&self) -> Color {
        self.config.mask_color
    }

    /// Set the mask color and repaint the mask.
    pub fn set_mask_color(&mut self, color: Color) {
        self.config.mask_color = color;
        let view = self.view;
        if let Err(error) = self.views.with_write(|tree| tree.set_background(view, Some(color))) {
            tracing::warn!(target: targets::OVERLAY, %error, "failed to repaint mask");
        }
    }

    /// Set the callback run when the mask is tapped. `None` removes it.
    ///
    /// The overlay never dismisses drawers on its own; hosts usually call
    /// [`hide_all`](Self::hide_all) from here.
    pub fn set_mask_tap_callback(&mut self, callback: Option<MaskTapCallback>) {
        self.mask_tap_callback = callback;
        self.mask_tap_generation = self.mask_tap_generation.wrapping_add(1);
    }

    /// Handle a recognized tap on `target`.
    ///
    /// Returns `true` if the mask claimed the tap, in which case the mask tap
    /// callback has run once.
    pub fn handle_tap(&mut self, target: ViewId) -> bool {
        let contents: Vec<ViewId> = self.items.iter().map(DrawerItem::content).collect();
        let claimed = self
            .views
            .with_read(|tree| MaskTapFilter::new(&contents).should_receive(tree, target));
        if !claimed {
            tracing::trace!(target: targets::GESTURE, ?target, "tap inside drawer content ignored");
            return false;
        }

        tracing::debug!(target: targets::GESTURE, ?target, "mask tapped");
        if let Some(mut callback) = self.mask_tap_callback.take() {
            let generation = self.mask_tap_generation;
            callback(self);
            // The callback may have replaced or removed itself.
            if self.mask_tap_generation == generation {
                self.mask_tap_callback = Some(callback);
            }
        }
        true
    }

    /// Deliver raw touches to the mask.
    ///
    /// Touches are in window coordinates. A recognized tap is hit-tested
    /// against the window; it reaches [`handle_tap`](Self::handle_tap) only
    /// if the touched view is the mask or something inside it. Returns
    /// `true` if any tap was claimed.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        let taps = self.recognizer.process_touch(event);
        let view = self.view;
        let mut claimed = false;

        for tap in taps {
            let target = self.views.with_read(|tree| {
                let root = tree.root(view).ok()?;
                tree.hit_test(root, tap.position)
                    .filter(|&hit| tree.is_descendant_of(hit, view))
            });
            match target {
                Some(target) => claimed |= self.handle_tap(target),
                None => {
                    tracing::trace!(
                        target: targets::GESTURE,
                        position = ?tap.position,
                        "tap outside the mask"
                    );
                }
            }
        }
        claimed
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Register an item, parenting its content under the mask.
    ///
    /// The item starts hidden. Returns its index, valid for the lifetime of
    /// the overlay.
    #[tracing::instrument(
        target = "side_drawer::overlay",
        skip_all,
        fields(content = ?item.content())
    )]
    pub fn add_item(&mut self, mut item: DrawerItem) -> Result<usize> {
        let view = self.view;
        let constraints = compute_constraints(&item, view, true);

        self.views.with_write(|tree| -> ViewResult<()> {
            tree.add_child(view, item.content())?;
            install(tree, &constraints.into_vec())?;
            layout_if_needed(tree, view)
        })?;

        item.is_hidden = true;
        item.transition_in_flight = false;
        item.active_constraints = constraints.into_vec();
        self.items.push(item);

        let index = self.items.len() - 1;
        tracing::debug!(target: targets::OVERLAY, index, "item registered");
        Ok(index)
    }

    /// Get a registered item.
    pub fn item(&self, index: usize) -> Option<&DrawerItem> {
        self.items.get(index)
    }

    /// Number of registered items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if an item is hidden. Unknown indices count as hidden.
    pub fn is_item_hidden(&self, index: usize) -> bool {
        self.items.get(index).is_none_or(DrawerItem::is_hidden)
    }

    /// Check if no item is shown.
    pub fn is_hidden(&self) -> bool {
        self.items.iter().all(DrawerItem::is_hidden)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Hide or show one item.
    ///
    /// Returns `false` without doing anything if `index` is unknown or the
    /// item is already transitioning; `on_complete` is dropped unrun in that
    /// case. Otherwise the item's logical state changes immediately and
    /// `on_complete` runs once the transition completes: synchronously when
    /// not animated, from a later [`advance`](Self::advance) when animated.
    pub fn set_item_hidden(
        &mut self,
        index: usize,
        hidden: bool,
        duration: Duration,
        animated: bool,
        on_complete: Option<CompletionCallback>,
    ) -> bool {
        let Some(item) = self.items.get(index) else {
            tracing::trace!(target: targets::OVERLAY, index, "ignoring unknown item index");
            return false;
        };
        if item.transition_in_flight {
            tracing::trace!(
                target: targets::OVERLAY,
                index,
                hidden,
                "item is transitioning, request dropped"
            );
            return false;
        }

        let _span = tracing::debug_span!(
            target: targets::OVERLAY,
            span_names::TRANSITION,
            index,
            hidden,
            animated
        )
        .entered();

        self.begin_transition(index, hidden);
        self.run_transition(vec![index], duration, animated, on_complete);
        true
    }

    /// Hide or show an item using the configured duration and animation.
    pub fn toggle_item(&mut self, index: usize, on_complete: Option<CompletionCallback>) -> bool {
        let hidden = !self.is_item_hidden(index);
        let duration = self.config.default_duration();
        let animated = self.config.animated;
        self.set_item_hidden(index, hidden, duration, animated, on_complete)
    }

    /// Hide every shown item with one shared transition.
    ///
    /// Items that are transitioning are skipped. `on_complete` runs once, when
    /// the shared transition completes, or right away if nothing was shown.
    /// Returns the number of items hidden.
    pub fn hide_all(
        &mut self,
        duration: Duration,
        animated: bool,
        on_complete: Option<CompletionCallback>,
    ) -> usize {
        let batch: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_hidden && !item.transition_in_flight)
            .map(|(index, _)| index)
            .collect();

        let _span = tracing::debug_span!(
            target: targets::OVERLAY,
            span_names::HIDE_ALL,
            count = batch.len(),
            animated
        )
        .entered();

        if batch.is_empty() {
            tracing::trace!(target: targets::OVERLAY, "nothing to hide");
            if let Some(on_complete) = on_complete {
                on_complete();
            }
            return 0;
        }

        for &index in &batch {
            self.begin_transition(index, true);
        }
        let count = batch.len();
        self.run_transition(batch, duration, animated, on_complete);
        count
    }

    /// Advance running animations and run completions that became due.
    pub fn advance(&mut self, dt: Duration) {
        let finished = self.views.with_write(|tree| self.animator.advance(tree, dt));
        self.complete_animations(finished);
    }

    /// Jump every running animation to its end and run its completion.
    pub fn finish_animations(&mut self) {
        let finished = self.views.with_write(|tree| self.animator.finish_all(tree));
        self.complete_animations(finished);
    }

    /// Check if any transition is waiting on [`advance`](Self::advance).
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Re-solve the mask and item frames, e.g. after the parent was resized.
    pub fn layout_if_needed(&self) -> Result<()> {
        let view = self.view;
        self.views.with_write(|tree| layout_if_needed(tree, view))?;
        Ok(())
    }

    /// Flip the item's state and swap its constraints.
    fn begin_transition(&mut self, index: usize, hidden: bool) {
        let view = self.view;
        let item = &mut self.items[index];
        item.transition_in_flight = true;
        item.is_hidden = hidden;

        let old = std::mem::take(&mut item.active_constraints);
        let new = compute_constraints(item, view, hidden).into_vec();
        let swapped = self.views.with_write(|tree| -> ViewResult<()> {
            uninstall(tree, &old)?;
            install(tree, &new)
        });
        if let Err(error) = swapped {
            tracing::warn!(
                target: targets::OVERLAY,
                index,
                %error,
                "failed to swap item constraints"
            );
        }
        item.active_constraints = new;

        tracing::debug!(target: targets::OVERLAY, index, hidden, "item transition started");
    }

    /// Move the mask and item frames to the state the items are now in.
    fn run_transition(
        &mut self,
        items: Vec<usize>,
        duration: Duration,
        animated: bool,
        on_complete: Option<CompletionCallback>,
    ) {
        let view = self.view;
        let overlay_hidden = self.is_hidden();
        let target_alpha = if overlay_hidden { 0.0 } else { 1.0 };

        if !animated {
            let animator = &mut self.animator;
            animator.cancel_alpha(view);
            let applied = self.views.with_write(|tree| -> ViewResult<()> {
                tree.set_alpha(view, target_alpha)?;
                for (child, _, _) in solve_children(tree, view)? {
                    animator.cancel_frame(child);
                }
                Ok(())
            });
            if let Err(error) = applied {
                tracing::warn!(target: targets::OVERLAY, %error, "failed to apply transition");
            }
            self.complete(items, on_complete);
            return;
        }

        if !overlay_hidden {
            self.set_interactive(true);
        }

        let easing = self.config.easing;
        let started = self.views.with_write(|tree| -> ViewResult<AnimationId> {
            let request = frame_request(tree, view, AnimationRequest::new(duration, easing))?
                .alpha(view, target_alpha);
            self.animator.start(tree, request)
        });

        match started {
            Ok(id) => {
                self.pending.insert(id, PendingCompletion { items, on_complete });
            }
            Err(error) => {
                tracing::warn!(
                    target: targets::OVERLAY,
                    %error,
                    "failed to start transition animation"
                );
                self.complete(items, on_complete);
            }
        }
    }

    fn complete_animations(&mut self, finished: Vec<AnimationId>) {
        for id in finished {
            if let Some(pending) = self.pending.remove(&id) {
                self.complete(pending.items, pending.on_complete);
            }
        }
    }

    fn complete(&mut self, items: Vec<usize>, on_complete: Option<CompletionCallback>) {
        for &index in &items {
            if let Some(item) = self.items.get_mut(index) {
                item.transition_in_flight = false;
            }
        }
        self.set_interactive(!self.is_hidden());

        tracing::debug!(target: targets::OVERLAY, ?items, "transition complete");
        if let Some(on_complete) = on_complete {
            on_complete();
        }
    }

    fn set_interactive(&self, interactive: bool) {
        let view = self.view;
        if let Err(error) = self
            .views
            .with_write(|tree| tree.set_interaction_enabled(view, interactive))
        {
            tracing::warn!(target: targets::OVERLAY, %error, "failed to update mask interactivity");
        }
    }
}

impl fmt::Debug for DrawerOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerOverlay")
            .field("view", &self.view)
            .field("parent", &self.parent)
            .field("cover_mode", &self.config.cover_mode)
            .field("items", &self.items)
            .field("pending", &self.pending.len())
            .field("has_mask_tap_callback", &self.mask_tap_callback.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for DrawerOverlay {
    fn drop(&mut self) {
        if let Err(error) = self.detach() {
            tracing::warn!(target: targets::OVERLAY, %error, "failed to detach overlay");
        }

        // Content views belong to the host; release them before the mask goes.
        let view = self.view;
        let items = &self.items;
        self.views.with_write(|tree| {
            for item in items {
                let content = item.content();
                if !tree.contains(content) {
                    continue;
                }
                let owned: Vec<Constraint> = item
                    .active_constraints
                    .iter()
                    .filter(|c| c.natural_owner() == content)
                    .copied()
                    .collect();
                let _ = tree.uninstall_constraints(content, &owned);
                if tree.parent(content).ok().flatten() == Some(view) {
                    let _ = tree.remove_from_parent(content);
                }
            }
            if tree.contains(view) {
                let _ = tree.destroy(view);
            }
        });
    }
}

/// Solve the layout below `view` and return every child whose frame moved,
/// with its frame before and after.
fn solve_children(tree: &mut ViewTree, view: ViewId) -> ViewResult<Vec<(ViewId, Rect, Rect)>> {
    let children = tree.children(view)?.to_vec();
    let before = children
        .iter()
        .map(|&child| tree.frame(child))
        .collect::<ViewResult<Vec<_>>>()?;

    layout_if_needed(tree, view)?;

    let mut moved = Vec::new();
    for (&child, from) in children.iter().zip(before) {
        let to = tree.frame(child)?;
        if to != from {
            moved.push((child, from, to));
        }
    }
    Ok(moved)
}

/// Record the frames the layout below `view` would move to as frame tracks,
/// leaving the children where they were.
fn frame_request(
    tree: &mut ViewTree,
    view: ViewId,
    mut request: AnimationRequest,
) -> ViewResult<AnimationRequest> {
    for (child, from, to) in solve_children(tree, view)? {
        tree.set_frame(child, from)?;
        request = request.frame(child, from, to);
    }
    Ok(request)
}

fn install(tree: &mut ViewTree, constraints: &[Constraint]) -> ViewResult<()> {
    for constraint in constraints {
        tree.install_constraints(constraint.natural_owner(), [*constraint])?;
    }
    Ok(())
}

fn uninstall(tree: &mut ViewTree, constraints: &[Constraint]) -> ViewResult<()> {
    for constraint in constraints {
        tree.uninstall_constraints(constraint.natural_owner(), std::slice::from_ref(constraint))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Host {
        views: SharedViewTree,
        window: ViewId,
        content: ViewId,
    }

    /// A window with a navigation bar and a content area below it.
    fn host() -> Host {
        let views = SharedViewTree::new();
        let window = views.create_view_with_frame("window", Rect::new(0.0, 0.0, 400.0, 800.0));
        let content = views.create_view_with_frame("content", Rect::new(0.0, 64.0, 400.0, 736.0));
        views.add_child(window, content).unwrap();
        Host {
            views,
            window,
            content,
        }
    }

    #[test]
    fn test_initial_state() {
        let host = host();
        let overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();

        assert_eq!(overlay.parent(), Some(host.content));
        assert_eq!(host.views.alpha(overlay.view()).unwrap(), 0.0);
        assert!(!host.views.is_interaction_enabled(overlay.view()).unwrap());
        assert_eq!(host.views.frame(overlay.view()).unwrap(), Rect::new(0.0, 0.0, 400.0, 736.0));
        assert!(overlay.is_hidden());
        assert_eq!(overlay.item_count(), 0);

        let background = host.views.with_read(|tree| tree.background(overlay.view())).unwrap();
        assert_eq!(background, Some(overlay.mask_color()));
    }

    #[test]
    fn test_invalid_embedding() {
        let host = host();
        host.views.destroy(host.content).unwrap();
        let result = DrawerOverlay::new(host.views.clone(), host.content);
        assert!(matches!(result, Err(crate::error::DrawerError::View(ViewError::InvalidViewId))));
    }

    #[test]
    fn test_cover_mode_reattaches() {
        let host = host();
        let mut overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();
        let view = overlay.view();

        overlay.set_cover_mode(CoverMode::CoverNavigationBarLevel).unwrap();
        assert_eq!(overlay.cover_mode(), CoverMode::CoverNavigationBarLevel);
        assert_eq!(overlay.parent(), Some(host.window));
        assert_eq!(host.views.parent(view).unwrap(), Some(host.window));
        assert_eq!(host.views.frame(view).unwrap(), Rect::new(0.0, 0.0, 400.0, 800.0));

        // Boundary constraints moved with the overlay.
        host.views.with_read(|tree| {
            assert!(tree.constraints(host.content).unwrap().is_empty());
            assert_eq!(tree.constraints(host.window).unwrap().len(), 4);
        });

        overlay.set_cover_mode(CoverMode::FullInSuperView).unwrap();
        assert_eq!(host.views.parent(view).unwrap(), Some(host.content));
        assert_eq!(host.views.children(host.window).unwrap(), vec![host.content]);
    }

    #[test]
    fn test_set_mask_color_repaints() {
        let host = host();
        let mut overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();

        overlay.set_mask_color(Color::RED.with_alpha(0.25));
        let background = host.views.with_read(|tree| tree.background(overlay.view())).unwrap();
        assert_eq!(background, Some(Color::RED.with_alpha(0.25)));
        assert_eq!(overlay.mask_color(), Color::RED.with_alpha(0.25));
    }

    #[test]
    fn test_add_item_installs_hidden_constraints() {
        let host = host();
        let mut overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();
        let menu = host.views.create_view("menu");

        let index = overlay.add_item(DrawerItem::with_defaults(menu)).unwrap();
        assert_eq!(index, 0);
        assert_eq!(host.views.parent(menu).unwrap(), Some(overlay.view()));
        assert_eq!(host.views.frame(menu).unwrap(), Rect::new(-400.0, 0.0, 400.0, 736.0));

        let item = overlay.item(index).unwrap();
        assert!(item.is_hidden());
        assert_eq!(
            item.active_constraints(),
            compute_constraints(item, overlay.view(), true).into_vec().as_slice()
        );
    }

    #[test]
    fn test_add_item_with_destroyed_content() {
        let host = host();
        let mut overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();
        let menu = host.views.create_view("menu");
        host.views.destroy(menu).unwrap();

        assert!(overlay.add_item(DrawerItem::with_defaults(menu)).is_err());
        assert_eq!(overlay.item_count(), 0);
    }

    #[test]
    fn test_unanimated_show_is_synchronous() {
        let host = host();
        let mut overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();
        let menu = host.views.create_view("menu");
        let index = overlay.add_item(DrawerItem::with_defaults(menu)).unwrap();

        assert!(overlay.set_item_hidden(index, false, Duration::from_millis(300), false, None));
        assert!(!overlay.is_animating());
        assert!(!overlay.item(index).unwrap().is_transitioning());
        assert_eq!(host.views.alpha(overlay.view()).unwrap(), 1.0);
        assert!(host.views.is_interaction_enabled(overlay.view()).unwrap());
        assert_eq!(host.views.frame(menu).unwrap(), Rect::new(0.0, 0.0, 400.0, 736.0));
    }

    #[test]
    fn test_hide_stays_interactive_until_complete() {
        let host = host();
        let mut overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();
        let menu = host.views.create_view("menu");
        let index = overlay.add_item(DrawerItem::with_defaults(menu)).unwrap();
        overlay.set_item_hidden(index, false, Duration::ZERO, false, None);

        overlay.set_item_hidden(index, true, Duration::from_millis(200), true, None);
        assert!(overlay.is_item_hidden(index));
        assert!(host.views.is_interaction_enabled(overlay.view()).unwrap());

        overlay.advance(Duration::from_millis(100));
        assert!(host.views.is_interaction_enabled(overlay.view()).unwrap());
        assert_eq!(host.views.frame(menu).unwrap().origin.x, -200.0);

        overlay.advance(Duration::from_millis(100));
        assert!(!host.views.is_interaction_enabled(overlay.view()).unwrap());
        assert_eq!(host.views.alpha(overlay.view()).unwrap(), 0.0);
        assert_eq!(host.views.frame(menu).unwrap().origin.x, -400.0);
    }

    #[test]
    fn test_show_is_interactive_before_animation() {
        let host = host();
        let mut overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();
        let menu = host.views.create_view("menu");
        let index = overlay.add_item(DrawerItem::with_defaults(menu)).unwrap();

        overlay.set_item_hidden(index, false, Duration::from_millis(200), true, None);
        assert!(host.views.is_interaction_enabled(overlay.view()).unwrap());
        // Nothing moves before the first frame.
        assert_eq!(host.views.alpha(overlay.view()).unwrap(), 0.0);
        assert_eq!(host.views.frame(menu).unwrap().origin.x, -400.0);
    }

    #[test]
    fn test_drop_releases_content() {
        let host = host();
        let menu = host.views.create_view("menu");
        let view = {
            let mut overlay = DrawerOverlay::new(host.views.clone(), host.content).unwrap();
            overlay.add_item(DrawerItem::with_defaults(menu)).unwrap();
            overlay.view()
        };

        assert!(!host.views.contains(view));
        assert!(host.views.contains(menu));
        assert_eq!(host.views.parent(menu).unwrap(), None);
        host.views.with_read(|tree| {
            assert!(tree.constraints(host.content).unwrap().is_empty());
            assert!(tree.constraints(menu).unwrap().is_empty());
        });
    }
}
