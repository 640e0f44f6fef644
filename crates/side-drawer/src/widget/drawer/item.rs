//! Drawer items: one slide-in panel and where it rests.

use side_drawer_core::{Constraint, ViewId};

use crate::error::{DrawerError, PositionRole, Result};

/// Horizontal anchor of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalDirection {
    /// Centered horizontally.
    Center,
    /// Against the left edge.
    #[default]
    Left,
    /// Against the right edge.
    Right,
}

/// Vertical anchor of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalDirection {
    /// Centered vertically.
    #[default]
    Center,
    /// Against the top edge.
    Top,
    /// Against the bottom edge.
    Bottom,
}

/// Where a drawer rests, as an anchor on each axis.
///
/// A valid position anchors to at least one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Horizontal anchor.
    pub horizontal: HorizontalDirection,
    /// Vertical anchor.
    pub vertical: VerticalDirection,
}

impl Position {
    /// Create a position.
    pub const fn new(horizontal: HorizontalDirection, vertical: VerticalDirection) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Left edge, vertically centered.
    pub const LEFT: Self = Self::new(HorizontalDirection::Left, VerticalDirection::Center);
    /// Right edge, vertically centered.
    pub const RIGHT: Self = Self::new(HorizontalDirection::Right, VerticalDirection::Center);
    /// Top edge, horizontally centered.
    pub const TOP: Self = Self::new(HorizontalDirection::Center, VerticalDirection::Top);
    /// Bottom edge, horizontally centered.
    pub const BOTTOM: Self = Self::new(HorizontalDirection::Center, VerticalDirection::Bottom);

    /// Check that the position is not centered on both axes.
    pub fn is_valid(&self) -> bool {
        !(self.horizontal == HorizontalDirection::Center
            && self.vertical == VerticalDirection::Center)
    }
}

/// How a size value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeMode {
    /// A fraction of the overlay's dimension.
    #[default]
    Scale,
    /// An absolute length.
    Constant,
}

/// Size along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeValue {
    /// Fraction or length, depending on `mode`.
    pub value: f32,
    /// Interpretation of `value`.
    pub mode: SizeMode,
}

impl SizeValue {
    /// A fraction of the overlay's dimension.
    pub const fn scale(value: f32) -> Self {
        Self {
            value,
            mode: SizeMode::Scale,
        }
    }

    /// An absolute length.
    pub const fn constant(value: f32) -> Self {
        Self {
            value,
            mode: SizeMode::Constant,
        }
    }
}

impl Default for SizeValue {
    fn default() -> Self {
        Self::scale(1.0)
    }
}

/// Width and height of a drawer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawerSize {
    pub width: SizeValue,
    pub height: SizeValue,
}

impl DrawerSize {
    /// Create a size from two axis values.
    pub const fn new(width: SizeValue, height: SizeValue) -> Self {
        Self { width, height }
    }
}

/// One slide-in panel.
///
/// Items compare equal when they embed the same content view.
#[derive(Debug, Clone)]
pub struct DrawerItem {
    content: ViewId,
    hidden_position: Position,
    shown_position: Position,
    size: DrawerSize,
    pub(crate) is_hidden: bool,
    pub(crate) transition_in_flight: bool,
    pub(crate) active_constraints: Vec<Constraint>,
}

impl DrawerItem {
    /// Create an item.
    ///
    /// Fails with [`DrawerError::InvalidPosition`] if either position is
    /// centered on both axes.
    pub fn new(
        content: ViewId,
        hidden_position: Position,
        shown_position: Position,
        size: DrawerSize,
    ) -> Result<Self> {
        if !hidden_position.is_valid() {
            return Err(DrawerError::InvalidPosition {
                role: PositionRole::Hidden,
                position: hidden_position,
            });
        }
        if !shown_position.is_valid() {
            return Err(DrawerError::InvalidPosition {
                role: PositionRole::Shown,
                position: shown_position,
            });
        }

        Ok(Self {
            content,
            hidden_position,
            shown_position,
            size,
            is_hidden: true,
            transition_in_flight: false,
            active_constraints: Vec::new(),
        })
    }

    /// A full-size item that slides in from the left.
    pub fn with_defaults(content: ViewId) -> Self {
        Self {
            content,
            hidden_position: Position::LEFT,
            shown_position: Position::LEFT,
            size: DrawerSize::default(),
            is_hidden: true,
            transition_in_flight: false,
            active_constraints: Vec::new(),
        }
    }

    /// Start building an item.
    pub fn builder(content: ViewId) -> DrawerItemBuilder {
        DrawerItemBuilder::new(content)
    }

    /// The embedded content view.
    #[inline]
    pub fn content(&self) -> ViewId {
        self.content
    }

    /// Where the item rests while hidden.
    #[inline]
    pub fn hidden_position(&self) -> Position {
        self.hidden_position
    }

    /// Where the item rests while shown.
    #[inline]
    pub fn shown_position(&self) -> Position {
        self.shown_position
    }

    #[inline]
    pub fn size(&self) -> DrawerSize {
        self.size
    }

    /// Logical state. Flips as soon as a transition is requested.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Check if a transition has been started and not completed.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition_in_flight
    }

    /// Constraints installed for the item's current state.
    pub fn active_constraints(&self) -> &[Constraint] {
        &self.active_constraints
    }

    /// Position for a state.
    pub fn position(&self, hidden: bool) -> Position {
        if hidden {
            self.hidden_position
        } else {
            self.shown_position
        }
    }
}

impl PartialEq for DrawerItem {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for DrawerItem {}

/// Builder for [`DrawerItem`].
///
/// # Example
///
/// ```
/// use side_drawer::widget::drawer::{DrawerItem, DrawerSize, Position, SizeValue};
/// use side_drawer_core::ViewTree;
///
/// let mut tree = ViewTree::new();
/// let menu = tree.create_view("menu");
///
/// let item = DrawerItem::builder(menu)
///     .hidden_position(Position::RIGHT)
///     .shown_position(Position::RIGHT)
///     .size(DrawerSize::new(SizeValue::scale(0.9), SizeValue::scale(1.0)))
///     .build()
///     .unwrap();
/// assert!(item.is_hidden());
/// ```
#[derive(Debug, Clone)]
pub struct DrawerItemBuilder {
    content: ViewId,
    hidden_position: Position,
    shown_position: Position,
    size: DrawerSize,
}

impl DrawerItemBuilder {
    fn new(content: ViewId) -> Self {
        Self {
            content,
            hidden_position: Position::LEFT,
            shown_position: Position::LEFT,
            size: DrawerSize::default(),
        }
    }

    /// Set the hidden position.
    pub fn hidden_position(mut self, position: Position) -> Self {
        self.hidden_position = position;
        self
    }

    /// Set the shown position.
    pub fn shown_position(mut self, position: Position) -> Self {
        self.shown_position = position;
        self
    }

    /// Set both positions.
    pub fn position(self, position: Position) -> Self {
        self.hidden_position(position).shown_position(position)
    }

    /// Set the size.
    pub fn size(mut self, size: DrawerSize) -> Self {
        self.size = size;
        self
    }

    /// Validate and build the item.
    pub fn build(self) -> Result<DrawerItem> {
        DrawerItem::new(self.content, self.hidden_position, self.shown_position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use side_drawer_core::ViewTree;

    const HORIZONTALS: [HorizontalDirection; 3] = [
        HorizontalDirection::Center,
        HorizontalDirection::Left,
        HorizontalDirection::Right,
    ];
    const VERTICALS: [VerticalDirection; 3] = [
        VerticalDirection::Center,
        VerticalDirection::Top,
        VerticalDirection::Bottom,
    ];

    fn all_positions() -> impl Iterator<Item = Position> {
        HORIZONTALS
            .into_iter()
            .flat_map(|h| VERTICALS.into_iter().map(move |v| Position::new(h, v)))
    }

    #[test]
    fn test_construction_validation() {
        let mut tree = ViewTree::new();
        let content = tree.create_view("content");

        for hidden in all_positions() {
            for shown in all_positions() {
                let result = DrawerItem::new(content, hidden, shown, DrawerSize::default());
                let expect_ok = hidden.is_valid() && shown.is_valid();
                assert_eq!(result.is_ok(), expect_ok, "{hidden:?} / {shown:?}");
            }
        }
    }

    #[test]
    fn test_invalid_position_reports_role() {
        let mut tree = ViewTree::new();
        let content = tree.create_view("content");
        let centered = Position::new(HorizontalDirection::Center, VerticalDirection::Center);

        let err =
            DrawerItem::new(content, Position::LEFT, centered, DrawerSize::default()).unwrap_err();
        assert!(matches!(
            err,
            DrawerError::InvalidPosition {
                role: PositionRole::Shown,
                ..
            }
        ));
        assert!(err.to_string().starts_with("shown position"));

        let err = DrawerItem::builder(content).hidden_position(centered).build().unwrap_err();
        assert!(matches!(
            err,
            DrawerError::InvalidPosition {
                role: PositionRole::Hidden,
                ..
            }
        ));
    }

    #[test]
    fn test_defaults() {
        let mut tree = ViewTree::new();
        let content = tree.create_view("content");
        let item = DrawerItem::with_defaults(content);

        assert_eq!(item.hidden_position(), Position::LEFT);
        assert_eq!(item.shown_position(), Position::LEFT);
        assert_eq!(item.size().width, SizeValue::scale(1.0));
        assert_eq!(item.size().height.mode, SizeMode::Scale);
        assert!(item.is_hidden());
        assert!(!item.is_transitioning());
        assert!(item.active_constraints().is_empty());
        assert_eq!(Position::default(), Position::LEFT);
    }

    #[test]
    fn test_equality_by_content() {
        let mut tree = ViewTree::new();
        let a = tree.create_view("a");
        let b = tree.create_view("b");

        let left = DrawerItem::with_defaults(a);
        let right = DrawerItem::builder(a).position(Position::RIGHT).build().unwrap();
        assert_eq!(left, right);
        assert_ne!(left, DrawerItem::with_defaults(b));
    }
}
