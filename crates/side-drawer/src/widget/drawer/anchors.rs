//! Anchor constraints for drawer items.
//!
//! [`compute_constraints`] maps an item's position and size to the four
//! constraints that place its content relative to the overlay. It is a pure
//! function; installing the result is the overlay's job.
//!
//! # Anchoring
//!
//! | Direction | Hidden                         | Shown                           |
//! |-----------|--------------------------------|---------------------------------|
//! | Left      | content.trailing = overlay.leading  | content.leading = overlay.leading  |
//! | Right     | content.leading = overlay.trailing  | content.trailing = overlay.trailing |
//! | Top       | content.bottom = overlay.top        | content.top = overlay.top          |
//! | Bottom    | content.top = overlay.bottom        | content.bottom = overlay.bottom    |
//! | Center    | content.center = overlay.center     | content.center = overlay.center    |
//!
//! A hidden edge anchor puts the content just outside the overlay.

use side_drawer_core::{Attribute, Constraint, ViewId};

use super::item::{DrawerItem, HorizontalDirection, SizeMode, SizeValue, VerticalDirection};

/// The constraints placing one item in one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerConstraints {
    /// Horizontal edge or center anchor.
    pub horizontal: Constraint,
    /// Vertical edge or center anchor.
    pub vertical: Constraint,
    /// Width, relative to the overlay or fixed.
    pub width: Constraint,
    /// Height, relative to the overlay or fixed.
    pub height: Constraint,
}

impl DrawerConstraints {
    /// Iterate the constraints in field order.
    pub fn iter(&self) -> impl Iterator<Item = Constraint> + '_ {
        [self.horizontal, self.vertical, self.width, self.height].into_iter()
    }

    /// Collect the constraints into a vector.
    pub fn into_vec(self) -> Vec<Constraint> {
        vec![self.horizontal, self.vertical, self.width, self.height]
    }
}

/// Compute the constraints that place `item` inside `overlay` for a state.
pub fn compute_constraints(
    item: &DrawerItem,
    overlay: ViewId,
    target_hidden: bool,
) -> DrawerConstraints {
    let content = item.content();
    let position = item.position(target_hidden);
    let size = item.size();

    let horizontal = match (position.horizontal, target_hidden) {
        (HorizontalDirection::Center, _) => {
            Constraint::equal(content, Attribute::CenterX, overlay, Attribute::CenterX)
        }
        (HorizontalDirection::Left, true) => {
            Constraint::equal(content, Attribute::Trailing, overlay, Attribute::Leading)
        }
        (HorizontalDirection::Left, false) => {
            Constraint::equal(content, Attribute::Leading, overlay, Attribute::Leading)
        }
        (HorizontalDirection::Right, true) => {
            Constraint::equal(content, Attribute::Leading, overlay, Attribute::Trailing)
        }
        (HorizontalDirection::Right, false) => {
            Constraint::equal(content, Attribute::Trailing, overlay, Attribute::Trailing)
        }
    };

    let vertical = match (position.vertical, target_hidden) {
        (VerticalDirection::Center, _) => {
            Constraint::equal(content, Attribute::CenterY, overlay, Attribute::CenterY)
        }
        (VerticalDirection::Top, true) => {
            Constraint::equal(content, Attribute::Bottom, overlay, Attribute::Top)
        }
        (VerticalDirection::Top, false) => {
            Constraint::equal(content, Attribute::Top, overlay, Attribute::Top)
        }
        (VerticalDirection::Bottom, true) => {
            Constraint::equal(content, Attribute::Top, overlay, Attribute::Bottom)
        }
        (VerticalDirection::Bottom, false) => {
            Constraint::equal(content, Attribute::Bottom, overlay, Attribute::Bottom)
        }
    };

    DrawerConstraints {
        horizontal,
        vertical,
        width: dimension(content, overlay, Attribute::Width, size.width),
        height: dimension(content, overlay, Attribute::Height, size.height),
    }
}

fn dimension(
    content: ViewId,
    overlay: ViewId,
    attribute: Attribute,
    size: SizeValue,
) -> Constraint {
    match size.mode {
        SizeMode::Scale => {
            Constraint::equal(content, attribute, overlay, attribute).with_multiplier(size.value)
        }
        SizeMode::Constant => Constraint::fixed(content, attribute, size.value),
    }
}
