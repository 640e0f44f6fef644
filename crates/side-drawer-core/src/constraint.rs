//! Declarative layout constraints.
//!
//! A [`Constraint`] is a plain record of the linear relation
//!
//! ```text
//! item.attribute  <relation>  to_item.to_attribute * multiplier + constant
//! ```
//!
//! Constraints carry no behavior of their own. They are installed on an owner
//! view in the [`ViewTree`](crate::ViewTree) and resolved into frames by a
//! layout pass. Two constraints compare equal when every field matches, which
//! is also how they are found again for removal.
//!
//! # Example
//!
//! ```
//! use side_drawer_core::{Attribute, Constraint, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! let parent = tree.create_view("parent");
//! let child = tree.create_view("child");
//!
//! // child.leading = parent.leading
//! let pin = Constraint::equal(child, Attribute::Leading, parent, Attribute::Leading);
//! // child.width = parent.width * 0.75
//! let width = Constraint::equal(child, Attribute::Width, parent, Attribute::Width)
//!     .with_multiplier(0.75);
//! // child.height = 44
//! let height = Constraint::fixed(child, Attribute::Height, 44.0);
//!
//! assert!(pin.is_positional());
//! assert!(width.is_dimension());
//! assert!(height.to.is_none());
//! ```

use crate::view::ViewId;

/// Layout attribute of a view that a constraint can bind.
///
/// Leading and trailing are the left and right edges; layouts are always
/// left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Left edge.
    Leading,
    /// Right edge.
    Trailing,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Horizontal center.
    CenterX,
    /// Vertical center.
    CenterY,
    /// Width.
    Width,
    /// Height.
    Height,
}

impl Attribute {
    /// Check if this attribute lies on the horizontal axis.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(
            self,
            Attribute::Leading | Attribute::Trailing | Attribute::CenterX | Attribute::Width
        )
    }

    /// Check if this attribute is a size rather than a position.
    #[inline]
    pub fn is_dimension(&self) -> bool {
        matches!(self, Attribute::Width | Attribute::Height)
    }
}

/// Relation between the two sides of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relation {
    #[default]
    Equal,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

/// A single linear layout constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    /// The constrained view.
    pub item: ViewId,
    /// The constrained attribute of `item`.
    pub attribute: Attribute,
    /// How the two sides relate.
    pub relation: Relation,
    /// The related view and attribute, or `None` for a constant.
    pub to: Option<(ViewId, Attribute)>,
    /// Factor applied to the related attribute.
    pub multiplier: f32,
    /// Offset added after the multiplier.
    pub constant: f32,
}

impl Constraint {
    /// `item.attribute = to_item.to_attribute`.
    pub fn equal(
        item: ViewId,
        attribute: Attribute,
        to_item: ViewId,
        to_attribute: Attribute,
    ) -> Self {
        Self {
            item,
            attribute,
            relation: Relation::Equal,
            to: Some((to_item, to_attribute)),
            multiplier: 1.0,
            constant: 0.0,
        }
    }

    /// `item.attribute = constant`, related to no other view.
    pub fn fixed(item: ViewId, attribute: Attribute, constant: f32) -> Self {
        Self {
            item,
            attribute,
            relation: Relation::Equal,
            to: None,
            multiplier: 1.0,
            constant,
        }
    }

    /// Set the multiplier.
    #[inline]
    pub fn with_multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the constant.
    #[inline]
    pub fn with_constant(mut self, constant: f32) -> Self {
        self.constant = constant;
        self
    }

    /// Set the relation.
    #[inline]
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    /// The view this constraint belongs on: the constrained view itself for
    /// constants, otherwise the related view.
    ///
    /// For sibling and parent relations this is the closest view that sees
    /// both sides, which is where a layout pass looks for it.
    #[inline]
    pub fn natural_owner(&self) -> ViewId {
        match self.to {
            Some((to_item, _)) => to_item,
            None => self.item,
        }
    }

    /// Check if the constrained attribute is an edge or center.
    #[inline]
    pub fn is_positional(&self) -> bool {
        !self.attribute.is_dimension()
    }

    /// Check if the constrained attribute is a width or height.
    #[inline]
    pub fn is_dimension(&self) -> bool {
        self.attribute.is_dimension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewTree;

    #[test]
    fn test_attribute_axes() {
        assert!(Attribute::Leading.is_horizontal());
        assert!(Attribute::Width.is_horizontal());
        assert!(!Attribute::Top.is_horizontal());
        assert!(Attribute::Height.is_dimension());
        assert!(!Attribute::CenterY.is_dimension());
    }

    #[test]
    fn test_constraint_owner() {
        let mut tree = ViewTree::new();
        let parent = tree.create_view("parent");
        let child = tree.create_view("child");

        let related = Constraint::equal(child, Attribute::Top, parent, Attribute::Top);
        assert_eq!(related.natural_owner(), parent);

        let fixed = Constraint::fixed(child, Attribute::Width, 120.0);
        assert_eq!(fixed.natural_owner(), child);
    }

    #[test]
    fn test_constraint_equality() {
        let mut tree = ViewTree::new();
        let parent = tree.create_view("parent");
        let child = tree.create_view("child");

        let a = Constraint::equal(child, Attribute::Width, parent, Attribute::Width)
            .with_multiplier(0.5);
        let b = Constraint::equal(child, Attribute::Width, parent, Attribute::Width)
            .with_multiplier(0.5);
        let c = b.with_relation(Relation::LessThanOrEqual);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
