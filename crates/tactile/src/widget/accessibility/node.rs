//! The Accessible trait for widget accessibility support.

#[cfg(feature = "accessibility")]
use accesskit::Node;
#[cfg(feature = "accessibility")]
use tactile_render::Rect;

use super::role::{AccessibleAction, AccessibleRole};

/// Trait for widgets that provide accessibility information.
///
/// Custom-drawn widgets have no platform view to describe them, so they
/// report their semantics here. Screen readers see the role, name and
/// actions regardless of how the widget paints itself.
///
/// # Example
///
/// ```
/// use tactile::widget::accessibility::{Accessible, AccessibleAction, AccessibleRole};
///
/// struct Knob;
///
/// impl Accessible for Knob {
///     fn accessible_role(&self) -> AccessibleRole {
///         AccessibleRole::Button
///     }
///
///     fn accessible_name(&self) -> Option<String> {
///         Some("Volume".to_string())
///     }
///
///     fn accessible_actions(&self) -> Vec<AccessibleAction> {
///         vec![AccessibleAction::Click]
///     }
/// }
///
/// assert_eq!(Knob.accessible_name().as_deref(), Some("Volume"));
/// ```
pub trait Accessible {
    /// Get the accessibility role of this widget.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Unknown
    }

    /// Get the accessible name of this widget.
    ///
    /// This is the primary label that screen readers announce.
    /// For buttons, this is typically the button text.
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// Get the accessible description of this widget.
    ///
    /// This provides additional context beyond the name.
    fn accessible_description(&self) -> Option<String> {
        None
    }

    /// Get the actions supported by this widget.
    fn accessible_actions(&self) -> Vec<AccessibleAction> {
        Vec::new()
    }

    /// Build an AccessKit Node from this widget's accessibility info.
    ///
    /// Widgets typically don't need to override this.
    #[cfg(feature = "accessibility")]
    fn build_accessible_node(&self, bounds: Rect) -> Node {
        let mut node = Node::new(self.accessible_role().to_accesskit_role());

        node.set_bounds(accesskit::Rect {
            x0: bounds.left() as f64,
            y0: bounds.top() as f64,
            x1: bounds.right() as f64,
            y1: bounds.bottom() as f64,
        });

        if let Some(name) = self.accessible_name() {
            node.set_label(name);
        }

        if let Some(desc) = self.accessible_description() {
            node.set_description(desc);
        }

        for action in self.accessible_actions() {
            node.add_action(action.to_accesskit_action());
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestAccessibleWidget {
        name: String,
    }

    impl Accessible for TestAccessibleWidget {
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::Button
        }

        fn accessible_name(&self) -> Option<String> {
            Some(self.name.clone())
        }

        fn accessible_actions(&self) -> Vec<AccessibleAction> {
            vec![AccessibleAction::Click]
        }
    }

    #[test]
    fn test_accessible_trait_defaults() {
        struct MinimalWidget;
        impl Accessible for MinimalWidget {}

        let widget = MinimalWidget;
        assert_eq!(widget.accessible_role(), AccessibleRole::Unknown);
        assert!(widget.accessible_name().is_none());
        assert!(widget.accessible_description().is_none());
        assert!(widget.accessible_actions().is_empty());
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_build_accessible_node() {
        let widget = TestAccessibleWidget {
            name: "Submit".to_string(),
        };

        let node = widget.build_accessible_node(Rect::new(10.0, 20.0, 100.0, 30.0));

        assert_eq!(node.role(), accesskit::Role::Button);
        assert_eq!(node.label(), Some("Submit"));
        assert!(node.supports_action(accesskit::Action::Click));
        assert!(!node.supports_action(accesskit::Action::Focus));
    }

    #[test]
    fn test_accessible_implementation() {
        let widget = TestAccessibleWidget {
            name: "Submit".to_string(),
        };
        assert_eq!(widget.accessible_name().as_deref(), Some("Submit"));
        assert_eq!(widget.accessible_actions(), vec![AccessibleAction::Click]);
    }
}
