//! Accessibility roles and actions for widgets.

/// The accessibility role of a widget.
///
/// A small set of roles; each maps onto the AccessKit `Role` of the same
/// meaning when the `accessibility` feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A generic widget with no specific role.
    #[default]
    Unknown,

    /// A push button.
    Button,
}

impl AccessibleRole {
    /// A short stable name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessibleRole::Unknown => "unknown",
            AccessibleRole::Button => "button",
        }
    }

    /// Convert to AccessKit's Role enum.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> accesskit::Role {
        use accesskit::Role;

        match self {
            AccessibleRole::Unknown => Role::Unknown,
            AccessibleRole::Button => Role::Button,
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<AccessibleRole> for accesskit::Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}

/// An action assistive technology can perform on a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AccessibleAction {
    /// Activate the widget, as a tap would.
    Click,
}

impl AccessibleAction {
    /// Convert to AccessKit's Action enum.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_action(self) -> accesskit::Action {
        use accesskit::Action;

        match self {
            AccessibleAction::Click => Action::Click,
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<AccessibleAction> for accesskit::Action {
    fn from(action: AccessibleAction) -> Self {
        action.to_accesskit_action()
    }
}
