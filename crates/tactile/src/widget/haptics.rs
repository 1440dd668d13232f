//! Haptic feedback requests.

/// Kinds of haptic pulse a widget can request from its host.
///
/// The host maps these onto whatever its platform offers and may ignore them
/// (no vibrator, user disabled haptics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HapticFeedback {
    /// A long-press was recognized.
    LongPress,
}

impl HapticFeedback {
    /// A short stable name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongPress => "long_press",
        }
    }
}

impl std::fmt::Display for HapticFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_press_name() {
        assert_eq!(HapticFeedback::LongPress.as_str(), "long_press");
        assert_eq!(HapticFeedback::LongPress.to_string(), "long_press");
    }
}
