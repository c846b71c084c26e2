//! ANSI styling for [`PrintTracer`](crate::PrintTracer) lines.
//!
//! Roles rather than hues, so trace formatting reads as intent:
//! - `name`: descriptor names and branch markers (blue)
//! - `hit`: the event word of a successful match (green)
//! - `muted`: positions, misses, skipped input (dim)

/// Escape sequences per trace role; all empty when disabled.
///
/// Sticks to the 16-color ANSI set so output reads on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub name: &'static str,
    pub hit: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        hit: "\x1b[32m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        hit: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
