//! # Notifications
//!
//! Transient messages the reducer asks the UI to show ("added to cart", ...).
//!
//! The reducer only *describes* a notification. Whether it is shown, and
//! whether it is shown quietly on a narrow screen, is decided by the shell
//! that owns the notification port.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Success,
    Info,
}

/// Where the toast is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl std::str::FromStr for ToastPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(ToastPosition::TopLeft),
            "top-center" => Ok(ToastPosition::TopCenter),
            "top-right" => Ok(ToastPosition::TopRight),
            "bottom-left" => Ok(ToastPosition::BottomLeft),
            "bottom-center" => Ok(ToastPosition::BottomCenter),
            "bottom-right" => Ok(ToastPosition::BottomRight),
            other => Err(format!("unknown toast position '{}'", other)),
        }
    }
}

/// A message for the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub position: ToastPosition,
    /// Deliver without visual display (small viewports).
    /// Always false when produced by the reducer.
    pub quiet: bool,
}

impl Notification {
    pub fn added(name: &str) -> Self {
        Notification::new(format!("{} added to cart", name), Severity::Success)
    }

    pub fn increased(name: &str) -> Self {
        Notification::new(format!("{} quantity increased", name), Severity::Info)
    }

    pub fn decreased(name: &str) -> Self {
        Notification::new(format!("{} quantity decreased", name), Severity::Info)
    }

    fn new(message: String, severity: Severity) -> Self {
        Notification {
            message,
            severity,
            position: ToastPosition::default(),
            quiet: false,
        }
    }

    /// Re-anchors the toast.
    pub fn at(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Marks the toast as quiet (or not).
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_severity() {
        let n = Notification::added("Vitamin C");
        assert_eq!(n.message, "Vitamin C added to cart");
        assert_eq!(n.severity, Severity::Success);
        assert!(!n.quiet);

        assert_eq!(Notification::increased("X").severity, Severity::Info);
        assert_eq!(Notification::decreased("X").message, "X quantity decreased");
    }

    #[test]
    fn test_position_round_trips_through_kebab_case() {
        let pos: ToastPosition = "top-center".parse().unwrap();
        assert_eq!(pos, ToastPosition::TopCenter);
        assert_eq!(
            serde_json::to_string(&pos).unwrap(),
            "\"top-center\""
        );
        assert!("middle".parse::<ToastPosition>().is_err());
    }

    #[test]
    fn test_builders() {
        let n = Notification::added("A").at(ToastPosition::TopLeft).quiet(true);
        assert_eq!(n.position, ToastPosition::TopLeft);
        assert!(n.quiet);
    }
}
