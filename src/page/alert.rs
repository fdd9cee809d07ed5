//! Alert Banner
//!
//! The single message banner shared by every cart row.

use leptos::prelude::*;

/// One shared banner: last writer wins, no queue.
pub trait AlertBanner {
    /// Replace the text and show the banner
    fn set(&self, message: &str);
    /// Hide the banner; the text stays until the next `set`
    fn clear(&self);
}

#[derive(Clone, Copy)]
pub struct AlertSignals {
    message: RwSignal<String>,
    visible: RwSignal<bool>,
}

impl AlertSignals {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
        }
    }

    pub fn message(&self) -> String {
        self.message.get()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl Default for AlertSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertBanner for AlertSignals {
    fn set(&self, message: &str) {
        self.message.set(message.to_string());
        self.visible.set(true);
    }

    fn clear(&self) {
        self.visible.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_and_clear_keeps_text() {
        let alert = AlertSignals::new();
        assert!(!alert.visible.get_untracked());

        alert.set("first");
        alert.set("second");
        assert!(alert.visible.get_untracked());
        assert_eq!(alert.message.get_untracked(), "second");

        alert.clear();
        assert!(!alert.visible.get_untracked());
        assert_eq!(alert.message.get_untracked(), "second");
    }
}
