//! Light/dark theme controller.
//!
//! Owns the single piece of mutable page state: `is_dark_mode`. The flag
//! and the `dark` class on the root element are flipped together, so
//! the visible scheme and the flag never disagree. Nothing is persisted;
//! every page load starts in light mode.

use std::collections::BTreeSet;

/// Root-level marker class selecting the dark palette.
pub const DARK_CLASS: &str = "dark";

/// The document root, reduced to what the page touches: its class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    classes: BTreeSet<&'static str>,
}

impl RootElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// `classList.toggle` semantics: returns whether the class is now present.
    pub fn toggle_class(&mut self, class: &'static str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class);
            true
        }
    }

    /// Space-separated class attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.iter().copied().collect::<Vec<_>>().join(" ")
    }
}

/// Which palette is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeController {
    is_dark_mode: bool,
    root: RootElement,
}

impl ThemeController {
    /// Light mode, no marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the root marker and the flag in lockstep.
    pub fn toggle_dark_mode(&mut self) {
        let marked = self.root.toggle_class(DARK_CLASS);
        self.is_dark_mode = !self.is_dark_mode;
        debug_assert_eq!(marked, self.is_dark_mode);
        log::debug!(
            "theme toggled: dark={} root class={:?}",
            self.is_dark_mode,
            self.root.class_attr()
        );
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn root(&self) -> &RootElement {
        &self.root
    }

    /// Palette selection is read from the marker, as a stylesheet would.
    pub fn mode(&self) -> ThemeMode {
        if self.root.has_class(DARK_CLASS) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Label of the toggle button: names the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light_without_marker() {
        let theme = ThemeController::new();
        assert!(!theme.is_dark_mode());
        assert!(!theme.root().has_class(DARK_CLASS));
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.toggle_label(), "Dark Mode");
    }

    #[test]
    fn one_toggle_marks_root_dark() {
        let mut theme = ThemeController::new();
        theme.toggle_dark_mode();
        assert!(theme.is_dark_mode());
        assert!(theme.root().has_class(DARK_CLASS));
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.toggle_label(), "Light Mode");
        assert_eq!(theme.root().class_attr(), "dark");
    }

    #[test]
    fn toggle_pairs_cancel_out() {
        let mut theme = ThemeController::new();
        for n in 1..=9 {
            theme.toggle_dark_mode();
            let odd = n % 2 == 1;
            assert_eq!(theme.is_dark_mode(), odd);
            assert_eq!(theme.root().has_class(DARK_CLASS), odd);
        }
        theme.toggle_dark_mode();
        assert_eq!(theme, ThemeController::new());
    }

    #[test]
    fn toggle_class_reports_presence() {
        let mut root = RootElement::default();
        assert!(root.toggle_class("dark"));
        assert!(!root.toggle_class("dark"));
        assert_eq!(root.class_attr(), "");
    }
}
