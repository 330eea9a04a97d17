//! Light/dark theme state.

use crate::nickname::Glyph;

/// Available color modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns the class set on the rendering root.
    pub fn css_value(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the other mode.
    pub fn flipped(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label on the toggle button, naming the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark mode",
            ThemeMode::Dark => "Light mode",
        }
    }

    /// Glyph on the toggle button.
    pub fn toggle_glyph(&self) -> Glyph {
        match self {
            ThemeMode::Light => Glyph::Moon,
            ThemeMode::Dark => Glyph::Sun,
        }
    }
}

/// Something that can be marked with the active theme.
pub trait ThemeTarget {
    fn mark(&self, mode: ThemeMode);
}

/// State cell for the theme flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode and returns the new value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        tracing::debug!(mode = self.mode.css_value(), "Theme toggled");
        self.mode
    }

    /// Marks `target` with the current mode.
    ///
    /// Called on activation and after every toggle.
    pub fn apply_to(&self, target: &dyn ThemeTarget) {
        target.mark(self.mode);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingRoot {
        marks: RefCell<Vec<ThemeMode>>,
    }

    impl ThemeTarget for RecordingRoot {
        fn mark(&self, mode: ThemeMode) {
            self.marks.borrow_mut().push(mode);
        }
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeController::default().mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_parity() {
        for k in 0..10 {
            let mut theme = ThemeController::default();
            for _ in 0..k {
                theme.toggle();
            }
            let expected = if k % 2 == 0 {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            assert_eq!(theme.mode(), expected, "after {k} toggles");
        }
    }

    #[test]
    fn test_apply_marks_root() {
        let root = RecordingRoot::default();
        let mut theme = ThemeController::default();
        theme.apply_to(&root);
        theme.toggle();
        theme.apply_to(&root);
        assert_eq!(*root.marks.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_toggle_label_names_other_mode() {
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light mode");
        assert_eq!(ThemeMode::Dark.toggle_glyph(), Glyph::Sun);
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark mode");
        assert_eq!(ThemeMode::Light.toggle_glyph(), Glyph::Moon);
    }
}
