//! Terminal styles derived from the active palette.
//!
//! The palette is picked from the root marker, never from the flag, so
//! what is drawn always follows the `dark` class.
//!
//! Style roles:
//! - Header: brand, nav buttons, theme toggle
//! - Section: background per section, body text, headings, home title
//! - Form: inputs, placeholders, focus ring, submit button
//! - Help: dimmed key hints on the bottom line

use ratatui::style::{Color, Modifier, Style};

use crate::content::SectionId;
use crate::dark_mode::ThemeController;
use crate::palette::{Palette, Rgb};

/// Convert a palette color to a terminal color.
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Styles for one frame, bound to the palette in effect.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: &'static Palette,
}

impl Theme {
    pub fn from_controller(controller: &ThemeController) -> Self {
        Theme {
            palette: Palette::for_mode(controller.mode()),
        }
    }

    // ------------------------------------------------------------------
    // Header
    // ------------------------------------------------------------------

    pub fn header(&self) -> Style {
        Style::new()
            .bg(color(self.palette.header_bg))
            .fg(color(self.palette.text))
    }

    pub fn brand(&self) -> Style {
        self.header().add_modifier(Modifier::BOLD)
    }

    pub fn nav_button(&self) -> Style {
        self.header()
    }

    /// Nav button of the section currently at the top of the viewport.
    pub fn nav_button_current(&self) -> Style {
        self.header().add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    }

    pub fn toggle_button(&self) -> Style {
        Style::new()
            .bg(color(self.palette.toggle_bg))
            .fg(color(self.palette.toggle_fg))
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    pub fn section_bg(&self, id: SectionId) -> Rgb {
        self.palette.section_bg(id)
    }

    /// Body text color faded toward the section background.
    ///
    /// `opacity` 0 makes text indistinguishable from the background.
    pub fn faded(&self, fg: Rgb, id: SectionId, opacity: f32) -> Color {
        color(self.section_bg(id).mix(fg, opacity))
    }

    pub fn footer(&self) -> Style {
        Style::new()
            .bg(color(self.palette.footer_bg))
            .fg(color(self.palette.text))
    }

    // ------------------------------------------------------------------
    // Help line
    // ------------------------------------------------------------------

    pub fn help(&self) -> Style {
        Style::new()
            .bg(color(self.palette.header_bg))
            .fg(color(self.palette.placeholder))
    }

    pub fn help_key(&self) -> Style {
        self.help().fg(color(self.palette.text)).add_modifier(Modifier::BOLD)
    }
}

// ============================================================================
// TESTS
// ============================================================================
