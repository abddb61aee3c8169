//! Sticky header geometry.
//!
//! The same regions drive drawing (view) and mouse hit-testing (update),
//! so a click always lands on what is drawn.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::content::SectionId;

/// Rows taken by the header: brand + toggle, nav buttons, bottom rule.
pub const HEADER_HEIGHT: u16 = 3;

const BRAND_ROW: u16 = 0;
const NAV_ROW: u16 = 1;
const NAV_GAP: u16 = 1;

/// Something clickable in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    Nav(SectionId),
    ThemeToggle,
}

/// Text drawn for a nav button.
pub fn nav_text(id: SectionId) -> String {
    format!(" {} ", id.nav_label())
}

/// Text drawn for the theme toggle.
pub fn toggle_text(label: &str) -> String {
    format!(" {} ", label)
}

/// Clickable regions for a header of the given width.
///
/// Buttons that do not fit entirely are left out.
pub fn regions(width: u16, toggle_label: &str) -> Vec<(HeaderHit, Rect)> {
    let mut out = Vec::with_capacity(SectionId::ALL.len() + 1);

    let toggle_width = toggle_text(toggle_label).width() as u16;
    if toggle_width < width {
        let x = width - toggle_width - 1;
        out.push((HeaderHit::ThemeToggle, Rect::new(x, BRAND_ROW, toggle_width, 1)));
    }

    let widths: Vec<u16> = SectionId::ALL
        .iter()
        .map(|id| nav_text(*id).width() as u16)
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + NAV_GAP * (widths.len() as u16 - 1);
    let mut x = width.saturating_sub(total) / 2;

    for (id, w) in SectionId::ALL.into_iter().zip(widths) {
        if x + w > width {
            break;
        }
        out.push((HeaderHit::Nav(id), Rect::new(x, NAV_ROW, w, 1)));
        x += w + NAV_GAP;
    }

    out
}

/// What, if anything, sits at `(column, row)` of the header.
pub fn hit_test(width: u16, toggle_label: &str, column: u16, row: u16) -> Option<HeaderHit> {
    regions(width, toggle_label)
        .into_iter()
        .find(|(_, rect)| {
            row >= rect.y
                && row < rect.y + rect.height
                && column >= rect.x
                && column < rect.x + rect.width
        })
        .map(|(hit, _)| hit)
}
