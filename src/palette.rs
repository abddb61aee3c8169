//! Light and dark color palettes.
//!
//! Pure data shared by the terminal view and the HTML export, so both
//! renditions agree on every color. Values are the Tailwind shades the
//! page design is written in.

use crate::content::SectionId;
use crate::dark_mode::ThemeMode;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Linear blend: `t = 0` is `self`, `t = 1` is `other`.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel =
            |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgb(
            channel(self.0, other.0),
            channel(self.1, other.1),
            channel(self.2, other.2),
        )
    }
}

const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
const GRAY_50: Rgb = Rgb(0xf9, 0xfa, 0xfb);
const GRAY_100: Rgb = Rgb(0xf3, 0xf4, 0xf6);
const GRAY_400: Rgb = Rgb(0x9c, 0xa3, 0xaf);
const GRAY_500: Rgb = Rgb(0x6b, 0x72, 0x80);
const GRAY_600: Rgb = Rgb(0x4b, 0x55, 0x63);
const GRAY_700: Rgb = Rgb(0x37, 0x41, 0x51);
const GRAY_800: Rgb = Rgb(0x1f, 0x29, 0x37);
const GRAY_900: Rgb = Rgb(0x11, 0x18, 0x27);
const TEAL_50: Rgb = Rgb(0xf0, 0xfd, 0xfa);
const TEAL_100: Rgb = Rgb(0xcc, 0xfb, 0xf1);
const TEAL_200: Rgb = Rgb(0x99, 0xf6, 0xe4);
const YELLOW_50: Rgb = Rgb(0xfe, 0xfc, 0xe8);
const YELLOW_300: Rgb = Rgb(0xfd, 0xe0, 0x47);
const YELLOW_400: Rgb = Rgb(0xfa, 0xcc, 0x15);
const YELLOW_500: Rgb = Rgb(0xea, 0xb3, 0x08);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header_bg: Rgb,
    pub text: Rgb,
    pub title: Rgb,
    pub toggle_bg: Rgb,
    pub toggle_fg: Rgb,
    pub footer_bg: Rgb,
    pub input_bg: Rgb,
    pub input_fg: Rgb,
    pub placeholder: Rgb,
    pub focus_ring: Rgb,
    pub submit_bg: Rgb,
    pub submit_fg: Rgb,
    /// Section backgrounds in page order.
    pub sections: [Rgb; 6],
}

pub const LIGHT: Palette = Palette {
    header_bg: TEAL_100,
    text: GRAY_800,
    title: GRAY_700,
    toggle_bg: YELLOW_400,
    toggle_fg: BLACK,
    footer_bg: TEAL_200,
    input_bg: WHITE,
    input_fg: GRAY_800,
    placeholder: GRAY_400,
    focus_ring: YELLOW_500,
    submit_bg: YELLOW_400,
    submit_fg: WHITE,
    sections: [TEAL_100, GRAY_50, YELLOW_50, TEAL_50, TEAL_50, YELLOW_50],
};

pub const DARK: Palette = Palette {
    header_bg: GRAY_900,
    text: GRAY_100,
    title: YELLOW_300,
    toggle_bg: GRAY_700,
    toggle_fg: WHITE,
    footer_bg: GRAY_900,
    input_bg: GRAY_700,
    input_fg: GRAY_100,
    placeholder: GRAY_400,
    focus_ring: GRAY_500,
    submit_bg: GRAY_600,
    submit_fg: WHITE,
    sections: [GRAY_800, GRAY_700, GRAY_600, GRAY_700, GRAY_700, GRAY_800],
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn section_bg(&self, id: SectionId) -> Rgb {
        self.sections[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formats_lowercase() {
        assert_eq!(TEAL_100.hex(), "#ccfbf1");
        assert_eq!(BLACK.hex(), "#000000");
    }

    #[test]
    fn mix_hits_endpoints_and_midpoint() {
        assert_eq!(BLACK.mix(WHITE, 0.0), BLACK);
        assert_eq!(BLACK.mix(WHITE, 1.0), WHITE);
        assert_eq!(BLACK.mix(WHITE, 0.5), Rgb(0x80, 0x80, 0x80));
        assert_eq!(BLACK.mix(WHITE, 7.0), WHITE);
    }

    #[test]
    fn palettes_differ_per_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), &LIGHT);
        assert_eq!(Palette::for_mode(ThemeMode::Dark), &DARK);
        assert_ne!(LIGHT.section_bg(SectionId::Skills), DARK.section_bg(SectionId::Skills));
    }
}
