//! Overlay tint drawn by the host above the orb canvas.
//!
//! The engine itself never reads the theme; this only describes the
//! semi-transparent layer a page puts between the orbs and its content.

use crate::color::Rgba;
use crate::constants::{OVERLAY_ALPHA, OVERLAY_BLUR_PX, OVERLAY_DARK, OVERLAY_LIGHT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn overlay_color(self) -> Rgba {
        match self {
            ThemeMode::Light => OVERLAY_LIGHT.with_alpha(OVERLAY_ALPHA),
            ThemeMode::Dark => OVERLAY_DARK.with_alpha(OVERLAY_ALPHA),
        }
    }

    /// Inline style for an overlay element covering its positioned parent.
    pub fn overlay_style(self) -> String {
        format!(
            "position:absolute;top:0;left:0;width:100%;height:100%;background-color:{};backdrop-filter:blur({}px)",
            self.overlay_color(),
            OVERLAY_BLUR_PX
        )
    }
}
