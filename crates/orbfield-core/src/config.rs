//! Field configuration and the per-page presets.
//!
//! A [`FieldConfig`] carries every tunable the engine reads, so one engine
//! type serves every page that mounts a background.

use crate::color::Palette;
use crate::constants::*;
use crate::error::FieldError;
use rand::Rng;
use std::str::FromStr;

/// Coarse viewport bucket controlling particle count and size band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Widths strictly below `breakpoint` are mobile.
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Uniform range `[min, min + span)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub min: f64,
    pub span: f64,
}

impl Band {
    pub const fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }

    const fn from_pair(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }

    pub fn max(&self) -> f64 {
        self.min + self.span
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max()
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + rng.gen::<f64>() * self.span
    }
}

/// Per-device-class particle count and radius band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassProfile {
    pub count: usize,
    pub radius: Band,
}

/// Optional breathing of the drawn radius. The stored radius never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseConfig {
    pub speed: Band,
    pub amount: Band,
}

/// Optional extra gradient stop between the inner and outer stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MidStop {
    pub offset: f64,
    pub alpha_scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub mobile: ClassProfile,
    pub desktop: ClassProfile,
    pub breakpoint_px: f64,
    /// Canvas height as a multiple of the viewport height.
    pub height_factor: f64,
    /// Each velocity component is `(u - 0.5) * speed`.
    pub speed: f64,
    pub opacity: Band,
    pub palette: Palette,
    pub pulse: Option<PulseConfig>,
    pub mid_stop: Option<MidStop>,
}

impl FieldConfig {
    /// Scrolling content pages: standard orbs over twice the viewport height.
    pub fn content_page() -> Self {
        Self {
            mobile: ClassProfile {
                count: STANDARD_MOBILE_COUNT,
                radius: Band::from_pair(STANDARD_MOBILE_RADIUS),
            },
            desktop: ClassProfile {
                count: STANDARD_DESKTOP_COUNT,
                radius: Band::from_pair(STANDARD_DESKTOP_RADIUS),
            },
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            height_factor: CONTENT_HEIGHT_FACTOR,
            speed: STANDARD_SPEED,
            opacity: Band::from_pair(STANDARD_OPACITY),
            palette: Palette::standard(),
            pulse: None,
            mid_stop: None,
        }
    }

    /// Single-screen auth pages: standard orbs, canvas matches the viewport.
    pub fn auth_page() -> Self {
        Self {
            height_factor: SCREEN_HEIGHT_FACTOR,
            ..Self::content_page()
        }
    }

    /// Login page: more, larger, pulsing orbs with a wider palette.
    pub fn login_page() -> Self {
        Self {
            mobile: ClassProfile {
                count: VIVID_MOBILE_COUNT,
                radius: Band::from_pair(VIVID_MOBILE_RADIUS),
            },
            desktop: ClassProfile {
                count: VIVID_DESKTOP_COUNT,
                radius: Band::from_pair(VIVID_DESKTOP_RADIUS),
            },
            breakpoint_px: MOBILE_BREAKPOINT_PX,
            height_factor: SCREEN_HEIGHT_FACTOR,
            speed: VIVID_SPEED,
            opacity: Band::from_pair(VIVID_OPACITY),
            palette: Palette::vivid(),
            pulse: Some(PulseConfig {
                speed: Band::from_pair(VIVID_PULSE_SPEED),
                amount: Band::from_pair(VIVID_PULSE_AMOUNT),
            }),
            mid_stop: Some(MidStop {
                offset: VIVID_MID_STOP_OFFSET,
                alpha_scale: VIVID_MID_STOP_ALPHA_SCALE,
            }),
        }
    }

    pub fn profile(&self, class: DeviceClass) -> &ClassProfile {
        match class {
            DeviceClass::Mobile => &self.mobile,
            DeviceClass::Desktop => &self.desktop,
        }
    }

    pub fn device_class(&self, viewport_width: f64) -> DeviceClass {
        DeviceClass::for_width(viewport_width, self.breakpoint_px)
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Reject values that would break the particle invariants.
    pub fn validate(&self) -> Result<(), FieldError> {
        for (name, profile) in [("mobile radius", &self.mobile), ("desktop radius", &self.desktop)] {
            if !(profile.radius.min > 0.0 && profile.radius.span >= 0.0) {
                return Err(FieldError::InvalidBand(name));
            }
        }
        if !(self.opacity.min > 0.0 && self.opacity.span >= 0.0 && self.opacity.max() < 1.0) {
            return Err(FieldError::InvalidBand("opacity"));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(FieldError::InvalidBand("speed"));
        }
        if !(self.height_factor > 0.0 && self.breakpoint_px >= 0.0) {
            return Err(FieldError::InvalidBand("surface"));
        }
        if self.palette.is_empty() {
            return Err(FieldError::EmptyPalette);
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::content_page()
    }
}

/// Named presets a hosting page can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FieldPreset {
    #[default]
    Content,
    Auth,
    Login,
}

impl FieldPreset {
    pub fn config(self) -> FieldConfig {
        match self {
            FieldPreset::Content => FieldConfig::content_page(),
            FieldPreset::Auth => FieldConfig::auth_page(),
            FieldPreset::Login => FieldConfig::login_page(),
        }
    }

    /// Unknown names fall back to [`FieldPreset::Content`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("[orbfield] unknown preset {:?}, using content", name);
            FieldPreset::Content
        })
    }
}

impl FromStr for FieldPreset {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content" => Ok(FieldPreset::Content),
            "auth" => Ok(FieldPreset::Auth),
            "login" => Ok(FieldPreset::Login),
            _ => Err(()),
        }
    }
}
