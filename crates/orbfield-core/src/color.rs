//! Palette colors and their CSS rendering.
//!
//! Orbs are specified as hex triples and drawn with explicit `rgba(...)`
//! stops so each gradient carries its own alpha instead of leaning on a
//! shared global-alpha state.

use crate::constants::{STANDARD_PALETTE, VIVID_EXTRA_PALETTE};
use crate::error::FieldError;
use rand::Rng;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` (case-insensitive, leading `#` optional).
    pub fn parse_hex(text: &str) -> Result<Self, FieldError> {
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(FieldError::InvalidHex(text.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| FieldError::InvalidHex(text.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            rgb: self,
            a: a.clamp(0.0, 1.0),
        }
    }
}

impl FromStr for Rgb {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// Color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f64,
}

impl Rgba {
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.a
        )
    }
}

/// Inner/outer color of one orb. The outer color is always drawn fully
/// transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub inner: Rgb,
    pub outer: Rgb,
}

impl ColorPair {
    pub const fn new(inner: Rgb, outer: Rgb) -> Self {
        Self { inner, outer }
    }
}

/// Fixed set of color pairs an orb draws its colors from.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pairs: SmallVec<[ColorPair; 6]>,
}

impl Palette {
    pub fn new(pairs: &[ColorPair]) -> Result<Self, FieldError> {
        if pairs.is_empty() {
            return Err(FieldError::EmptyPalette);
        }
        Ok(Self {
            pairs: SmallVec::from_slice(pairs),
        })
    }

    /// The four pairs used across the content and auth pages.
    pub fn standard() -> Self {
        Self {
            pairs: SmallVec::from_slice(&STANDARD_PALETTE),
        }
    }

    /// Standard pairs plus purple and red-orange.
    pub fn vivid() -> Self {
        let mut pairs = SmallVec::from_slice(&STANDARD_PALETTE);
        pairs.extend_from_slice(&VIVID_EXTRA_PALETTE);
        Self { pairs }
    }

    /// Parse `"#inner/#outer, #inner/#outer, ..."`.
    pub fn parse(text: &str) -> Result<Self, FieldError> {
        let mut pairs = SmallVec::<[ColorPair; 6]>::new();
        for entry in text.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (inner, outer) = entry
                .split_once('/')
                .ok_or_else(|| FieldError::InvalidHex(entry.to_string()))?;
            pairs.push(ColorPair::new(inner.parse()?, outer.parse()?));
        }
        Self::new(&pairs)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ColorPair> {
        self.pairs.get(index).copied()
    }

    /// Uniformly pick one pair. Palettes are never empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorPair {
        self.pairs[rng.gen_range(0..self.pairs.len())]
    }

    pub fn pairs(&self) -> &[ColorPair] {
        &self.pairs
    }
}
