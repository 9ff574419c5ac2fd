use crate::color::{ColorPair, Rgb};

// Shared tuning constants for the orb presets.

// Device class
pub const MOBILE_BREAKPOINT_PX: f64 = 900.0; // viewports narrower than this are mobile

// Surface
pub const CONTENT_HEIGHT_FACTOR: f64 = 2.0; // scrolling pages extend the canvas below the fold
pub const SCREEN_HEIGHT_FACTOR: f64 = 1.0;

// Standard orbs (content and auth pages)
pub const STANDARD_MOBILE_COUNT: usize = 6;
pub const STANDARD_DESKTOP_COUNT: usize = 10;
pub const STANDARD_MOBILE_RADIUS: (f64, f64) = (30.0, 100.0); // (min, span)
pub const STANDARD_DESKTOP_RADIUS: (f64, f64) = (50.0, 180.0);
pub const STANDARD_SPEED: f64 = 0.4; // each velocity axis is (u - 0.5) * speed
pub const STANDARD_OPACITY: (f64, f64) = (0.04, 0.12);

// Vivid orbs (login page)
pub const VIVID_MOBILE_COUNT: usize = 8;
pub const VIVID_DESKTOP_COUNT: usize = 12;
pub const VIVID_MOBILE_RADIUS: (f64, f64) = (40.0, 120.0);
pub const VIVID_DESKTOP_RADIUS: (f64, f64) = (60.0, 220.0);
pub const VIVID_SPEED: f64 = 0.35;
pub const VIVID_OPACITY: (f64, f64) = (0.05, 0.14);
pub const VIVID_PULSE_SPEED: (f64, f64) = (0.005, 0.01); // radians per ms
pub const VIVID_PULSE_AMOUNT: (f64, f64) = (0.05, 0.1); // fraction of radius
pub const VIVID_MID_STOP_OFFSET: f64 = 0.6;
pub const VIVID_MID_STOP_ALPHA_SCALE: f64 = 0.5;

// Palettes
pub const STANDARD_PALETTE: [ColorPair; 4] = [
    ColorPair::new(Rgb::hex(0xbc4037), Rgb::hex(0xf47061)), // primary red
    ColorPair::new(Rgb::hex(0x9a342d), Rgb::hex(0xbd5c55)), // dark red
    ColorPair::new(Rgb::hex(0x2c3e50), Rgb::hex(0x4a6572)), // dark blue
    ColorPair::new(Rgb::hex(0x3a47d5), Rgb::hex(0x00d2ff)), // blue
];

pub const VIVID_EXTRA_PALETTE: [ColorPair; 2] = [
    ColorPair::new(Rgb::hex(0x8e2de2), Rgb::hex(0x4a00e0)), // purple
    ColorPair::new(Rgb::hex(0xff416c), Rgb::hex(0xff4b2b)), // red-orange
];

// Theme overlay
pub const OVERLAY_LIGHT: Rgb = Rgb::new(255, 255, 255);
pub const OVERLAY_DARK: Rgb = Rgb::new(30, 28, 28);
pub const OVERLAY_ALPHA: f64 = 0.8;
pub const OVERLAY_BLUR_PX: u32 = 30;
