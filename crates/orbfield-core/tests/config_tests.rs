// Host-side tests for colors, presets and the theme overlay.

use orbfield_core::constants::*;
use orbfield_core::*;

#[test]
fn hex_parsing_accepts_both_cases_and_optional_hash() {
    assert_eq!(Rgb::parse_hex("#bc4037").unwrap(), Rgb::new(188, 64, 55));
    assert_eq!(Rgb::parse_hex("#2C3E50").unwrap(), Rgb::new(44, 62, 80));
    assert_eq!("00d2ff".parse::<Rgb>().unwrap(), Rgb::new(0, 210, 255));
    assert_eq!(Rgb::hex(0x3a47d5), Rgb::parse_hex("#3a47d5").unwrap());
}

#[test]
fn hex_parsing_rejects_malformed_input() {
    for bad in ["", "#", "#12345", "#1234567", "#gg0000", "#ééé", "rgb(1,2,3)"] {
        assert!(
            matches!(Rgb::parse_hex(bad), Err(FieldError::InvalidHex(_))),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn rgba_renders_explicit_alpha() {
    assert_eq!(
        Rgb::hex(0xbc4037).with_alpha(0.08).to_css(),
        "rgba(188, 64, 55, 0.08)"
    );
    assert_eq!(Rgb::hex(0xf47061).with_alpha(0.0).to_css(), "rgba(244, 112, 97, 0)");
    assert_eq!(Rgb::new(1, 2, 3).with_alpha(4.0).a, 1.0);
}

#[test]
fn palette_parses_pair_list() {
    let palette = Palette::parse("#bc4037/#f47061, #9a342d/#bd5c55,").unwrap();
    assert_eq!(palette.len(), 2);
    assert_eq!(palette.get(0), Some(STANDARD_PALETTE[0]));
    assert_eq!(palette.get(1), Some(STANDARD_PALETTE[1]));
    assert_eq!(palette.get(2), None);

    assert_eq!(Palette::parse(" , "), Err(FieldError::EmptyPalette));
    assert!(matches!(
        Palette::parse("#bc4037"),
        Err(FieldError::InvalidHex(_))
    ));
    assert!(matches!(
        Palette::parse("#bc4037/#nothex"),
        Err(FieldError::InvalidHex(_))
    ));
}

#[test]
fn builtin_palettes_have_expected_sizes() {
    assert_eq!(Palette::standard().len(), 4);
    let vivid = Palette::vivid();
    assert_eq!(vivid.len(), 6);
    assert_eq!(&vivid.pairs()[..4], &STANDARD_PALETTE[..]);
}

#[test]
fn presets_validate() {
    for preset in [FieldPreset::Content, FieldPreset::Auth, FieldPreset::Login] {
        assert_eq!(preset.config().validate(), Ok(()), "{:?}", preset);
    }
}

#[test]
fn presets_match_page_variants() {
    let content = FieldConfig::content_page();
    assert_eq!((content.mobile.count, content.desktop.count), (6, 10));
    assert_eq!(content.height_factor, 2.0);
    assert!(content.pulse.is_none() && content.mid_stop.is_none());

    let auth = FieldConfig::auth_page();
    assert_eq!(auth.height_factor, 1.0);
    assert_eq!(auth.palette, content.palette);

    let login = FieldConfig::login_page();
    assert_eq!((login.mobile.count, login.desktop.count), (8, 12));
    assert_eq!(login.palette.len(), 6);
    assert!(login.pulse.is_some() && login.mid_stop.is_some());
}

#[test]
fn preset_names_parse_with_content_fallback() {
    assert_eq!("login".parse::<FieldPreset>(), Ok(FieldPreset::Login));
    assert_eq!(" Auth ".parse::<FieldPreset>(), Ok(FieldPreset::Auth));
    assert_eq!(FieldPreset::from_name_or_default("content"), FieldPreset::Content);
    assert_eq!(FieldPreset::from_name_or_default("home"), FieldPreset::Content);
}

#[test]
fn invalid_bands_are_rejected() {
    let mut config = FieldConfig::content_page();
    config.opacity = Band::new(0.5, 0.6);
    assert_eq!(config.validate(), Err(FieldError::InvalidBand("opacity")));

    let mut config = FieldConfig::content_page();
    config.mobile.radius = Band::new(0.0, 10.0);
    assert_eq!(config.validate(), Err(FieldError::InvalidBand("mobile radius")));

    let mut config = FieldConfig::content_page();
    config.height_factor = 0.0;
    assert_eq!(config.validate(), Err(FieldError::InvalidBand("surface")));
}

#[test]
fn device_class_breakpoint_is_exclusive() {
    let config = FieldConfig::default();
    assert_eq!(config.device_class(899.9), DeviceClass::Mobile);
    assert_eq!(config.device_class(MOBILE_BREAKPOINT_PX), DeviceClass::Desktop);
    assert_eq!(config.device_class(1920.0), DeviceClass::Desktop);
    assert_eq!(config.profile(DeviceClass::Mobile).count, STANDARD_MOBILE_COUNT);
}

#[test]
fn theme_overlay_follows_light_and_dark() {
    assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
    assert_eq!(
        ThemeMode::Dark.overlay_color().to_css(),
        "rgba(30, 28, 28, 0.8)"
    );
    let light = ThemeMode::Light.overlay_style();
    assert!(light.contains("background-color:rgba(255, 255, 255, 0.8)"));
    assert!(light.contains("backdrop-filter:blur(30px)"));
}
