use orbfield_core::ThemeMode;
use web_sys as web;

/// Tint the contrast overlay above the orb canvas for the current theme.
#[inline]
pub fn apply_theme(document: &web::Document, element_id: &str, mode: ThemeMode) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => el.set_attribute("style", &mode.overlay_style()).is_ok(),
        None => {
            log::debug!("[overlay] missing #{}", element_id);
            false
        }
    }
}
