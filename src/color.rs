use std::str::FromStr;

use eframe::egui::Color32;
use palette::Srgb;

/// Fill used when a chart style leaves the colour open.
pub const DEFAULT_FILL: Color32 = Color32::from_rgb(99, 110, 250);

// ---------------------------------------------------------------------------
// Style colour → Color32
// ---------------------------------------------------------------------------

/// Parse a `#rrggbb` hex string.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex.trim()).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Resolve a chart style colour, falling back to [`DEFAULT_FILL`] when it is
/// absent or unparsable.
pub fn fill_for(color: Option<&str>) -> Color32 {
    match color {
        Some(hex) => parse_hex(hex).unwrap_or_else(|| {
            log::warn!("Ignoring invalid chart colour '{hex}'");
            DEFAULT_FILL
        }),
        None => DEFAULT_FILL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ACCENT_COLOR;

    #[test]
    fn accent_parses() {
        assert_eq!(parse_hex(ACCENT_COLOR), Some(Color32::from_rgb(0x00, 0x83, 0xB8)));
    }

    #[test]
    fn invalid_falls_back() {
        assert_eq!(parse_hex("not a colour"), None);
        assert_eq!(fill_for(Some("#zzzzzz")), DEFAULT_FILL);
        assert_eq!(fill_for(None), DEFAULT_FILL);
    }
}
