/// Color parsing and formatting for render styles
use palette::Srgba;

/// Parse a hex color string into an sRGBA color.
/// Accepts:
/// - "transparent" => (0, 0, 0, 0)
/// - #RRGGBB or RRGGBB => (r, g, b, 255)
/// - #RRGGBBAA or RRGGBBAA => (r, g, b, a)
///
/// Used as a clap value parser, hence the `String` error.
pub fn parse_color_result(color_str: &str) -> Result<Srgba<u8>, String> {
    if color_str.eq_ignore_ascii_case("transparent") {
        return Ok(Srgba::<u8>::from_components((0, 0, 0, 0)));
    }

    let trimmed = color_str.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let component = |range: std::ops::Range<usize>, name: &str| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| format!("Invalid hex digit in {name} component"))
    };

    match hex.len() {
        6 => Ok(Srgba::<u8>::from_components((
            component(0..2, "R")?,
            component(2..4, "G")?,
            component(4..6, "B")?,
            255,
        ))),
        8 => Ok(Srgba::<u8>::from_components((
            component(0..2, "R")?,
            component(2..4, "G")?,
            component(4..6, "B")?,
            component(6..8, "A")?,
        ))),
        _ => Err(format!(
            "Expected 6 or 8 hex digits (RRGGBB or RRGGBBAA), got {}",
            hex.len()
        )),
    }
}

/// Format the RGB part as `#rrggbb` for SVG attributes.
pub fn to_hex(color: Srgba<u8>) -> String {
    let (r, g, b, _) = color.into_components();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Alpha as an SVG opacity in `0..=1`.
pub fn opacity(color: Srgba<u8>) -> f64 {
    let (_, _, _, a) = color.into_components();
    f64::from(a) / 255.0
}

pub fn is_transparent(color: Srgba<u8>) -> bool {
    color.into_components().3 == 0
}
