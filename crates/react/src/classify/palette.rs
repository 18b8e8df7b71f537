//! Named colour lookup for background fills.

use tailframe_core::Color;

/// Hex values with a named utility colour.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("#ffffff", "white"),
    ("#000000", "black"),
    ("#f3f4f6", "gray-100"),
    ("#e5e7eb", "gray-200"),
    ("#d1d5db", "gray-300"),
    ("#9ca3af", "gray-400"),
    ("#6b7280", "gray-500"),
    ("#3b82f6", "blue-500"),
    ("#10b981", "green-500"),
    ("#ef4444", "red-500"),
];

/// Returns the palette name for an exact hex match.
pub fn named_color(hex: &str) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == hex)
        .map(|(_, name)| *name)
}

/// Colour part of a `bg-` token: a palette name or an arbitrary `[#hex]` value.
pub fn color_value(color: &Color) -> String {
    let hex = color.to_hex();
    match named_color(&hex) {
        Some(name) => name.to_string(),
        None => format!("[{hex}]"),
    }
}
