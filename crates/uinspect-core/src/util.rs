//! Shared display-formatting helpers.
//!
//! Pure, total functions with no dependency on extraction state. Parsers
//! delegate all generic formatting (colors, dimensions, quoting) here so
//! every plugin renders values the same way.

/// Formats an ARGB color as its canonical `#AARRGGBB` string.
pub fn color_to_string(argb: u32) -> String {
    format!("#{argb:08X}")
}

/// Formats a scale-independent-pixel size, e.g. `14.0sp`.
pub fn sp_str(sp: f32) -> String {
    format!("{sp:.1}sp")
}

/// Wraps text in double quotes for display.
pub fn quote(text: &str) -> String {
    format!("\"{text}\"")
}

/// Returns the short name of a type path: the last `::` segment, with any
/// generic arguments stripped.
///
/// ```
/// use uinspect_core::util::short_type_name;
///
/// assert_eq!(short_type_name("rollingtext::strategy::NormalAnimation"), "NormalAnimation");
/// assert_eq!(short_type_name("alloc::vec::Vec<char>"), "Vec");
/// ```
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
