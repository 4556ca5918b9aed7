//! Property parser for [`RollingTextView`].

use std::sync::Arc;

use uinspect_core::util::{color_to_string, quote, short_type_name, sp_str};
use uinspect_core::{PropertiesParser, PropertySheet, View};

use rollingtext::{CharPool, EMPTY_CHAR, RollingTextView, charset};

use crate::accessor::CharOrderAccessor;

/// Parses one rolling-text widget into its ordered property sheet.
///
/// After the baseline, entries appear in a fixed order: `text`, `textSize`,
/// `textColor`, `isBold`/`isItalic` (only when set), `letterSpacingExtra`
/// (only when non-zero), `strategy`, `char order` (only when internal
/// introspection succeeds), `duration`.
pub struct RollingTextParser<'a> {
    view: &'a RollingTextView,
    accessor: Arc<CharOrderAccessor>,
}

impl<'a> RollingTextParser<'a> {
    /// Creates a parser borrowing `view` for one extraction call.
    pub fn new(view: &'a RollingTextView, accessor: Arc<CharOrderAccessor>) -> Self {
        Self { view, accessor }
    }
}

impl PropertiesParser for RollingTextParser<'_> {
    fn view(&self) -> &dyn View {
        self.view
    }

    fn parse(&self, sheet: &mut PropertySheet) {
        self.parse_base(sheet);

        sheet.push("text", quote(self.view.text()));
        sheet.push("textSize", sp_str(self.view.text_size()));
        sheet.push("textColor", color_to_string(self.view.text_color()));

        let typeface = self.view.typeface();
        if typeface.is_bold() {
            sheet.push("isBold", "true");
        }
        if typeface.is_italic() {
            sheet.push("isItalic", "true");
        }

        // Zero is the uninteresting default; only explicit spacing shows up.
        let spacing = self.view.letter_spacing_extra();
        if spacing != 0 {
            sheet.push("letterSpacingExtra", spacing);
        }

        sheet.push(
            "strategy",
            short_type_name(self.view.char_strategy().type_name()),
        );

        if let Some(pools) = self.accessor.char_order(self.view) {
            sheet.push("char order", display_char_order(&pools));
        }

        sheet.push("duration", self.view.animation_duration().as_millis() as i64);
    }
}

/// Renders the ordered pool list for display.
///
/// Each pool is concatenated without the placeholder glyph; concatenations
/// matching a well-known charset collapse to a bracketed label. Pools are
/// joined with `", "`. The empty list renders as `"[]"`.
fn display_char_order(pools: &[CharPool]) -> String {
    if pools.is_empty() {
        return "[]".to_owned();
    }
    pools
        .iter()
        .map(pool_label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn pool_label(pool: &CharPool) -> String {
    let glyphs: String = pool.iter().filter(|&c| c != EMPTY_CHAR).collect();
    match glyphs.as_str() {
        charset::NUMBER => "[Number]".to_owned(),
        charset::HEX => "[Hex]".to_owned(),
        charset::BINARY => "[Binary]".to_owned(),
        charset::ALPHABET => "[Alphabet]".to_owned(),
        charset::UPPER_ALPHABET => "[UpperAlphabet]".to_owned(),
        _ => glyphs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollingtext::{CarryBitAnimation, Typeface};
    use std::time::Duration;

    fn parse(view: &RollingTextView) -> PropertySheet {
        let mut sheet = PropertySheet::new();
        RollingTextParser::new(view, Arc::new(CharOrderAccessor::new())).parse(&mut sheet);
        sheet
    }

    #[test]
    fn specific_keys_follow_baseline_in_fixed_order() {
        let mut view = RollingTextView::new();
        view.set_text("42");
        view.add_char_order(charset::NUMBER.chars());
        let sheet = parse(&view);

        let keys: Vec<_> = sheet.keys().collect();
        assert_eq!(
            keys,
            [
                "width",
                "height",
                "visibility",
                "alpha",
                "text",
                "textSize",
                "textColor",
                "strategy",
                "char order",
                "duration",
            ]
        );
    }

    #[test]
    fn text_size_color_and_duration_formats() {
        let mut view = RollingTextView::new();
        view.set_text("42");
        view.set_text_size(12.5);
        view.set_text_color(0xFFFF_0000);
        view.set_animation_duration(Duration::from_millis(1200));
        let sheet = parse(&view);

        assert_eq!(sheet.get("text").unwrap().to_string(), "\"42\"");
        assert_eq!(sheet.get("textSize").unwrap().to_string(), "12.5sp");
        assert_eq!(sheet.get("textColor").unwrap().to_string(), "#FFFF0000");
        assert_eq!(sheet.get("duration").unwrap().to_string(), "1200");
    }

    #[test]
    fn bold_italic_present_only_when_set() {
        let mut view = RollingTextView::new();
        view.set_typeface(Typeface::BOLD_ITALIC);
        let sheet = parse(&view);
        assert_eq!(sheet.get("isBold").unwrap().to_string(), "true");
        assert_eq!(sheet.get("isItalic").unwrap().to_string(), "true");

        view.set_typeface(Typeface::DEFAULT);
        let sheet = parse(&view);
        assert!(!sheet.contains("isBold"));
        assert!(!sheet.contains("isItalic"));
    }

    #[test]
    fn zero_letter_spacing_is_suppressed() {
        let mut view = RollingTextView::new();
        let sheet = parse(&view);
        assert!(!sheet.contains("letterSpacingExtra"));

        view.set_letter_spacing_extra(4);
        let sheet = parse(&view);
        assert_eq!(sheet.get("letterSpacingExtra").unwrap().to_string(), "4");
    }

    #[test]
    fn strategy_is_the_short_type_name() {
        let mut view = RollingTextView::new();
        let sheet = parse(&view);
        assert_eq!(sheet.get("strategy").unwrap().to_string(), "NormalAnimation");

        view.set_char_strategy(CarryBitAnimation);
        let sheet = parse(&view);
        assert_eq!(
            sheet.get("strategy").unwrap().to_string(),
            "CarryBitAnimation"
        );
    }

    #[test]
    fn empty_order_list_renders_brackets() {
        let view = RollingTextView::new();
        let sheet = parse(&view);
        assert_eq!(sheet.get("char order").unwrap().to_string(), "[]");
    }

    #[test]
    fn canonical_sets_collapse_to_labels() {
        let mut view = RollingTextView::new();
        view.add_char_order(charset::NUMBER.chars());
        view.add_char_order(charset::HEX.chars());
        view.add_char_order(charset::BINARY.chars());
        view.add_char_order(charset::ALPHABET.chars());
        view.add_char_order(charset::UPPER_ALPHABET.chars());
        let sheet = parse(&view);
        assert_eq!(
            sheet.get("char order").unwrap().to_string(),
            "[Number], [Hex], [Binary], [Alphabet], [UpperAlphabet]"
        );
    }

    #[test]
    fn custom_pool_keeps_literal_concatenation() {
        let mut view = RollingTextView::new();
        view.add_char_order("xyz".chars());
        let sheet = parse(&view);
        // Placeholder filtered, insertion order preserved.
        assert_eq!(sheet.get("char order").unwrap().to_string(), "xyz");
    }

    #[test]
    fn latched_accessor_omits_the_key() {
        let mut view = RollingTextView::new();
        view.add_char_order(charset::NUMBER.chars());

        let accessor = Arc::new(CharOrderAccessor::new());
        struct NoSource;
        impl crate::accessor::OrderSource for NoSource {
            fn order_manager(&self) -> Option<&dyn std::any::Any> {
                None
            }
        }
        accessor.char_order(&NoSource);

        let mut sheet = PropertySheet::new();
        RollingTextParser::new(&view, accessor).parse(&mut sheet);
        assert!(!sheet.contains("char order"));
        // Everything after the omitted key is still there.
        assert_eq!(sheet.get("duration").unwrap().to_string(), "750");
    }

    #[test]
    fn repeated_extraction_is_byte_identical() {
        let mut view = RollingTextView::new();
        view.set_text("1024");
        view.set_typeface(Typeface::BOLD);
        view.add_char_order(charset::NUMBER.chars());

        let accessor = Arc::new(CharOrderAccessor::new());
        let render = || {
            let mut sheet = PropertySheet::new();
            RollingTextParser::new(&view, Arc::clone(&accessor)).parse(&mut sheet);
            sheet.to_string()
        };
        assert_eq!(render(), render());
    }
}
