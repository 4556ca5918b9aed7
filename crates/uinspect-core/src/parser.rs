//! Property parsers.
//!
//! A parser turns one view into one [`PropertySheet`]. The provided
//! [`parse_base`](PropertiesParser::parse_base) emits the baseline entries
//! shared by every view kind; type-scoped parsers override
//! [`parse`](PropertiesParser::parse), call `parse_base` first, then append
//! their own entries. Baseline population always precedes the specific
//! section, so a failure in an optional specific entry can never lose the
//! baseline keys.

use crate::properties::PropertySheet;
use crate::view::View;

/// Produces the ordered property sheet for one view instance.
///
/// Parsers are created per inspection request by a
/// [`ViewPropertiesPlugin`](crate::plugins::ViewPropertiesPlugin), borrow
/// the view for the duration of the call, and hold no state beyond it.
pub trait PropertiesParser {
    /// The view this parser was created for.
    fn view(&self) -> &dyn View;

    /// Emits the baseline properties common to all views.
    ///
    /// Key order: `id` (when assigned), `width`, `height`, `visibility`,
    /// `alpha`.
    fn parse_base(&self, sheet: &mut PropertySheet) {
        let view = self.view();
        if let Some(id) = view.id() {
            sheet.push("id", id);
        }
        let (width, height) = view.frame();
        sheet.push("width", width);
        sheet.push("height", height);
        sheet.push("visibility", view.visibility().to_string());
        sheet.push("alpha", view.alpha());
    }

    /// Emits all properties for the view.
    ///
    /// The default emits the baseline only. Overrides must call
    /// [`parse_base`](Self::parse_base) before appending specific entries.
    fn parse(&self, sheet: &mut PropertySheet) {
        self.parse_base(sheet);
    }
}

/// Fallback parser used when no registered plugin claims a view.
///
/// Emits the baseline properties and nothing else.
pub struct GenericViewParser<'a> {
    view: &'a dyn View,
}

impl<'a> GenericViewParser<'a> {
    /// Creates a fallback parser for `view`.
    pub fn new(view: &'a dyn View) -> Self {
        Self { view }
    }
}

impl PropertiesParser for GenericViewParser<'_> {
    fn view(&self) -> &dyn View {
        self.view
    }
}
