//! The rolling-text widget.

use std::any::Any;
use std::time::Duration;

use uinspect_core::{View, Visibility};

use crate::order::CharOrderManager;
use crate::strategy::{CharStrategy, NormalAnimation};
use crate::typeface::Typeface;

/// A text widget whose characters roll through per-position character
/// orders when the text changes.
///
/// The widget owns its presentation state; inspection tooling reads it
/// through the public accessors plus the [`debug_field`] hook for state
/// that is deliberately not public API.
///
/// [`debug_field`]: RollingTextView::debug_field
pub struct RollingTextView {
    id: Option<String>,
    frame: (u32, u32),
    visibility: Visibility,
    alpha: f32,

    text: String,
    text_size: f32,
    text_color: u32,
    typeface: Typeface,
    letter_spacing_extra: i32,
    char_strategy: Box<dyn CharStrategy>,
    char_order_manager: CharOrderManager,
    animation_duration: Duration,
}

impl Default for RollingTextView {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingTextView {
    /// Creates a widget with no text, no character orders, and the
    /// [`NormalAnimation`] strategy.
    pub fn new() -> Self {
        Self {
            id: None,
            frame: (0, 0),
            visibility: Visibility::Visible,
            alpha: 1.0,
            text: String::new(),
            text_size: 14.0,
            text_color: 0xFF00_0000,
            typeface: Typeface::DEFAULT,
            letter_spacing_extra: 0,
            char_strategy: Box::new(NormalAnimation),
            char_order_manager: CharOrderManager::new(),
            animation_duration: Duration::from_millis(750),
        }
    }

    /// Sets the developer-assigned identifier.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Sets the layout size in pixels.
    pub fn set_frame(&mut self, width: u32, height: u32) {
        self.frame = (width, height);
    }

    /// Sets the visibility state.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Sets the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the text size in scale-independent pixels.
    pub fn set_text_size(&mut self, sp: f32) {
        self.text_size = sp;
    }

    /// Text size in scale-independent pixels.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Sets the text color as ARGB.
    pub fn set_text_color(&mut self, argb: u32) {
        self.text_color = argb;
    }

    /// Text color as ARGB.
    pub fn text_color(&self) -> u32 {
        self.text_color
    }

    /// Sets the typeface style.
    pub fn set_typeface(&mut self, typeface: Typeface) {
        self.typeface = typeface;
    }

    /// Current typeface style.
    pub fn typeface(&self) -> Typeface {
        self.typeface
    }

    /// Sets extra letter spacing in pixels.
    pub fn set_letter_spacing_extra(&mut self, px: i32) {
        self.letter_spacing_extra = px;
    }

    /// Extra letter spacing in pixels. Zero means the default spacing.
    pub fn letter_spacing_extra(&self) -> i32 {
        self.letter_spacing_extra
    }

    /// Replaces the character-transition strategy.
    pub fn set_char_strategy(&mut self, strategy: impl CharStrategy + 'static) {
        self.char_strategy = Box::new(strategy);
    }

    /// The active character-transition strategy.
    pub fn char_strategy(&self) -> &dyn CharStrategy {
        self.char_strategy.as_ref()
    }

    /// Registers a character order for rolling positions.
    ///
    /// Orders are consulted in registration order when an animation looks
    /// up the pool for a glyph.
    pub fn add_char_order(&mut self, order: impl IntoIterator<Item = char>) {
        self.char_order_manager.add_char_order(order);
    }

    /// Number of registered character orders.
    pub fn char_order_count(&self) -> usize {
        self.char_order_manager.len()
    }

    /// Sets the duration of one text transition.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    /// Duration of one text transition.
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Glyph path one position would roll through for `from → to`.
    ///
    /// Falls back to the direct two-step path when no registered order
    /// contains `from`.
    pub fn transition_path(&self, from: char, to: char) -> Vec<char> {
        match self.char_order_manager.find_pool_for(from) {
            Some(pool) => self.char_strategy.find_path(from, to, pool),
            None => vec![from, to],
        }
    }

    /// Debug-export hook for inspection tooling.
    ///
    /// Field names are a version-coupled contract with the inspector; they
    /// are not public API and may change between releases.
    #[doc(hidden)]
    pub fn debug_field(&self, name: &str) -> Option<&dyn Any> {
        match name {
            "char_order_manager" => Some(&self.char_order_manager),
            _ => None,
        }
    }
}

impl View for RollingTextView {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn frame(&self) -> (u32, u32) {
        self.frame
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::charset;
    use crate::strategy::CarryBitAnimation;

    #[test]
    fn transition_uses_registered_order() {
        let mut view = RollingTextView::new();
        view.add_char_order(charset::NUMBER.chars());
        view.set_char_strategy(CarryBitAnimation);
        assert_eq!(view.transition_path('9', '0'), vec!['9', '0']);
        assert_eq!(view.transition_path('8', '0'), vec!['8', '9', '0']);
    }

    #[test]
    fn transition_without_order_is_direct() {
        let view = RollingTextView::new();
        assert_eq!(view.transition_path('a', 'b'), vec!['a', 'b']);
    }

    #[test]
    fn debug_hook_exposes_the_manager() {
        let mut view = RollingTextView::new();
        view.add_char_order(charset::BINARY.chars());
        let any = view.debug_field("char_order_manager").unwrap();
        let mgr = any.downcast_ref::<CharOrderManager>().unwrap();
        assert_eq!(mgr.len(), 1);
        assert!(view.debug_field("text").is_none());
    }

    #[test]
    fn view_contract_reports_widget_state() {
        let mut view = RollingTextView::new();
        view.set_id("price");
        view.set_frame(200, 40);
        let v: &dyn View = &view;
        assert_eq!(v.id(), Some("price"));
        assert_eq!(v.frame(), (200, 40));
        assert!(v.as_any().downcast_ref::<RollingTextView>().is_some());
    }
}
