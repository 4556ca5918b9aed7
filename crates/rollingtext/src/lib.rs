//! # rollingtext
//!
//! A rolling-text widget: a text view whose characters animate through
//! per-position character orders when the displayed text changes.
//!
//! ```rust,ignore
//! use rollingtext::{RollingTextView, charset, CarryBitAnimation};
//!
//! let mut view = RollingTextView::new();
//! view.add_char_order(charset::NUMBER.chars());
//! view.set_char_strategy(CarryBitAnimation);
//! view.set_text("42");
//! ```
//!
//! The widget implements [`uinspect_core::View`], so the uinspect tooling
//! can walk it; the `uinspect-rollingtext` plugin additionally reads its
//! internal character-order state through the `#[doc(hidden)]`
//! debug-export hooks.

pub mod order;
pub mod strategy;
pub mod typeface;
pub mod view;

pub use order::{CharOrderManager, CharPool, EMPTY_CHAR, charset};
pub use strategy::{CarryBitAnimation, CharStrategy, NormalAnimation};
pub use typeface::Typeface;
pub use view::RollingTextView;
