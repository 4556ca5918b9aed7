//! Inspect Demo
//!
//! Builds a rolling-text widget, loads the rolling-text inspector plugin,
//! and prints the extracted property sheet twice to show that extraction is
//! deterministic.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=uinspect=trace cargo run --package inspect-demo
//! ```

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rollingtext::{CarryBitAnimation, RollingTextView, Typeface, charset};
use uinspect::Inspector;
use uinspect::prelude::RollingTextInspectService;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let inspector = Inspector::new();
    inspector.load(&RollingTextInspectService, serde_json::Value::Null);

    let mut view = RollingTextView::new();
    view.set_id("price_label");
    view.set_frame(240, 48);
    view.set_text("1024");
    view.set_text_size(18.0);
    view.set_text_color(0xFF20_C020);
    view.set_typeface(Typeface::BOLD);
    view.set_letter_spacing_extra(2);
    view.set_char_strategy(CarryBitAnimation);
    view.set_animation_duration(Duration::from_millis(1200));
    view.add_char_order(charset::NUMBER.chars());
    view.add_char_order("$€¥".chars());

    info!("inspecting {:?}", view.text());
    let sheet = inspector.inspect(&view);
    print!("{sheet}");

    // Unchanged state extracts to identical output.
    let again = inspector.inspect(&view);
    assert_eq!(sheet.to_string(), again.to_string());
}
