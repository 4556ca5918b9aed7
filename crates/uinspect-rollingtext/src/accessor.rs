//! Latched access to the widget's internal character-order state.
//!
//! The character-order list is not public API. It is read through the
//! widget's string-keyed debug-export hook and downcast to the layout this
//! plugin was built against — a deliberately fragile, version-coupled
//! contract. When any step of that read fails, the accessor latches: it
//! answers `None` for the rest of its lifetime without probing again.
//! Internal layouts do not change while a process runs, so one failure
//! means every later attempt would fail the same way.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use rollingtext::{CharOrderManager, CharPool, RollingTextView};

/// Internal field names this plugin was built against.
const FIELD_ORDER_MANAGER: &str = "char_order_manager";
const FIELD_ORDER_LIST: &str = "char_order_list";

/// Provides the raw order-manager payload for one widget instance.
///
/// The seam between the accessor and the widget: production code goes
/// through the widget's debug hook, tests substitute sources with missing
/// or wrong-typed payloads to drive the failure path.
pub trait OrderSource {
    /// The widget's internal order manager as an opaque payload, if the
    /// hook still exports it.
    fn order_manager(&self) -> Option<&dyn Any>;
}

impl OrderSource for RollingTextView {
    fn order_manager(&self) -> Option<&dyn Any> {
        self.debug_field(FIELD_ORDER_MANAGER)
    }
}

/// Reads the ordered character-pool list, latching on first failure.
///
/// One accessor is created per service load and shared by every parser the
/// plugin creates, so in a running host the latch is effectively
/// process-wide. Tests construct fresh accessors to get fresh failure
/// state.
#[derive(Debug, Default)]
pub struct CharOrderAccessor {
    failed: AtomicBool,
}

impl CharOrderAccessor {
    /// Creates an accessor with the latch clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a read has failed.
    pub fn has_failed(&self) -> bool {
        // Relaxed is enough: the latch only ever goes false -> true and
        // guards no other data.
        self.failed.load(Ordering::Relaxed)
    }

    /// The widget's ordered character-pool list, or `None`.
    ///
    /// `None` means either the latch is set or this call set it. Nothing
    /// propagates out of this method; a failed read surfaces only as a
    /// missing property upstream.
    pub fn char_order(&self, src: &dyn OrderSource) -> Option<Vec<CharPool>> {
        if self.has_failed() {
            return None;
        }
        match Self::read(src) {
            Some(list) => Some(list),
            None => {
                self.failed.store(true, Ordering::Relaxed);
                debug!("Internal char-order layout unavailable, disabling further probes");
                None
            }
        }
    }

    fn read(src: &dyn OrderSource) -> Option<Vec<CharPool>> {
        let manager = src.order_manager()?.downcast_ref::<CharOrderManager>()?;
        let list = manager
            .debug_field(FIELD_ORDER_LIST)?
            .downcast_ref::<Vec<CharPool>>()?;
        Some(list.clone())
    }
}
