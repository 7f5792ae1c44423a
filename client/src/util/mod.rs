//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (dialogs, element measurement,
//! the Leaflet map library) from page and component logic.

pub mod dom;
#[cfg(feature = "hydrate")]
pub mod leaflet;
