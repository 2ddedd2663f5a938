//! Prelude module for convenient imports.
//!
//! `use iobus::prelude::*;` brings in the bus and condition types, the
//! error model and every preset.
//!
//! # Examples
//!
//! ```rust
//! use iobus::prelude::*;
//! use serde_json::json;
//!
//! let tags = vector(&string());
//! assert!(tags.decode(&json!(["a", "b"])).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Outcomes, error trees, names
// ============================================================================

pub use crate::foundation::{
    BusValue, ErrorNode, ErrorTree, Operator, Outcome, accept, capture, merge_names, negate_name,
    reject,
};

// ============================================================================
// CORE: Buses and conditions
// ============================================================================

pub use crate::bus::Bus;
pub use crate::condition::Condition;

// ============================================================================
// PRESETS
// ============================================================================

pub use crate::presets::{
    AsField, Complex, ComplexBuilder, any, boolean, date, hash_map, json, literal, literal_with,
    number, object_entries, optional, positive_number, string, tuple, typed, valid_number, vector,
};

// ============================================================================
// HUMANIZER
// ============================================================================

pub use crate::humanize::{Glyphs, Humanizer, humanize};
