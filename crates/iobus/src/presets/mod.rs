//! Ready-made buses
//!
//! Primitive presets check JSON types (`string`, `number`, ...). Structural
//! presets build buses for whole shapes out of smaller buses:
//!
//! - [`Complex`]: objects with named fields, plus [`Complex::partial`]
//! - [`vector`]: arrays of one element type
//! - [`tuple`]: fixed-position arrays
//! - [`hash_map`]: `[key, value]` pair lists
//! - [`optional`]: nullable values
//! - [`literal`]: one fixed value
//!
//! The external side of every preset is [`serde_json::Value`].

mod complex;
mod date;
mod hash_map;
mod json;
mod literal;
mod optional;
mod primitives;
mod tuple;
pub(crate) mod vector;

pub use complex::{AsField, Complex, ComplexBuilder};
pub use date::date;
pub use hash_map::hash_map;
pub use json::{json, object_entries, typed};
pub use literal::{literal, literal_with};
pub use optional::optional;
pub use primitives::{any, boolean, number, positive_number, string, valid_number};
pub use tuple::tuple;
pub use vector::vector;
