//! # iobus
//!
//! Bidirectional, composable validation and transformation for untrusted
//! data.
//!
//! A [`Bus`](bus::Bus) converts an external value into a trusted internal
//! one (`decode`) and back (`encode`). Buses compose with three operators,
//! and the composition runs the same way in both directions:
//!
//! - [`chain`](bus::Bus::chain): `a -> b`, sequencing
//! - [`or_else`](bus::Bus::or_else): `a | b`, left-biased fallback
//! - [`gate`](bus::Bus::gate): `cond(a)`, a [`Condition`](condition::Condition)
//!   on the decoded value
//!
//! Every rejection is an [`ErrorTree`](foundation::ErrorTree) that names the
//! failing rule and the rejected value at each level, and renders for people
//! with [`humanize`](humanize::humanize).
//!
//! ## Quick Start
//!
//! ```rust
//! use iobus::prelude::*;
//! use serde_json::json;
//!
//! let cat = Complex::builder("Cat")
//!     .field("name", &string())
//!     .field("age", &positive_number())
//!     .build();
//!
//! let error = cat.decode(&json!({ "name": "Tom", "age": -1 })).unwrap_err();
//! assert_eq!(
//!     humanize(&error),
//!     "Cat
//!   └─ age
//!       └─ isPositive(isValidNumber(isNumber(any)))
//!           └─ isPositive rejected `-1`"
//! );
//! ```
//!
//! ## Presets
//!
//! - **Primitive**: [`any`](presets::any), [`string`](presets::string),
//!   [`number`](presets::number), [`boolean`](presets::boolean),
//!   [`valid_number`](presets::valid_number), [`positive_number`](presets::positive_number),
//!   [`date`](presets::date), [`json`](presets::json), [`typed`](presets::typed)
//! - **Structural**: [`Complex`](presets::Complex), [`vector`](presets::vector),
//!   [`tuple`](presets::tuple), [`hash_map`](presets::hash_map),
//!   [`optional`](presets::optional), [`literal`](presets::literal)

pub mod bus;
pub mod combinators;
pub mod condition;
pub mod foundation;
pub mod humanize;
mod macros;
pub mod prelude;
pub mod presets;
