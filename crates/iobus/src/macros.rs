//! Declarative shortcuts
//!
//! - [`complex!`] declares an object preset in one expression
//! - [`all_of!`] AND-chains conditions
//! - [`any_of!`] OR-chains conditions
//!
//! ```rust
//! use iobus::prelude::*;
//! use iobus::complex;
//!
//! let cat = complex!("Cat" {
//!     name: string(),
//!     age: positive_number(),
//!     "is-adopted": boolean(),
//! });
//!
//! assert_eq!(cat.fields().map(|(key, _)| key).collect::<Vec<_>>(), ["name", "age", "is-adopted"]);
//! ```

// ============================================================================
// COMPLEX MACRO
// ============================================================================

/// Declares a [`Complex`](crate::presets::Complex) object preset.
///
/// Keys are identifiers or string literals; fields keep declaration order.
/// Field buses are taken by reference, so they can be any expression.
#[macro_export]
macro_rules! complex {
    ($name:literal { $($key:tt : $bus:expr),* $(,)? }) => {
        $crate::presets::Complex::builder($name)
            $(.field($crate::__complex_key!($key), &$bus))*
            .build()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __complex_key {
    ($key:ident) => {
        stringify!($key)
    };
    ($key:literal) => {
        $key
    };
}

// ============================================================================
// CONDITION MACROS
// ============================================================================

/// Composes conditions with AND.
///
/// ```rust,ignore
/// let in_range = all_of![min(1), max(10), even()];
/// ```
#[macro_export]
macro_rules! all_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and(&$rest))+
    };
}

/// Composes conditions with OR.
///
/// ```rust,ignore
/// let small_or_even = any_of![max(3), even()];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or(&$rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
