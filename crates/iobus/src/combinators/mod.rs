//! Composition operators on [`Bus`](crate::bus::Bus)
//!
//! | Operator | Method | Name |
//! |---|---|---|
//! | sequencing | [`chain`](crate::bus::Bus::chain) | `a -> b` |
//! | alternation | [`or_else`](crate::bus::Bus::or_else) | `a \| b` |
//! | gating | [`gate`](crate::bus::Bus::gate), [`ensure`](crate::bus::Bus::ensure) | `cond(a)` |
//! | JSON bridge | [`into_value`](crate::bus::Bus::into_value) | `a` |
//!
//! Every operator builds a new bus and leaves its operands untouched.

mod alternation;
pub(crate) mod bridge;
mod chain;
mod gate;
