//! Display names for composite buses and conditions
//!
//! Composite names are built textually: `a -> b`, `a | b`, `a AND b`,
//! `a OR b`. An operand is wrapped in parentheses only when it visibly
//! contains a *different* operator outside of any bracketed group, so
//! same-operator chains stay flat (`a -> b -> c`).
//!
//! This is a pattern over the name text, not a parse. Downstream consumers
//! match on these strings, so the heuristic is kept exactly as is, including
//! its greedy bracket removal.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Everything from the first `(` to the last `)` on a line.
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*\)").expect("bracket pattern is a valid regex"));

/// Binary operators that appear in generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Sequencing, `->`.
    Chain,
    /// Alternation, `|`.
    Else,
    /// Condition conjunction, `AND`.
    And,
    /// Condition disjunction, `OR`.
    Or,
}

impl Operator {
    /// Every operator, in detection order.
    pub const ALL: [Operator; 4] = [Self::Chain, Self::Else, Self::And, Self::Or];

    /// The symbol written between operands.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Chain => "->",
            Self::Else => "|",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returns true if `name` shows one of `operators` outside bracketed text.
fn shows_any(name: &str, mut operators: impl Iterator<Item = Operator>) -> bool {
    let visible = BRACKETED.replace_all(name, "");
    operators.any(|op| visible.contains(op.symbol()))
}

fn wrap_for(name: &str, operator: Operator) -> String {
    if shows_any(name, Operator::ALL.into_iter().filter(|op| *op != operator)) {
        format!("({name})")
    } else {
        name.to_owned()
    }
}

/// Joins two names with `operator`, parenthesizing operands that show a
/// different operator.
///
/// # Examples
///
/// ```rust
/// use iobus::foundation::{Operator, merge_names};
///
/// assert_eq!(merge_names("A -> B", "C", Operator::Chain), "A -> B -> C");
/// assert_eq!(merge_names("A", "B -> C", Operator::Else), "A | (B -> C)");
/// ```
#[must_use]
pub fn merge_names(left: &str, right: &str, operator: Operator) -> String {
    format!(
        "{} {operator} {}",
        wrap_for(left, operator),
        wrap_for(right, operator)
    )
}

/// Name of a negated condition: `!name`, or `!(name)` when the name shows
/// any operator.
#[must_use]
pub fn negate_name(name: &str) -> String {
    if shows_any(name, Operator::ALL.into_iter()) {
        format!("!({name})")
    } else {
        format!("!{name}")
    }
}
