//! Rendering error trees for people
//!
//! [`humanize`] turns an [`ErrorTree`] into an indented tree:
//!
//! ```text
//! Litter
//!   ├─ birthplace
//!   │   └─ isString(any)
//!   │       └─ isString rejected `false`
//!   └─ kittens
//!       └─ Vector(Cat)
//!           └─ [2]
//!               └─ ...
//! ```
//!
//! Leaves read ``<condition> rejected `<value>` ``, with string values shown
//! raw (control characters escaped) and everything else as compact JSON. A
//! message is printed below the node that carries it, one line per message
//! line, before any child nodes.
//!
//! The look is configured with [`Humanizer`], which can be loaded from any
//! serde source:
//!
//! ```rust
//! use iobus::humanize::{Glyphs, Humanizer};
//!
//! let humanizer: Humanizer = serde_json::from_str(r#"{ "glyphs": "ascii" }"#).unwrap();
//! assert_eq!(humanizer.glyphs, Glyphs::Ascii);
//! assert_eq!(humanizer.max_value_width, None);
//! ```

use crate::foundation::{ErrorNode, ErrorTree};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Box-drawing set used for tree edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    /// `├─`, `└─`, `│`
    #[default]
    Unicode,
    /// `|-`, `` `- ``, `|`
    Ascii,
}

impl Glyphs {
    const fn branch(self) -> &'static str {
        match self {
            Self::Unicode => "  ├─ ",
            Self::Ascii => "  |- ",
        }
    }

    const fn last(self) -> &'static str {
        match self {
            Self::Unicode => "  └─ ",
            Self::Ascii => "  `- ",
        }
    }

    const fn pipe(self) -> &'static str {
        match self {
            Self::Unicode => "  │ ",
            Self::Ascii => "  | ",
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::Unicode => "  │  ",
            Self::Ascii => "  |  ",
        }
    }
}

/// Error tree renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Humanizer {
    /// Edge glyphs
    pub glyphs: Glyphs,

    /// Rendered values longer than this many characters are cut and end
    /// with `…`. `None` keeps values whole.
    pub max_value_width: Option<usize>,
}

/// One rendered line. `head` marks the first line of a node.
struct Line {
    head: bool,
    text: String,
}

impl Line {
    fn head(text: String) -> Self {
        Self { head: true, text }
    }

    fn body(text: String) -> Self {
        Self { head: false, text }
    }
}

impl Humanizer {
    /// Renders every top-level node of `tree`, one after another.
    pub fn render(&self, tree: &ErrorTree) -> String {
        self.render_nodes(tree.nodes())
    }

    /// Renders a list of nodes, one after another.
    pub fn render_nodes(&self, nodes: &[ErrorNode]) -> String {
        nodes
            .iter()
            .flat_map(|node| self.lines(node))
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn lines(&self, node: &ErrorNode) -> Vec<Line> {
        if node.is_leaf() {
            return self.leaf(node);
        }

        let children: Vec<Line> = node.branches.iter().flat_map(|child| self.lines(child)).collect();

        // Index of the last child head; lines after it belong to the last child.
        let last_head = children.iter().rposition(|line| line.head);

        let mut lines = Vec::with_capacity(children.len() + 1);
        lines.push(Line::head(node.condition.to_string()));

        // Children follow, so every message line keeps the pipe open.
        if let Some(message) = &node.message {
            lines.extend(
                message
                    .lines()
                    .map(|part| Line::body(format!("{}{part}", self.glyphs.message()))),
            );
        }

        for (index, line) in children.into_iter().enumerate() {
            let head_follows = last_head.is_some_and(|last| index < last);
            let prefix = match (line.head, head_follows) {
                (true, true) => self.glyphs.branch(),
                (true, false) => self.glyphs.last(),
                (false, true) => self.glyphs.pipe(),
                (false, false) => "    ",
            };
            lines.push(Line::body(format!("{prefix}{}", line.text)));
        }

        lines
    }

    fn leaf(&self, node: &ErrorNode) -> Vec<Line> {
        let mut lines = vec![Line::head(format!(
            "{} rejected `{}`",
            node.condition,
            self.value(&node.value)
        ))];

        if let Some(message) = &node.message {
            let parts: Vec<&str> = message.lines().collect();
            let last = parts.len().saturating_sub(1);
            lines.extend(parts.into_iter().enumerate().map(|(index, part)| {
                let prefix = if index == last {
                    self.glyphs.last()
                } else {
                    self.glyphs.message()
                };
                Line::body(format!("{prefix}{part}"))
            }));
        }

        lines
    }

    fn value(&self, value: &Value) -> String {
        let rendered = match value {
            Value::String(text) => escape_controls(text),
            other => other.to_string(),
        };

        match self.max_value_width {
            Some(width) if rendered.chars().count() > width => {
                let mut cut: String = rendered.chars().take(width).collect();
                cut.push('…');
                cut
            }
            _ => rendered,
        }
    }
}

/// Escapes control characters so a value stays on its own line.
fn escape_controls(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Renders `tree` with the default [`Humanizer`].
pub fn humanize(tree: &ErrorTree) -> String {
    Humanizer::default().render(tree)
}

/// Renders `nodes` with the default [`Humanizer`].
pub fn humanize_nodes(nodes: &[ErrorNode]) -> String {
    Humanizer::default().render_nodes(nodes)
}

// ============================================================================
// TESTS
// ============================================================================
