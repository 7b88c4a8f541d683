//! Grammar definitions and the plain-text grammar source reader.
//!
//! The source format is a stream of whitespace-delimited tokens read in a
//! fixed order:
//!
//! ```text
//! 4       direction count
//! 2       number of production rules
//! X X+YF+ first rule: symbol, replacement
//! Y -FX-Y second rule
//! X       axiom
//! ```
//!
//! There is no escaping, so replacements and the axiom cannot contain
//! whitespace.

use crate::error::{FractalError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Production rules keyed by the symbol they rewrite.
pub type Rules = HashMap<char, String>;

/// An immutable L-System definition.
///
/// Cheap to share: expansion and interpretation only ever borrow it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    /// Number of discrete headings the turtle can face.
    pub direction_count: usize,

    /// Symbols without an entry are terminals and survive rewriting unchanged.
    pub rules: Rules,

    /// The generation-1 string.
    pub axiom: String,
}

impl Grammar {
    /// Creates a grammar with no production rules.
    pub fn new(direction_count: usize, axiom: impl Into<String>) -> Result<Self> {
        if direction_count == 0 {
            return Err(FractalError::InvalidDirectionCount(0));
        }
        Ok(Self {
            direction_count,
            rules: Rules::new(),
            axiom: axiom.into(),
        })
    }

    /// Adds a production rule (builder pattern).
    ///
    /// As in grammar sources, the first rule given for a symbol wins; later
    /// ones are dropped with a warning.
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        if self.rules.contains_key(&symbol) {
            warn!(%symbol, "duplicate production rule ignored");
        } else {
            self.rules.insert(symbol, replacement.into());
        }
        self
    }

    /// Reads and parses a grammar source file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FractalError::GrammarRead {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Returns the replacement for `symbol`, if it is not a terminal.
    pub fn rule(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }
}

impl FromStr for Grammar {
    type Err = FractalError;

    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let mut next = |what: &str| {
            tokens
                .next()
                .ok_or_else(|| FractalError::GrammarLoad(format!("missing {what}")))
        };

        let direction_count = parse_count(next("direction count")?, "direction count")?;
        if direction_count < 1 {
            return Err(FractalError::InvalidDirectionCount(direction_count));
        }
        let rule_count = parse_count(next("rule count")?, "rule count")?;
        if rule_count < 0 {
            return Err(FractalError::GrammarLoad(format!(
                "rule count must not be negative, got {rule_count}"
            )));
        }

        let mut rules = Rules::new();
        for n in 0..rule_count {
            let symbol_token = next(&format!("symbol of rule {}", n + 1))?;
            let mut chars = symbol_token.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(FractalError::GrammarLoad(format!(
                        "rule {} symbol must be a single character, got {symbol_token:?}",
                        n + 1
                    )));
                }
            };
            let replacement = next(&format!("replacement of rule {}", n + 1))?;

            if rules.contains_key(&symbol) {
                warn!(%symbol, rule = n + 1, "duplicate production rule ignored");
                continue;
            }
            rules.insert(symbol, replacement.to_owned());
        }

        let axiom = next("axiom")?.to_owned();

        let trailing = tokens.count();
        if trailing > 0 {
            warn!(trailing, "ignoring tokens after the axiom");
        }

        Ok(Self {
            direction_count: direction_count as usize,
            rules,
            axiom,
        })
    }
}

fn parse_count(token: &str, what: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| FractalError::GrammarLoad(format!("{what} must be an integer, got {token:?}")))
}
