//! Parallel rewriting of a symbol string by production rules.

use crate::error::{FractalError, Result};
use crate::grammar::{Grammar, Rules};
use tracing::debug;

/// Rewrites `axiom` until it represents generation `generations`.
///
/// Generations are 1-indexed: generation 1 is the axiom itself, and each
/// further generation is one left-to-right pass that replaces every symbol
/// having a rule by its replacement and copies every other symbol.
///
/// Output length usually grows exponentially with `generations`. No ceiling
/// is applied here; callers that accept untrusted counts must bound them.
pub fn expand(axiom: &str, rules: &Rules, generations: i64) -> Result<String> {
    if generations < 1 {
        return Err(FractalError::InvalidGenerationCount(generations));
    }

    let mut current = axiom.to_owned();
    for generation in 2..=generations {
        current = rewrite(&current, rules);
        debug!(generation, len = current.len(), "rewrite pass complete");
    }
    Ok(current)
}

fn rewrite(input: &str, rules: &Rules) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for symbol in input.chars() {
        match rules.get(&symbol) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(symbol),
        }
    }
    output
}

impl Grammar {
    /// Expands this grammar's axiom to generation `generations`.
    ///
    /// See [`expand`].
    pub fn expand(&self, generations: i64) -> Result<String> {
        expand(&self.axiom, &self.rules, generations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_splices_replacements_in_order() {
        let rules = Rules::from([('a', "ab".to_owned()), ('b', "a".to_owned())]);
        assert_eq!(rewrite("ab", &rules), "aba");
        assert_eq!(rewrite("aba", &rules), "abaab");
    }

    #[test]
    fn empty_replacement_erases_symbol() {
        let rules = Rules::from([('X', String::new())]);
        assert_eq!(rewrite("FXF", &rules), "FF");
    }
}
