use crate::utils::error::{Result, TidyError};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

/// Ordered literal `(from, to)` substitutions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementRules {
    rules: Vec<(String, String)>,
}

impl ReplacementRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.rules.push((from.into(), to.into()));
    }

    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.push(from, to);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Applies every rule in a single pass over the original text.
///
/// Matches are located against the input only, so the output of one rule is
/// never rescanned by another. When two rules match at the same position the
/// one pushed first wins (leftmost-first alternation).
#[derive(Debug, Clone)]
pub struct Replacer {
    pattern: Option<Regex>,
    replacements: HashMap<String, String>,
}

impl Replacer {
    pub fn new(rules: &ReplacementRules) -> Result<Self> {
        if rules.is_empty() {
            return Ok(Self {
                pattern: None,
                replacements: HashMap::new(),
            });
        }

        let mut alternatives = Vec::with_capacity(rules.len());
        let mut replacements = HashMap::with_capacity(rules.len());

        for (from, to) in rules.iter() {
            if from.is_empty() {
                return Err(TidyError::ConfigError {
                    message: "replacement rule with an empty match string".to_string(),
                });
            }
            alternatives.push(regex::escape(from));
            replacements
                .entry(from.to_string())
                .or_insert_with(|| to.to_string());
        }

        let pattern = Regex::new(&alternatives.join("|")).map_err(|e| TidyError::ConfigError {
            message: format!("cannot compile replacement rules: {}", e),
        })?;

        Ok(Self {
            pattern: Some(pattern),
            replacements,
        })
    }

    pub fn replace<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, |caps: &Captures| {
                self.replacements
                    .get(&caps[0])
                    .cloned()
                    .unwrap_or_default()
            }),
            None => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_output_is_not_rescanned() {
        let rules = ReplacementRules::new().with("a", "b").with("b", "c");
        let replacer = Replacer::new(&rules).unwrap();

        assert_eq!(replacer.replace("ab"), "bc");
    }

    #[test]
    fn test_earlier_rule_wins_at_same_position() {
        let rules = ReplacementRules::new()
            .with(r#"\""#, r#""""#)
            .with(r#"""#, r#""""#);
        let replacer = Replacer::new(&rules).unwrap();

        assert_eq!(replacer.replace(r#"a\"b"c"#), r#"a""b""c"#);
    }

    #[test]
    fn test_empty_rules_borrow_input() {
        let replacer = Replacer::new(&ReplacementRules::new()).unwrap();

        assert!(matches!(replacer.replace("as is"), Cow::Borrowed("as is")));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let rules = ReplacementRules::new().with(".*", "-");
        let replacer = Replacer::new(&rules).unwrap();

        assert_eq!(replacer.replace("a.*b.c"), "a-b.c");
    }

    #[test]
    fn test_empty_match_string_rejected() {
        let rules = ReplacementRules::new().with("", "x");

        assert!(Replacer::new(&rules).is_err());
    }
}
