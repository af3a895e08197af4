use crate::core::replacer::{ReplacementRules, Replacer};
use crate::domain::model::Record;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TidyError};
use regex::Regex;

const NO_BREAK_SPACE: &str = "\u{00A0}";

/// Runs of two or more ASCII whitespace characters.
const WHITESPACE_RUN: &str = r"[\t\n\x0C\r ]{2,}";

/// Cleans the text of individual cells.
#[derive(Debug, Clone)]
pub struct CellNormalizer {
    replacer: Replacer,
    whitespace_run: Option<Regex>,
}

impl CellNormalizer {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let replacer = Replacer::new(&Self::rules(config))?;

        let whitespace_run = if config.remove_space() {
            let re = Regex::new(WHITESPACE_RUN).map_err(|e| TidyError::ConfigError {
                message: format!("cannot compile whitespace pattern: {}", e),
            })?;
            Some(re)
        } else {
            None
        };

        Ok(Self {
            replacer,
            whitespace_run,
        })
    }

    /// Substitutions in the order they are constructed.
    pub fn rules<C: ConfigProvider + ?Sized>(config: &C) -> ReplacementRules {
        let mut rules = ReplacementRules::new().with(NO_BREAK_SPACE, " ");

        if config.remove_tab() {
            rules.push("\t", "");
        }

        if config.remove_newline() {
            rules.push("\n", "");
            rules.push("\r", "");
        } else {
            rules.push("\n", "\\n");
            rules.push("\r", "\\r");
        }

        rules
    }

    pub fn normalize(&self, cell: &str) -> String {
        let substituted = self.replacer.replace(cell);

        match &self.whitespace_run {
            Some(re) => re.replace_all(&substituted, " ").trim().to_string(),
            None => substituted.into_owned(),
        }
    }

    pub fn normalize_record(&self, record: &mut Record) {
        for cell in record.cells.iter_mut() {
            *cell = self.normalize(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Settings;

    fn normalizer(remove_tab: bool, remove_newline: bool, remove_space: bool) -> CellNormalizer {
        let settings = Settings {
            remove_tab,
            remove_newline,
            remove_space,
            ..Settings::default()
        };
        CellNormalizer::new(&settings).unwrap()
    }

    #[test]
    fn test_rule_order_follows_configuration() {
        let settings = Settings {
            remove_tab: true,
            ..Settings::default()
        };
        let rules: Vec<_> = CellNormalizer::rules(&settings)
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();

        assert_eq!(
            rules,
            vec![
                ("\u{00A0}".to_string(), " ".to_string()),
                ("\t".to_string(), String::new()),
                ("\n".to_string(), "\\n".to_string()),
                ("\r".to_string(), "\\r".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_break_space_always_replaced() {
        let n = normalizer(false, false, false);
        assert_eq!(n.normalize("a\u{00A0}\u{00A0}b"), "a  b");
    }

    #[test]
    fn test_tab_kept_unless_removed() {
        assert_eq!(normalizer(false, false, false).normalize("a\tb"), "a\tb");
        assert_eq!(normalizer(true, false, false).normalize("a\tb"), "ab");
    }

    #[test]
    fn test_newlines_escaped_by_default() {
        let n = normalizer(false, false, false);
        assert_eq!(n.normalize("line1\nline2"), "line1\\nline2");
        // A lone carriage return survives the source and is shown as `\r`.
        assert_eq!(n.normalize("a\rb"), "a\\rb");
    }

    #[test]
    fn test_newlines_removed() {
        let n = normalizer(false, true, false);
        assert_eq!(n.normalize("line1\r\nline2\n"), "line1line2");
    }

    #[test]
    fn test_remove_space_collapses_and_trims() {
        let n = normalizer(false, false, true);
        assert_eq!(n.normalize("a    b"), "a b");
        assert_eq!(n.normalize("  padded \t value  "), "padded value");
        assert_eq!(n.normalize("single space kept"), "single space kept");
    }

    #[test]
    fn test_remove_space_sees_substituted_text() {
        let n = normalizer(false, false, true);
        assert_eq!(n.normalize("a \u{00A0}b"), "a b");

        // Newlines become visible escapes before collapsing, so they do not form a run.
        assert_eq!(n.normalize("a\n\nb"), "a\\n\\nb");
    }

    #[test]
    fn test_escaped_newline_text_is_not_rescanned() {
        let n = normalizer(false, true, false);
        assert_eq!(n.normalize("keep \\n literal"), "keep \\n literal");
    }

    #[test]
    fn test_normalize_record_in_place() {
        let n = normalizer(true, false, false);
        let mut record = Record::from(vec!["a\tb".to_string(), "c".to_string()]);

        n.normalize_record(&mut record);

        assert_eq!(record.cells(), &["ab".to_string(), "c".to_string()]);
    }
}
