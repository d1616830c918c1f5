//! Code block highlighting for textual content.
//!
//! Accepts the markdown convention of a `language-<lang>` class name plus
//! a literal source string, and produces styled line/token structures for
//! display. Unknown languages fall back to plain-text tokenization; there
//! is no failure path.

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Class name prefix carrying the language identifier.
const LANGUAGE_PREFIX: &str = "language-";

/// Theme the token colors are sampled from.
const THEME: &str = "base16-ocean.dark";

/// A classified substring of a source line, with its foreground color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub color: [u8; 3],
}

/// One displayed line of a highlighted block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub tokens: Vec<Token>,
}

/// A fully tokenized code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedBlock {
    /// Language identifier stripped from the class name, if present.
    pub language: Option<String>,
    pub lines: Vec<Line>,
}

/// Owns the loaded syntax and theme sets. Building one is not free, so
/// callers keep it around; highlighting itself is stateless and
/// re-tokenizes the full source on every call.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
    fallback_color: [u8; 3],
}

impl Highlighter {
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(THEME).unwrap_or_default();
        let fallback_color = theme
            .settings
            .foreground
            .map(|c| [c.r, c.g, c.b])
            .unwrap_or([255, 255, 255]);
        Self {
            syntaxes,
            theme,
            fallback_color,
        }
    }

    /// Highlight `source` for a `language-<lang>` class name. A class
    /// name without the prefix means no language, which tokenizes as
    /// plain text.
    pub fn highlight_class(&self, class_name: &str, source: &str) -> HighlightedBlock {
        self.highlight(class_name.strip_prefix(LANGUAGE_PREFIX), source)
    }

    /// Tokenize `source`, falling back to plain text when the language is
    /// absent or unknown. A trailing newline does not produce a trailing
    /// empty line.
    pub fn highlight(&self, language: Option<&str>, source: &str) -> HighlightedBlock {
        let syntax = language
            .and_then(|lang| self.syntaxes.find_syntax_by_token(lang))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();

        for raw_line in LinesWithEndings::from(source) {
            let tokens = match highlighter.highlight_line(raw_line, &self.syntaxes) {
                Ok(spans) => spans
                    .into_iter()
                    .map(|(style, text)| Token {
                        text: text.trim_end_matches('\n').to_owned(),
                        color: [
                            style.foreground.r,
                            style.foreground.g,
                            style.foreground.b,
                        ],
                    })
                    .collect(),
                Err(e) => {
                    // Highlighting state went bad; degrade to an unstyled line
                    log::warn!("highlight failed, rendering line unstyled: {e}");
                    vec![Token {
                        text: raw_line.trim_end_matches('\n').to_owned(),
                        color: self.fallback_color,
                    }]
                }
            };
            lines.push(Line { tokens });
        }

        HighlightedBlock {
            language: language.map(str::to_owned),
            lines,
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_trailing_newline_drops_empty_line() {
        let hl = Highlighter::new();
        let block = hl.highlight_class("language-js", "a\nb\n");
        assert_eq!(block.lines.len(), 2);
        assert_eq!(line_text(&block.lines[0]), "a");
        assert_eq!(line_text(&block.lines[1]), "b");
    }

    #[test]
    fn test_source_without_trailing_newline_keeps_last_line() {
        let hl = Highlighter::new();
        let block = hl.highlight_class("language-js", "a\nb");
        assert_eq!(block.lines.len(), 2);
        assert_eq!(line_text(&block.lines[1]), "b");
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let hl = Highlighter::new();
        let block = hl.highlight_class("language-not-a-real-lang", "one\ntwo\nthree\n");
        assert_eq!(block.lines.len(), 3);
        for line in &block.lines {
            assert_eq!(line.tokens.len(), 1);
        }
        assert_eq!(block.language.as_deref(), Some("not-a-real-lang"));
    }

    #[test]
    fn test_class_without_prefix_means_no_language() {
        let hl = Highlighter::new();
        let block = hl.highlight_class("plain", "x\n");
        assert_eq!(block.language, None);
        assert_eq!(block.lines.len(), 1);
    }

    #[test]
    fn test_known_language_produces_multiple_token_kinds() {
        let hl = Highlighter::new();
        let block = hl.highlight_class("language-rust", "fn main() { let x = 1; }\n");
        assert_eq!(block.lines.len(), 1);
        let tokens = &block.lines[0].tokens;
        assert!(tokens.len() > 1, "expected multiple tokens, got {tokens:?}");
        let first_color = tokens[0].color;
        assert!(
            tokens.iter().any(|t| t.color != first_color),
            "expected more than one color"
        );
    }

    #[test]
    fn test_tokens_reassemble_source_lines() {
        let hl = Highlighter::new();
        let source = "let a = \"hi\";\nconsole.log(a);\n";
        let block = hl.highlight_class("language-js", source);
        let reassembled: Vec<String> = block.lines.iter().map(line_text).collect();
        assert_eq!(reassembled, vec!["let a = \"hi\";", "console.log(a);"]);
    }

    #[test]
    fn test_empty_source_produces_no_lines() {
        let hl = Highlighter::new();
        assert!(hl.highlight_class("language-js", "").lines.is_empty());
    }
}
