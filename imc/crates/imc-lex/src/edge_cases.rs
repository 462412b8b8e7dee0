//! Edge case tests for imc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, OwnedToken, TokenKind};

    fn lex_all(source: &str) -> Vec<OwnedToken> {
        Lexer::from_source(source).unwrap().collect()
    }

    fn texts(source: &str) -> Vec<String> {
        lex_all(source).into_iter().map(|t| t.text).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char() {
        let t = lex_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_edge_long_line() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("if {} == 1", name));
        assert_eq!(t.len(), 4);
        assert_eq!(t[1].text.len(), 10000);
    }

    #[test]
    fn test_edge_many_lines() {
        let source = "end\n".repeat(5000);
        let t = lex_all(&source);
        assert_eq!(t.len(), 5000);
        assert_eq!(t[4999].line, 4999);
    }

    #[test]
    fn test_edge_empty_source_rejected() {
        assert!(Lexer::from_source("").is_err());
        // One empty line is still a line.
        assert!(Lexer::from_source("\n").unwrap().is_at_end());
    }

    #[test]
    fn test_edge_trailing_whitespace() {
        assert_eq!(texts("if   \t"), ["if"]);
    }

    #[test]
    fn test_edge_no_trailing_newline() {
        assert_eq!(texts("a b\nc d"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_edge_symbols_without_spaces() {
        assert_eq!(texts("(a)"), ["(", "a)"]);
        assert_eq!(texts("[]"), ["[", "]"]);
        assert_eq!(texts("!=!"), ["!=", "!"]);
        assert_eq!(texts("<=>="), ["<=", ">="]);
    }

    #[test]
    fn test_edge_keyword_then_symbol() {
        assert_eq!(texts("end)"), ["end", ")"]);
        assert_eq!(texts("while("), ["while", "("]);
    }

    #[test]
    fn test_edge_keyword_then_underscore() {
        // `_` is not alphanumeric, so it does not extend the keyword.
        let t = lex_all("if_x");
        assert_eq!(t[0].kind, TokenKind::If);
        assert_eq!(t[1].text, "_x");
    }

    #[test]
    fn test_edge_keyword_prefix_of_identifier() {
        for source in ["iffy", "elsewhere", "forest", "inner", "ending", "whiled", "trueness"] {
            let t = lex_all(source);
            assert_eq!(t.len(), 1, "{source}");
            assert_eq!(t[0].kind, TokenKind::Unknown, "{source}");
        }
    }

    #[test]
    fn test_edge_keyword_followed_by_unicode_letter() {
        let t = lex_all("inñ");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_edge_keyword_followed_by_unicode_punct() {
        let t = lex_all("if…");
        assert_eq!(t[0].kind, TokenKind::If);
        assert_eq!(t[1].text, "…");
    }

    #[test]
    fn test_edge_comment_after_symbol() {
        assert_eq!(texts("x = 1 // one"), ["x", "=", "1", "// one"]);
        assert_eq!(texts("+//"), ["+", "//"]);
    }

    #[test]
    fn test_edge_empty_comment() {
        let t = lex_all("//");
        assert_eq!(t[0].kind, TokenKind::Comment);
        assert_eq!(t[0].text, "//");
    }

    #[test]
    fn test_edge_unicode_whitespace_separates() {
        assert_eq!(texts("a\u{2003}b\u{3000}c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_edge_multibyte_runs() {
        let t = lex_all("π = 3.14 ≠ 🦀");
        assert_eq!(t[0].text, "π");
        assert_eq!(t[2].text, "3.14");
        assert_eq!(t[3].text, "≠");
        assert_eq!(t[4].text, "🦀");
        assert_eq!(t[4].span.len, 4);
    }

    #[test]
    fn test_edge_spans_index_line_text() {
        let mut lexer = Lexer::from_source("  héllo  ==  wörld").unwrap();
        while !lexer.is_at_end() {
            let span = lexer.span();
            assert_eq!(&lexer.line_text()[span.start..span.end()], lexer.text());
            lexer.advance();
        }
    }

    #[test]
    fn test_edge_line_number_with_comment_lines() {
        let t = lex_all("// header\n\nif\n// note\nend");
        let lines: Vec<usize> = t.iter().map(|t| t.line).collect();
        assert_eq!(lines, [0, 2, 3, 4]);
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_reconstructs_non_whitespace() {
        use proptest::prelude::*;

        // No '/', so no comments, which would keep their inner whitespace.
        proptest!(|(source in "[a-z0-9=+*!<>&|(),\\-\\^% \t\n]{1,80}")| {
            let joined: String = lex_all(&source).into_iter().map(|t| t.text).collect();
            let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(joined, expected);
        });
    }

    #[test]
    fn test_property_arbitrary_text_never_panics() {
        use proptest::prelude::*;

        proptest!(|(source in any::<String>())| {
            let Ok(mut lexer) = Lexer::from_source(&source) else {
                prop_assert!(source.is_empty());
                return Ok(());
            };
            let mut last_line = 0;
            while !lexer.is_at_end() {
                prop_assert!(!lexer.text().is_empty());
                prop_assert!(lexer.line_number() >= last_line);
                let span = lexer.span();
                prop_assert_eq!(&lexer.line_text()[span.start..span.end()], lexer.text());
                last_line = lexer.line_number();
                lexer.advance();
            }
            prop_assert_eq!(lexer.kind(), TokenKind::EndOfInput);
        });
    }

    #[test]
    fn test_property_advance_at_end_is_idempotent() {
        use proptest::prelude::*;

        proptest!(|(source in "[a-z=/ \n]{1,40}", extra in 1..5usize)| {
            let mut lexer = Lexer::from_source(&source).unwrap();
            while !lexer.is_at_end() {
                lexer.advance();
            }
            let line = lexer.line_number();
            for _ in 0..extra {
                lexer.advance();
                prop_assert!(lexer.is_at_end());
                prop_assert_eq!(lexer.kind(), TokenKind::EndOfInput);
                prop_assert_eq!(lexer.line_number(), line);
                prop_assert_eq!(lexer.text(), "");
            }
        });
    }

    #[test]
    fn test_property_whitespace_is_ignored() {
        use proptest::prelude::*;

        proptest!(|(spaces in 0..50usize, newlines in 0..5usize)| {
            let pad = format!("{}{}", " ".repeat(spaces), "\n".repeat(newlines));
            let source = format!("{pad}while{pad}");
            let t = lex_all(&source);
            prop_assert_eq!(t.len(), 1);
            prop_assert_eq!(t[0].kind, TokenKind::While);
            prop_assert_eq!(t[0].line, newlines);
        });
    }
}
