//! Token stream extraction from the syntax tree.
//!
//! Every non-empty leaf of the tree becomes one token, in document order.
//! Anonymous leaves are the grammar's literal tokens: words such as `typeof`
//! become keywords and everything else is a punctuator. String and regular
//! expression literals are single tokens, delimiters included. Template
//! literals keep their text as template tokens while the expressions in
//! their `${}` substitutions are tokenised normally.

use jsstyle_core::{Token, TokenKind};
use tree_sitter::Node;

use crate::position::node_span;

const KEYWORD_LITERALS: &[&str] = &["this", "super", "true", "false", "null", "undefined"];

/// Collects the tokens of the tree rooted at `root`.
pub(crate) fn collect_tokens(root: Node<'_>, source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    visit(root, source, &mut tokens);
    tokens
}

fn visit(node: Node<'_>, source: &str, tokens: &mut Vec<Token>) {
    match node.kind() {
        "string" => return push(node, source, TokenKind::String, tokens),
        "regex" => return push(node, source, TokenKind::RegularExpression, tokens),
        "template_string" => return visit_template(node, source, tokens),
        _ => {}
    }
    if node.child_count() == 0 {
        let text = source.get(node.byte_range()).unwrap_or_default();
        return push(node, source, classify(node, text), tokens);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, tokens);
    }
}

fn visit_template(node: Node<'_>, source: &str, tokens: &mut Vec<Token>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "template_substitution" {
            visit(child, source, tokens);
        } else {
            push(child, source, TokenKind::Template, tokens);
        }
    }
}

/// Emits `node` as one token; zero-width nodes are skipped.
fn push(node: Node<'_>, source: &str, kind: TokenKind, tokens: &mut Vec<Token>) {
    if node.start_byte() == node.end_byte() {
        return;
    }
    let text = source.get(node.byte_range()).unwrap_or_default();
    tokens.push(Token::new(text, kind, node_span(node)));
}

fn classify(node: Node<'_>, text: &str) -> TokenKind {
    if !node.is_named() {
        return if text.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
            TokenKind::Keyword
        } else {
            TokenKind::Punctuator
        };
    }

    match node.kind() {
        "comment" | "html_comment" | "hash_bang_line" => TokenKind::Comment,
        "number" => TokenKind::Numeric,
        "string_fragment" | "escape_sequence" | "jsx_text" | "html_character_reference" => {
            TokenKind::String
        }
        literal if KEYWORD_LITERALS.contains(&literal) => TokenKind::Keyword,
        _ => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::JsParser;
    use rstest::rstest;

    fn tokens(source: &str) -> Vec<Token> {
        let mut parser = JsParser::new().expect("parser init");
        let result = parser.parse(source).expect("parse");
        collect_tokens(result.tree().root_node(), source)
    }

    fn kinds(source: &str) -> Vec<(String, TokenKind)> {
        tokens(source)
            .into_iter()
            .map(|token| (token.value, token.kind))
            .collect()
    }

    #[test]
    fn declaration_tokens_are_classified() {
        let got = kinds("let x = 5 + y;");
        let expected = [
            ("let", TokenKind::Keyword),
            ("x", TokenKind::Identifier),
            ("=", TokenKind::Punctuator),
            ("5", TokenKind::Numeric),
            ("+", TokenKind::Punctuator),
            ("y", TokenKind::Identifier),
            (";", TokenKind::Punctuator),
        ];
        let expected: Vec<_> = expected
            .iter()
            .map(|(value, kind)| ((*value).to_owned(), *kind))
            .collect();
        assert_eq!(got, expected);
    }

    #[rstest]
    #[case("a = \"x+y\";", "\"x+y\"", TokenKind::String)]
    #[case("a = 'x/y';", "'x/y'", TokenKind::String)]
    #[case("a = `x+y`;", "x+y", TokenKind::Template)]
    #[case("a = `x+y`;", "`", TokenKind::Template)]
    #[case("a = /x+y/g;", "/x+y/g", TokenKind::RegularExpression)]
    #[case("// x+y\n", "// x+y", TokenKind::Comment)]
    #[case("a = this;", "this", TokenKind::Keyword)]
    #[case("a = typeof b;", "typeof", TokenKind::Keyword)]
    fn literal_contents_are_not_punctuators(
        #[case] source: &str,
        #[case] value: &str,
        #[case] kind: TokenKind,
    ) {
        let found = tokens(source)
            .into_iter()
            .find(|token| token.value == value)
            .expect("token present");
        assert_eq!(found.kind, kind);
    }

    #[test]
    fn literals_are_single_tokens() {
        let got = kinds("r = /ab/g; s = \"a\";");
        let literals: Vec<_> = got
            .iter()
            .filter(|(_, kind)| !kind.is_operator_like() && *kind != TokenKind::Identifier)
            .map(|(value, kind)| (value.as_str(), *kind))
            .collect();
        assert_eq!(
            literals,
            [
                ("/ab/g", TokenKind::RegularExpression),
                ("\"a\"", TokenKind::String)
            ]
        );
        assert!(!got.iter().any(|(value, _)| value == "/" || value == "\""));
    }

    #[test]
    fn template_substitutions_are_tokenised() {
        let got = kinds("t = `a${x+y}b`;");
        let plus = got.iter().find(|(value, _)| value == "+").map(|(_, kind)| *kind);
        assert_eq!(plus, Some(TokenKind::Punctuator));
        let ticks = got
            .iter()
            .filter(|(value, kind)| value == "`" && *kind == TokenKind::Template)
            .count();
        assert_eq!(ticks, 2);
    }

    #[test]
    fn spans_use_one_based_lines_and_byte_columns() {
        let stream = tokens("a;\n  b += 1;");
        let plus_assign = stream
            .iter()
            .find(|token| token.value == "+=")
            .expect("operator");
        assert_eq!(plus_assign.span.start.line, 2);
        assert_eq!(plus_assign.span.start.column, 4);
        assert_eq!(plus_assign.span.end.column, 6);
    }

    #[test]
    fn tokens_are_in_document_order() {
        let stream = tokens("if (a) {\n  b();\n}\n");
        let values: Vec<_> = stream.iter().map(Token::value).collect();
        assert_eq!(values, ["if", "(", "a", ")", "{", "b", "(", ")", ";", "}"]);
    }
}
