//! Token definitions for the OpenFOAM dictionary format
//!
//! The tokens are defined using the logos derive macro. Word tokens follow the
//! OpenFOAM word rules: a word may contain parentheses as long as they balance,
//! so `div(phi,U)` is a single keyword while `(0 0 0)` is a list of three words.
use logos::{FilterResult, Lexer, Logos};
use std::fmt;

/// All possible tokens in a dictionary file
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
pub enum Token {
    // Structure
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(";")]
    Semicolon,

    // Lists and dimension sets
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,

    // Double-quoted string, quotes included
    #[regex(r#""([^"\\]|\\[\s\S])*""#, |lex| lex.slice().to_owned())]
    Str(String),

    // #{ ... #} code block
    #[token("#{", verbatim)]
    Verbatim(String),

    // #include, #remove, #calc, ...
    #[regex(r"#[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Directive(String),

    // $name, ${name}, $:a.b, $..a
    #[regex(r"\$\{[^}\s]*\}", |lex| lex.slice().to_owned())]
    #[regex(r#"\$[^\s;{}()\[\]"'/]+"#, |lex| lex.slice().to_owned())]
    Variable(String),

    // Characters that are neither word characters nor structure.
    // `/* ... */` comments start like a slash and are skipped here.
    #[regex(r"[/']", |lex| lex.slice().to_owned())]
    #[token("/*", block_comment)]
    Punct(String),

    // Keywords, numbers and every other bare word
    #[regex(r#"[^\s;{}()\[\]"'#$/]"#, lex_word)]
    Word(String),
}

/// Skip a block comment. An unterminated comment is a lex error.
fn block_comment(lex: &mut Lexer<Token>) -> FilterResult<String, ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => FilterResult::Error(()),
    }
}

/// Extend a `#{` over the code block up to and including its `#}`
fn verbatim(lex: &mut Lexer<Token>) -> Option<String> {
    let end = lex.remainder().find("#}")?;
    lex.bump(end + 2);
    Some(lex.slice().to_owned())
}

/// Extend a word over the remaining word characters.
///
/// Parentheses are part of a word while they balance; an unmatched `)` ends it.
fn lex_word(lex: &mut Lexer<Token>) -> String {
    let mut depth = 0usize;
    let mut len = 0usize;
    for c in lex.remainder().chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => break,
            ')' => depth -= 1,
            c if c.is_whitespace()
                || matches!(c, '"' | '\'' | '/' | ';' | '{' | '}' | '[' | ']') =>
            {
                break
            }
            _ => {}
        }
        len += c.len_utf8();
    }
    lex.bump(len);
    lex.slice().to_owned()
}

impl Token {
    /// Source text of the token as written
    pub fn as_str(&self) -> &str {
        match self {
            Token::OpenBrace => "{",
            Token::CloseBrace => "}",
            Token::Semicolon => ";",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::OpenBracket => "[",
            Token::CloseBracket => "]",
            Token::Str(s)
            | Token::Verbatim(s)
            | Token::Directive(s)
            | Token::Variable(s)
            | Token::Punct(s)
            | Token::Word(s) => s,
        }
    }

    /// Check if this token can stand alone inside an entry value
    pub fn is_value_atom(&self) -> bool {
        matches!(
            self,
            Token::Word(_)
                | Token::Str(_)
                | Token::Variable(_)
                | Token::Verbatim(_)
                | Token::Directive(_)
                | Token::Punct(_)
        )
    }

    /// Check if this token can name an entry
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Word(_) | Token::Str(_) | Token::Variable(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).map(|t| t.expect("valid token")).collect()
    }

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn test_simple_entry() {
        assert_eq!(
            lex_all("keyword 1;"),
            vec![word("keyword"), word("1"), Token::Semicolon]
        );
    }

    #[test]
    fn test_balanced_parentheses_stay_in_word() {
        assert_eq!(
            lex_all("div(phi,U) Gauss linear;"),
            vec![
                word("div(phi,U)"),
                word("Gauss"),
                word("linear"),
                Token::Semicolon
            ]
        );
    }

    #[test]
    fn test_list_splits_on_parentheses() {
        assert_eq!(
            lex_all("uniform (0 0 0)"),
            vec![
                word("uniform"),
                Token::OpenParen,
                word("0"),
                word("0"),
                word("0"),
                Token::CloseParen
            ]
        );
    }

    #[test]
    fn test_dimension_set() {
        let tokens = lex_all("[0 1 -1 0 0 0 0]");
        assert_eq!(tokens.first(), Some(&Token::OpenBracket));
        assert_eq!(tokens[3], word("-1"));
        assert_eq!(tokens.last(), Some(&Token::CloseBracket));
        assert_eq!(tokens.len(), 9);
    }

    #[test]
    fn test_comments_are_skipped() {
        let source = "// header\na /* inline */ 1; /* multi\nline */";
        assert_eq!(lex_all(source), vec![word("a"), word("1"), Token::Semicolon]);
    }

    #[test]
    fn test_block_comment_forms() {
        assert_eq!(lex_all("/**/ x 5;"), vec![word("x"), word("5"), Token::Semicolon]);
        assert_eq!(lex_all("x /* a * b / c */ 5;"), vec![word("x"), word("5"), Token::Semicolon]);

        let banner = "\
/*--------------------------------*- C++ -*----------------------------------*\\
  =========                 |
  \\      /  F ield         | OpenFOAM
\\*---------------------------------------------------------------------------*/
x 5;
// ************************************************************************* //
";
        assert_eq!(lex_all(banner), vec![word("x"), word("5"), Token::Semicolon]);
    }

    #[test]
    fn test_unterminated_block_comment_is_an_error() {
        assert!(Token::lexer("x 5; /* open").any(|t| t.is_err()));
    }

    #[test]
    fn test_verbatim_block_spans_lines() {
        assert_eq!(
            lex_all("code #{\n    return 1;\n#};"),
            vec![
                word("code"),
                Token::Verbatim("#{\n    return 1;\n#}".to_string()),
                Token::Semicolon
            ]
        );
        assert!(Token::lexer("code #{ open;").any(|t| t.is_err()));
    }

    #[test]
    fn test_quoted_pattern_keyword() {
        assert_eq!(
            lex_all(r#""(inlet|outlet).*" { }"#),
            vec![
                Token::Str(r#""(inlet|outlet).*""#.to_string()),
                Token::OpenBrace,
                Token::CloseBrace
            ]
        );
    }

    #[test]
    fn test_string_with_escaped_quote() {
        assert_eq!(
            lex_all(r#"s "a \"b\" c";"#),
            vec![
                word("s"),
                Token::Str(r#""a \"b\" c""#.to_string()),
                Token::Semicolon
            ]
        );
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            lex_all("a $b; c ${d.e}; f $:g.h;"),
            vec![
                word("a"),
                Token::Variable("$b".to_string()),
                Token::Semicolon,
                word("c"),
                Token::Variable("${d.e}".to_string()),
                Token::Semicolon,
                word("f"),
                Token::Variable("$:g.h".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_directive_and_verbatim() {
        assert_eq!(
            lex_all("#include \"defaults\"\ncode #{ int x = 1; #};"),
            vec![
                Token::Directive("#include".to_string()),
                Token::Str("\"defaults\"".to_string()),
                word("code"),
                Token::Verbatim("#{ int x = 1; #}".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_stray_slash_is_punctuation() {
        assert_eq!(
            lex_all("a 1 / 2;"),
            vec![
                word("a"),
                word("1"),
                Token::Punct("/".to_string()),
                word("2"),
                Token::Semicolon
            ]
        );
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        assert!(Token::lexer("a \"open;").any(|t| t.is_err()));
    }

    #[test]
    fn test_token_predicates() {
        assert!(word("a").is_keyword());
        assert!(Token::Str("\"a\"".to_string()).is_keyword());
        assert!(!Token::Directive("#include".to_string()).is_keyword());

        assert!(Token::Punct("/".to_string()).is_value_atom());
        assert!(!Token::OpenParen.is_value_atom());
        assert!(!Token::Semicolon.is_value_atom());
    }

    #[test]
    fn test_display_reproduces_source_text() {
        assert_eq!(Token::OpenBracket.to_string(), "[");
        assert_eq!(word("div(phi,U)").to_string(), "div(phi,U)");
    }
}
