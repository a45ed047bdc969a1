//! Tokenizer and recursive-descent parser for object-literal data sources.
//!
//! Data files such as `stateData.ts` declare one binding whose value is a
//! JavaScript object literal:
//!
//! ```text
//! export const stateData: Record<string, StateInfo> = {
//!   california: { name: "California", keyStatutes: ["§1950.5", "AB 1482"] },
//! };
//! ```
//!
//! The grammar accepted for values is:
//!
//! ```text
//! value  := object | array | string | number | "-" number | ident ("." ident)*
//! object := "{" (key ":" value | ident) ("," (key ":" value | ident))* ","? "}"
//! array  := "[" value ("," value)* ","? "]"
//! key    := ident | string | number
//! ```
//!
//! Strings may use `'`, `"` or backticks and support the usual escapes.
//! Comments are skipped. Anything before the binding is only tokenized, so
//! type declarations preceding it are harmless.

use std::fmt;

use thiserror::Error;

/// Maximum nesting of objects and arrays.
const MAX_DEPTH: usize = 128;

/// Tokenizer and parser errors, positioned by 1-based line and column.
#[derive(Debug, Error, PartialEq)]
pub enum SourceError {
    /// A string literal reached end of line or input without its closing quote.
    #[error("unterminated string starting at {line}:{column}")]
    UnterminatedString { line: usize, column: usize },

    /// A block comment was never closed.
    #[error("unterminated comment starting at {line}:{column}")]
    UnterminatedComment { line: usize, column: usize },

    /// A `\x`, `\u` escape with invalid hex digits.
    #[error("invalid escape sequence at {line}:{column}")]
    InvalidEscape { line: usize, column: usize },

    /// A token that does not fit the grammar.
    #[error("unexpected {found} at {line}:{column}, expected {expected}")]
    Unexpected {
        found: String,
        expected: &'static str,
        line: usize,
        column: usize,
    },

    /// Input ended in the middle of a value.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// Objects or arrays nested deeper than the parser allows.
    #[error("nesting deeper than {MAX_DEPTH} levels at {line}:{column}")]
    TooDeep { line: usize, column: usize },

    /// The requested binding is not declared in the source.
    #[error("binding `{0}` not found")]
    BindingNotFound(String),
}

/// Result type for source parsing.
pub type Result<T> = std::result::Result<T, SourceError>;

/// A parsed literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
    /// A bare reference such as `Foo` or `Foo.bar`.
    Ident(String),
    Array(Vec<Value>),
    /// Properties in source order; a repeated key replaces the earlier value in place.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// String contents, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Properties, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Self::Object(props) => Some(props),
            _ => None,
        }
    }

    /// Property lookup on an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Ident(String),
    Str(String),
    Number(f64),
    Punct(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "identifier `{name}`"),
            Self::Str(_) => f.write_str("string"),
            Self::Number(n) => write!(f, "number {n}"),
            Self::Punct(c) => write!(f, "'{c}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    line: usize,
    column: usize,
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    fn new(src: &str) -> Self {
        Self {
            chars: src.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match (self.peek_char(0), self.peek_char(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.peek_char(0) {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                (Some('/'), Some('*')) => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        match (self.peek_char(0), self.peek_char(1)) {
                            (Some('*'), Some('/')) => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            (Some(_), _) => {
                                self.bump();
                            }
                            (None, _) => return Err(SourceError::UnterminatedComment { line, column }),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_trivia()?;
        let (line, column) = (self.line, self.column);
        let Some(c) = self.peek_char(0) else {
            return Ok(None);
        };

        let kind = if is_ident_start(c) {
            let mut name = String::new();
            while let Some(c) = self.peek_char(0).filter(|c| is_ident_continue(*c)) {
                name.push(c);
                self.bump();
            }
            TokenKind::Ident(name)
        } else if c.is_ascii_digit()
            || (c == '.' && self.peek_char(1).is_some_and(|n| n.is_ascii_digit()))
        {
            self.lex_number(line, column)?
        } else if matches!(c, '"' | '\'' | '`') {
            self.lex_string(c, line, column)?
        } else {
            self.bump();
            TokenKind::Punct(c)
        };

        Ok(Some(Token { kind, line, column }))
    }

    fn lex_number(&mut self, line: usize, column: usize) -> Result<TokenKind> {
        let mut raw = String::new();
        while let Some(c) = self.peek_char(0) {
            let exponent_sign = matches!(c, '+' | '-') && matches!(raw.chars().last(), Some('e' | 'E'));
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || exponent_sign {
                raw.push(c);
                self.bump();
            } else {
                break;
            }
        }

        let cleaned = raw.replace('_', "");
        let parsed = if let Some(hex) = cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"))
        {
            i64::from_str_radix(hex, 16).ok().map(|n| n as f64)
        } else {
            cleaned.parse::<f64>().ok()
        };

        parsed
            .map(TokenKind::Number)
            .ok_or_else(|| SourceError::Unexpected {
                found: format!("`{raw}`"),
                expected: "a number",
                line,
                column,
            })
    }

    fn lex_string(&mut self, quote: char, line: usize, column: usize) -> Result<TokenKind> {
        self.bump();
        let mut value = String::new();

        loop {
            let Some(c) = self.bump() else {
                return Err(SourceError::UnterminatedString { line, column });
            };
            match c {
                c if c == quote => return Ok(TokenKind::Str(value)),
                '\n' if quote != '`' => return Err(SourceError::UnterminatedString { line, column }),
                '\\' => {
                    let (esc_line, esc_column) = (self.line, self.column);
                    let Some(esc) = self.bump() else {
                        return Err(SourceError::UnterminatedString { line, column });
                    };
                    match esc {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        'b' => value.push('\u{0008}'),
                        'f' => value.push('\u{000C}'),
                        'v' => value.push('\u{000B}'),
                        '0' => value.push('\0'),
                        // Line continuation.
                        '\n' => {}
                        'x' => {
                            let c = self.read_hex(2, esc_line, esc_column)?;
                            value.push(c);
                        }
                        'u' => {
                            let c = self.read_unicode_escape(esc_line, esc_column)?;
                            value.push(c);
                        }
                        other => value.push(other),
                    }
                }
                c => value.push(c),
            }
        }
    }

    fn read_hex(&mut self, digits: usize, line: usize, column: usize) -> Result<char> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or(SourceError::InvalidEscape { line, column })?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or(SourceError::InvalidEscape { line, column })
    }

    fn read_unicode_escape(&mut self, line: usize, column: usize) -> Result<char> {
        if self.peek_char(0) != Some('{') {
            return self.read_hex(4, line, column);
        }

        self.bump();
        let mut code = 0u32;
        let mut digits = 0;
        loop {
            match self.bump() {
                Some('}') if digits > 0 => break,
                Some(c) if digits < 6 => {
                    let digit = c
                        .to_digit(16)
                        .ok_or(SourceError::InvalidEscape { line, column })?;
                    code = code * 16 + digit;
                    digits += 1;
                }
                _ => return Err(SourceError::InvalidEscape { line, column }),
            }
        }
        char::from_u32(code).ok_or(SourceError::InvalidEscape { line, column })
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Recursive-descent parser over the token stream.
struct Parser {
    lexer: Lexer,
    peeked: Option<Token>,
}

impl Parser {
    fn new(src: &str) -> Self {
        Self {
            lexer: Lexer::new(src),
            peeked: None,
        }
    }

    fn peek(&mut self) -> Result<Option<&Token>> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next_token()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn next(&mut self) -> Result<Option<Token>> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.lexer.next_token(),
        }
    }

    fn expect_next(&mut self, expected: &'static str) -> Result<Token> {
        self.next()?.ok_or(SourceError::UnexpectedEof { expected })
    }

    fn peek_is_punct(&mut self, c: char) -> Result<bool> {
        Ok(matches!(self.peek()?, Some(Token { kind: TokenKind::Punct(p), .. }) if *p == c))
    }

    /// Advance past `const|let|var <name> ... =`.
    fn seek_binding(&mut self, name: &str) -> Result<()> {
        let mut after_declarator = false;
        loop {
            let Some(token) = self.next()? else {
                return Err(SourceError::BindingNotFound(name.to_string()));
            };
            match token.kind {
                TokenKind::Ident(ref ident) if after_declarator && ident == name => {
                    return self.skip_to_initializer(name);
                }
                TokenKind::Ident(ref ident) => {
                    after_declarator = matches!(ident.as_str(), "const" | "let" | "var");
                }
                _ => after_declarator = false,
            }
        }
    }

    /// Skip an optional type annotation up to the `=` that starts the initializer.
    fn skip_to_initializer(&mut self, name: &str) -> Result<()> {
        loop {
            let Some(token) = self.next()? else {
                return Err(SourceError::BindingNotFound(name.to_string()));
            };
            match token.kind {
                // `=>` inside a function type is not the initializer.
                TokenKind::Punct('=') if !self.peek_is_punct('>')? => return Ok(()),
                TokenKind::Punct(';') => {
                    return Err(SourceError::BindingNotFound(name.to_string()));
                }
                _ => {}
            }
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        let token = self.expect_next("a value")?;
        if depth > MAX_DEPTH {
            return Err(SourceError::TooDeep {
                line: token.line,
                column: token.column,
            });
        }

        match token.kind {
            TokenKind::Punct('{') => self.parse_object(depth + 1),
            TokenKind::Punct('[') => self.parse_array(depth + 1),
            TokenKind::Str(s) => Ok(Value::Str(s)),
            TokenKind::Number(n) => Ok(Value::Number(n)),
            TokenKind::Punct('-') => match self.expect_next("a number")? {
                Token {
                    kind: TokenKind::Number(n),
                    ..
                } => Ok(Value::Number(-n)),
                other => Err(unexpected(other, "a number")),
            },
            TokenKind::Ident(ident) => match ident.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                "null" | "undefined" => Ok(Value::Null),
                _ => self.parse_path(ident),
            },
            kind => Err(unexpected(
                Token {
                    kind,
                    line: token.line,
                    column: token.column,
                },
                "a value",
            )),
        }
    }

    fn parse_path(&mut self, mut path: String) -> Result<Value> {
        while self.peek_is_punct('.')? {
            self.next()?;
            match self.expect_next("an identifier")? {
                Token {
                    kind: TokenKind::Ident(segment),
                    ..
                } => {
                    path.push('.');
                    path.push_str(&segment);
                }
                other => return Err(unexpected(other, "an identifier")),
            }
        }
        Ok(Value::Ident(path))
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        let mut props: Vec<(String, Value)> = Vec::new();

        loop {
            let token = self.expect_next("a property or '}'")?;
            let key = match token.kind {
                TokenKind::Punct('}') => break,
                TokenKind::Ident(name) | TokenKind::Str(name) => name,
                TokenKind::Number(n) => n.to_string(),
                kind => {
                    return Err(unexpected(
                        Token {
                            kind,
                            line: token.line,
                            column: token.column,
                        },
                        "a property or '}'",
                    ));
                }
            };

            let value = if self.peek_is_punct(':')? {
                self.next()?;
                self.parse_value(depth)?
            } else {
                // Shorthand property `{ name }`.
                Value::Ident(key.clone())
            };

            match props.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => props.push((key, value)),
            }

            match self.expect_next("',' or '}'")? {
                Token {
                    kind: TokenKind::Punct(','),
                    ..
                } => {}
                Token {
                    kind: TokenKind::Punct('}'),
                    ..
                } => break,
                other => return Err(unexpected(other, "',' or '}'")),
            }
        }

        Ok(Value::Object(props))
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        let mut items = Vec::new();

        loop {
            if self.peek_is_punct(']')? {
                self.next()?;
                break;
            }
            items.push(self.parse_value(depth)?);

            match self.expect_next("',' or ']'")? {
                Token {
                    kind: TokenKind::Punct(','),
                    ..
                } => {}
                Token {
                    kind: TokenKind::Punct(']'),
                    ..
                } => break,
                other => return Err(unexpected(other, "',' or ']'")),
            }
        }

        Ok(Value::Array(items))
    }
}

fn unexpected(token: Token, expected: &'static str) -> SourceError {
    SourceError::Unexpected {
        found: token.kind.to_string(),
        expected,
        line: token.line,
        column: token.column,
    }
}

/// Parse a standalone literal value.
pub fn parse_value(src: &str) -> Result<Value> {
    let mut parser = Parser::new(src);
    let value = parser.parse_value(0)?;
    Ok(value)
}

/// Locate `const <name> = ...` in `src` and parse its initializer.
///
/// Tokens after the initializer are never read.
pub fn parse_binding(src: &str, name: &str) -> Result<Value> {
    let mut parser = Parser::new(src);
    parser.seek_binding(name)?;
    parser.parse_value(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_value(r#""hi""#).unwrap(), Value::Str("hi".into()));
        assert_eq!(parse_value("'hi'").unwrap(), Value::Str("hi".into()));
        assert_eq!(parse_value("`hi`").unwrap(), Value::Str("hi".into()));
        assert_eq!(parse_value("42").unwrap(), Value::Number(42.0));
        assert_eq!(parse_value("-1.5").unwrap(), Value::Number(-1.5));
        assert_eq!(parse_value("1_000").unwrap(), Value::Number(1000.0));
        assert_eq!(parse_value("0x1F").unwrap(), Value::Number(31.0));
        assert_eq!(parse_value("2e3").unwrap(), Value::Number(2000.0));
        assert_eq!(parse_value("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_value("null").unwrap(), Value::Null);
        assert_eq!(
            parse_value("Limits.deposit").unwrap(),
            Value::Ident("Limits.deposit".into())
        );
    }

    #[test]
    fn test_string_escapes() {
        let value = parse_value(r#""line\nnext \"quoted\" § \u{1F3E0} \x41""#).unwrap();
        assert_eq!(value.as_str(), Some("line\nnext \"quoted\" § 🏠 A"));

        let value = parse_value(r"'1 month\'s rent'").unwrap();
        assert_eq!(value.as_str(), Some("1 month's rent"));
    }

    #[test]
    fn test_quotes_inside_other_quotes() {
        let value = parse_value(r#"["1 month's rent", 'say "hi"', `both ' and "`]"#).unwrap();
        let items: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(items, vec!["1 month's rent", "say \"hi\"", "both ' and \""]);
    }

    #[test]
    fn test_braces_inside_strings_do_not_nest() {
        let value = parse_value(r#"{ a: "} not the end {", b: "ok" }"#).unwrap();
        assert_eq!(value.get("a").and_then(Value::as_str), Some("} not the end {"));
        assert_eq!(value.get("b").and_then(Value::as_str), Some("ok"));
    }

    #[test]
    fn test_nested_objects_and_trailing_commas() {
        let src = r#"{
            name: "California",
            resources: [
                { title: "DCA", url: "https://dca.ca.gov" },
                { title: "Courts", url: "https://courts.ca.gov", },
            ],
            "quoted-key": 1,
        }"#;
        let value = parse_value(src).unwrap();
        let resources = value.get("resources").and_then(Value::as_array).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(
            resources[1].get("title").and_then(Value::as_str),
            Some("Courts")
        );
        assert_eq!(value.get("quoted-key"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn test_comments_are_skipped() {
        let src = r#"{
            // don't trip on this apostrophe
            a: 1, /* or { this } */ b: 2,
        }"#;
        let value = parse_value(src).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_repeated_key_replaces_in_place() {
        let value = parse_value("{ a: 1, b: 2, a: 3 }").unwrap();
        let props = value.as_object().unwrap();
        assert_eq!(props[0], ("a".to_string(), Value::Number(3.0)));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_shorthand_property() {
        let value = parse_value("{ texas }").unwrap();
        assert_eq!(value.get("texas"), Some(&Value::Ident("texas".into())));
    }

    #[test]
    fn test_parse_binding_skips_type_declarations() {
        let src = r#"
export interface StateInfo {
  name: string;
  resources: Array<{ title: string; url: string }>;
}

type Handler = (s: StateInfo) => void;

export const stateData: Record<string, StateInfo> = {
  texas: { name: "Texas" },
};

export const other = { broken
"#;
        let value = parse_binding(src, "stateData").unwrap();
        assert_eq!(
            value
                .get("texas")
                .and_then(|t| t.get("name"))
                .and_then(Value::as_str),
            Some("Texas")
        );
    }

    #[test]
    fn test_parse_binding_with_arrow_type() {
        let src = "const handlers: Record<string, () => void> = { a: 1 };";
        let value = parse_binding(src, "handlers").unwrap();
        assert_eq!(value.get("a"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn test_binding_not_found() {
        let err = parse_binding("const other = {};", "stateData").unwrap_err();
        assert_eq!(err, SourceError::BindingNotFound("stateData".into()));

        let err = parse_binding("declare const stateData: Foo;", "stateData").unwrap_err();
        assert_eq!(err, SourceError::BindingNotFound("stateData".into()));
    }

    #[test]
    fn test_unterminated_string_position() {
        let err = parse_value("{\n  a: \"open\n}").unwrap_err();
        assert_eq!(err, SourceError::UnterminatedString { line: 2, column: 6 });
    }

    #[test]
    fn test_unexpected_token_position() {
        let err = parse_value("{ a: 1 b: 2 }").unwrap_err();
        match err {
            SourceError::Unexpected {
                found,
                expected,
                line,
                column,
            } => {
                assert_eq!(found, "identifier `b`");
                assert_eq!(expected, "',' or '}'");
                assert_eq!((line, column), (1, 8));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_eof() {
        let err = parse_value("[1, 2").unwrap_err();
        assert_eq!(err, SourceError::UnexpectedEof { expected: "',' or ']'" });
    }

    #[test]
    fn test_unterminated_comment() {
        let err = parse_value("/* never closed").unwrap_err();
        assert_eq!(err, SourceError::UnterminatedComment { line: 1, column: 1 });
    }

    #[test]
    fn test_nesting_limit() {
        let src = "[".repeat(MAX_DEPTH + 5);
        let err = parse_value(&src).unwrap_err();
        assert!(matches!(err, SourceError::TooDeep { .. }));
    }
}
