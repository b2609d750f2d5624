use std::fmt::Write as _;

use logos::Logos;
use tracing::debug;

use crate::{
    ast::BinaryOperator,
    error::ScanError,
    interpreter::{value::number::Number, variables::Variables},
};

/// Result type used by the scanner.
pub type ScanResult<T> = Result<T, ScanError>;

/// A token paired with the byte offset where it starts in the source.
pub type Spanned = (Token, usize);

/// Raw lexemes recognised by the generated lexer.
///
/// Lexemes still borrow from the source; [`scan`] turns them into owned
/// [`Token`]s, resolving identifiers and parsing numeric literals.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme<'s> {
    /// A maximal run of digits and dots, e.g. `42`, `2.5` or the malformed
    /// `1.2.3`.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice())]
    Number(&'s str),
    /// A variable name such as `x` or `rate`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice())]
    Identifier(&'s str),
    /// One of `+ - * / %`.
    #[regex(r"[-+*/%]", |lex| lex.slice().chars().next())]
    Operator(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, newlines, vertical tabs and form feeds.
    #[regex(r"[ \t\r\n\x0B\f]+", logos::skip)]
    Ignored,
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the scanner.
/// Variables have already been replaced by their values, so the parser only
/// ever sees numbers, operators and brackets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal or a resolved variable.
    Number(Number),
    /// One of `+ - * / %`.
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Produced by the token stream once the input is exhausted.
    EndOfInput,
}

/// An operator token: its kind plus the character it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    /// The operation to perform.
    pub kind:   BinaryOperator,
    /// The literal source character.
    pub symbol: char,
}

impl From<BinaryOperator> for Operator {
    fn from(kind: BinaryOperator) -> Self {
        Self { kind,
               symbol: kind.symbol() }
    }
}

/// The class of a token without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// [`Token::Number`]
    Number,
    /// [`Token::Operator`]
    Operator,
    /// [`Token::OpenParen`]
    OpenParen,
    /// [`Token::CloseParen`]
    CloseParen,
    /// [`Token::EndOfInput`]
    EndOfInput,
}

impl Token {
    /// Returns the class of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Operator(_) => TokenKind::Operator,
            Self::OpenParen => TokenKind::OpenParen,
            Self::CloseParen => TokenKind::CloseParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "'{}'", op.symbol),
            Self::OpenParen => write!(f, "'('"),
            Self::CloseParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Number => "number",
            Self::Operator => "operator",
            Self::OpenParen => "open",
            Self::CloseParen => "close",
            Self::EndOfInput => "end",
        };
        write!(f, "{kind}")
    }
}

/// Converts source text into the complete token sequence.
///
/// Whitespace is skipped. Identifiers are looked up in `variables` and
/// replaced by their value. The returned sequence never contains
/// [`Token::EndOfInput`]; the token stream supplies that sentinel itself.
///
/// # Errors
/// - [`ScanError::UnknownChar`] for a character outside the expression
///   alphabet.
/// - [`ScanError::UnknownVariable`] for an identifier missing from
///   `variables`.
/// - [`ScanError::MalformedNumber`] for a numeric run that does not parse.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     lexer::{Token, scan},
///     value::number::Number,
///     variables::Variables,
/// };
///
/// let mut variables = Variables::new();
/// variables.insert("x", Number::Integer(3));
///
/// let tokens = scan("(x)", &variables).unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds, vec![Token::OpenParen, Token::Number(Number::Integer(3)), Token::CloseParen]);
/// ```
pub fn scan(source: &str, variables: &Variables) -> ScanResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let offset = lexer.span().start;

        let token = match lexeme {
            Ok(Lexeme::Number(literal)) => {
                let value =
                    Number::parse_literal(literal).ok_or_else(|| ScanError::MalformedNumber {
                        literal: literal.to_string(),
                        offset,
                    })?;
                Token::Number(value)
            },
            Ok(Lexeme::Identifier(name)) => {
                let value = variables.get(name)
                                     .ok_or_else(|| ScanError::UnknownVariable { name: name.to_string(),
                                                                                 offset })?;
                Token::Number(value)
            },
            Ok(Lexeme::Operator(symbol)) => {
                let kind = BinaryOperator::from_symbol(symbol).ok_or(ScanError::UnknownChar { ch: symbol,
                                                                                             offset })?;
                Token::Operator(kind.into())
            },
            Ok(Lexeme::LParen) => Token::OpenParen,
            Ok(Lexeme::RParen) => Token::CloseParen,
            Ok(Lexeme::Ignored) => continue,
            Err(()) => {
                let ch = source[offset..].chars().next().unwrap_or_default();
                return Err(ScanError::UnknownChar { ch, offset });
            },
        };

        tokens.push((token, offset));
    }

    debug!(count = tokens.len(), "scanned source");
    Ok(tokens)
}

/// Renders a token sequence one token per line as `offset kind lexeme`.
///
/// ```
/// use reckon::interpreter::{lexer::{dump_tokens, scan}, variables::Variables};
///
/// let tokens = scan("1 + 2.5", &Variables::new()).unwrap();
///
/// assert_eq!(dump_tokens(&tokens), "0 number 1\n2 operator '+'\n4 number 2.5\n");
/// ```
#[must_use]
pub fn dump_tokens(tokens: &[Spanned]) -> String {
    let mut out = String::new();
    for (token, offset) in tokens {
        let _ = writeln!(out, "{offset} {} {token}", token.kind());
    }
    out
}
