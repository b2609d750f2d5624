use crate::interpreter::lexer::{Spanned, Token, TokenKind};

/// A cursor over a scanned token sequence with one token of lookahead.
///
/// Reading past the end never fails: both [`TokenStream::peek`] and
/// [`TokenStream::next`] keep yielding [`Token::EndOfInput`], positioned at
/// the end of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens:   Vec<Spanned>,
    position: usize,
    end:      usize,
}

impl TokenStream {
    /// Creates a stream over `tokens`.
    ///
    /// `end` is the byte length of the source; it is reported as the offset
    /// of the end-of-input sentinel.
    #[must_use]
    pub const fn new(tokens: Vec<Spanned>, end: usize) -> Self {
        Self { tokens,
               position: 0,
               end }
    }

    /// Returns the kind of the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> TokenKind {
        self.peek_token().kind()
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek_token(&self) -> &Token {
        self.tokens
            .get(self.position)
            .map_or(&Token::EndOfInput, |(token, _)| token)
    }

    /// Returns the source offset of the next token.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.tokens
            .get(self.position)
            .map_or(self.end, |(_, offset)| *offset)
    }

    /// Consumes and returns the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        self.next_spanned().0
    }

    /// Consumes and returns the next token with its source offset.
    pub fn next_spanned(&mut self) -> Spanned {
        match self.tokens.get(self.position) {
            Some(spanned) => {
                self.position += 1;
                *spanned
            },
            None => (Token::EndOfInput, self.end),
        }
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
