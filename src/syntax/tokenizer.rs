use super::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    /// One `\\`-prefixed multiline string line.
    MultilineString,
    StringLiteral,
    CharLiteral,
    /// `@`-prefixed builtin call name, e.g. `@import`.
    Builtin,
    Identifier,
    Number,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Symbol,
}

/// A token with byte offsets into the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

pub(super) fn tokenize(source: &str) -> (Vec<Token>, Vec<ParseError>) {
    Tokenizer::new(source).run()
}

struct Tokenizer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    tokens: Vec<Token>,
    errors: Vec<ParseError>,
    // opener byte and its offset, for unclosed-delimiter reporting
    delimiters: Vec<(u8, usize)>,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
            delimiters: Vec::new(),
        }
    }

    fn run(mut self) -> (Vec<Token>, Vec<ParseError>) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b'/' if self.peek(1) == Some(b'/') => self.consume_line(TokenKind::Comment),
                b'\\' if self.peek(1) == Some(b'\\') => {
                    self.consume_line(TokenKind::MultilineString);
                }
                b'"' => self.consume_quoted(b'"', TokenKind::StringLiteral, "string literal"),
                b'\'' => self.consume_quoted(b'\'', TokenKind::CharLiteral, "character literal"),
                b'@' if self.peek(1).is_some_and(is_ident_start) => self.consume_builtin(),
                b if is_ident_start(b) => self.consume_identifier(),
                b if b.is_ascii_digit() => self.consume_number(),
                b'(' | b'{' | b'[' => self.consume_opener(),
                b')' | b'}' | b']' => self.consume_closer(),
                _ => self.consume_symbol(),
            }
        }

        for (opener, offset) in std::mem::take(&mut self.delimiters) {
            self.errors.push(ParseError {
                message: format!("unclosed '{}'", char::from(opener)),
                offset,
            });
        }

        (self.tokens, self.errors)
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            start,
            end: self.pos,
        });
    }

    fn consume_line(&mut self, kind: TokenKind) {
        let start = self.pos;
        while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
        // exclude a trailing CR from the token text
        if self.pos > start && self.bytes[self.pos - 1] == b'\r' {
            self.pos -= 1;
            self.push(kind, start);
            self.pos += 1;
        } else {
            self.push(kind, start);
        }
    }

    fn consume_quoted(&mut self, quote: u8, kind: TokenKind, what: &str) {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.bytes.get(self.pos) {
                None | Some(&b'\n') => {
                    self.errors.push(ParseError {
                        message: format!("unterminated {what}"),
                        offset: start,
                    });
                    break;
                }
                Some(&b'\\') => {
                    self.pos += 1;
                    // an escape never hides a line boundary
                    if !matches!(self.bytes.get(self.pos), None | Some(&b'\n')) {
                        self.advance_char();
                    }
                }
                Some(&b) if b == quote => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.advance_char(),
            }
        }
        self.push(kind, start);
    }

    fn consume_builtin(&mut self) {
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.bytes.len() && is_ident_byte(self.bytes[self.pos]) {
            self.pos += 1;
        }
        self.push(TokenKind::Builtin, start);
    }

    fn consume_identifier(&mut self) {
        let start = self.pos;
        while self.pos < self.bytes.len() && is_ident_byte(self.bytes[self.pos]) {
            self.pos += 1;
        }
        self.push(TokenKind::Identifier, start);
    }

    fn consume_number(&mut self) {
        let start = self.pos;
        while self.pos < self.bytes.len()
            && (is_ident_byte(self.bytes[self.pos]) || self.bytes[self.pos] == b'.')
        {
            self.pos += 1;
        }
        self.push(TokenKind::Number, start);
    }

    fn consume_opener(&mut self) {
        let b = self.bytes[self.pos];
        let kind = match b {
            b'(' => TokenKind::LParen,
            b'{' => TokenKind::LBrace,
            _ => TokenKind::LBracket,
        };
        self.delimiters.push((b, self.pos));
        let start = self.pos;
        self.pos += 1;
        self.push(kind, start);
    }

    fn consume_closer(&mut self) {
        let b = self.bytes[self.pos];
        let (kind, expected) = match b {
            b')' => (TokenKind::RParen, b'('),
            b'}' => (TokenKind::RBrace, b'{'),
            _ => (TokenKind::RBracket, b'['),
        };
        match self.delimiters.last() {
            Some(&(opener, _)) if opener == expected => {
                self.delimiters.pop();
            }
            _ => self.errors.push(ParseError {
                message: format!("unmatched '{}'", char::from(b)),
                offset: self.pos,
            }),
        }
        let start = self.pos;
        self.pos += 1;
        self.push(kind, start);
    }

    fn consume_symbol(&mut self) {
        let start = self.pos;
        let kind = match self.bytes[self.pos] {
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            _ => TokenKind::Symbol,
        };
        self.advance_char();
        self.push(kind, start);
    }

    /// Advance past one full character, respecting UTF-8 boundaries.
    fn advance_char(&mut self) {
        if let Some(c) = self.source[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        } else {
            self.pos = self.bytes.len();
        }
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
