//! Cypsa Lexer - tokenizes source code into tokens
//!
//! Tokens borrow their lexeme straight from the source buffer, so scanning
//! never allocates. The lexer cannot fail: malformed input produces a
//! [`TokenKind::Error`] token whose lexeme is the diagnostic message.

use std::fmt;

/// Cypsa keyword types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// and keyword
    And,
    /// class keyword
    Class,
    /// else keyword
    Else,
    /// false keyword
    False,
    /// for keyword
    For,
    /// func keyword
    Func,
    /// if keyword
    If,
    /// nil keyword
    Nil,
    /// or keyword
    Or,
    /// print keyword
    Print,
    /// return keyword
    Return,
    /// super keyword
    Super,
    /// this keyword
    This,
    /// true keyword
    True,
    /// var keyword
    Var,
    /// while keyword
    While,
}

impl Keyword {
    /// Look up the keyword spelled exactly as `word`
    pub fn lookup(word: &str) -> Option<Keyword> {
        let keyword = match word {
            "and" => Keyword::And,
            "class" => Keyword::Class,
            "else" => Keyword::Else,
            "false" => Keyword::False,
            "for" => Keyword::For,
            "func" => Keyword::Func,
            "if" => Keyword::If,
            "nil" => Keyword::Nil,
            "or" => Keyword::Or,
            "print" => Keyword::Print,
            "return" => Keyword::Return,
            "super" => Keyword::Super,
            "this" => Keyword::This,
            "true" => Keyword::True,
            "var" => Keyword::Var,
            "while" => Keyword::While,
            _ => return None,
        };
        Some(keyword)
    }
}

/// Cypsa punctuators (operators and delimiters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuator {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Opening brace
    LBrace,
    /// Closing brace
    RBrace,
    /// Semicolon
    Semicolon,
    /// Comma
    Comma,
    /// Dot
    Dot,
    /// Minus
    Minus,
    /// Plus
    Plus,
    /// Divide
    Slash,
    /// Multiply
    Star,
    /// Logical NOT
    Bang,
    /// Inequality
    BangEq,
    /// Assignment
    Assign,
    /// Equality
    EqEq,
    /// Less than
    Lt,
    /// Less than or equal
    LtEq,
    /// Greater than
    Gt,
    /// Greater than or equal
    GtEq,
}

/// What a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Operator or delimiter
    Punctuator(Punctuator),
    /// Reserved word
    Keyword(Keyword),
    /// Identifier
    Identifier,
    /// Numeric literal
    Number,
    /// String literal, quotes included in the lexeme
    String,
    /// Scanning failed; the lexeme is the message
    Error,
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Punctuator(p) => write!(f, "{:?}", p),
            TokenKind::Keyword(k) => write!(f, "Keyword({:?})", k),
            TokenKind::Identifier => f.write_str("Identifier"),
            TokenKind::Number => f.write_str("Number"),
            TokenKind::String => f.write_str("String"),
            TokenKind::Error => f.write_str("Error"),
            TokenKind::Eof => f.write_str("EOF"),
        }
    }
}

/// A scanned token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// Token type
    pub kind: TokenKind,
    /// Source text of the token, or the message for error tokens
    pub lexeme: &'src str,
    /// 1-based source line
    pub line: usize,
}

impl<'src> Token<'src> {
    /// Placeholder used before the first token is scanned
    pub(crate) fn synthetic() -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: "",
            line: 1,
        }
    }
}

/// Cypsa lexer
///
/// Scans on demand: each call to [`Lexer::next_token`] produces exactly one
/// token. Once the end of input is reached every further call returns an
/// [`TokenKind::Eof`] token.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            finished: false,
        }
    }

    /// Get the next token from the source
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace_and_comments();
        self.start = self.current;

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let c = self.advance();
        if is_alpha(c) {
            return self.scan_identifier();
        }
        if c.is_ascii_digit() {
            return self.scan_number();
        }

        let punctuator = match c {
            b'(' => Punctuator::LParen,
            b')' => Punctuator::RParen,
            b'{' => Punctuator::LBrace,
            b'}' => Punctuator::RBrace,
            b';' => Punctuator::Semicolon,
            b',' => Punctuator::Comma,
            b'.' => Punctuator::Dot,
            b'-' => Punctuator::Minus,
            b'+' => Punctuator::Plus,
            b'/' => Punctuator::Slash,
            b'*' => Punctuator::Star,
            b'!' if self.match_byte(b'=') => Punctuator::BangEq,
            b'!' => Punctuator::Bang,
            b'=' if self.match_byte(b'=') => Punctuator::EqEq,
            b'=' => Punctuator::Assign,
            b'<' if self.match_byte(b'=') => Punctuator::LtEq,
            b'<' => Punctuator::Lt,
            b'>' if self.match_byte(b'=') => Punctuator::GtEq,
            b'>' => Punctuator::Gt,
            b'"' => return self.scan_string(),
            _ => {
                self.finish_char();
                return self.error_token("Unexpected character.");
            }
        };
        self.make_token(TokenKind::Punctuator(punctuator))
    }

    fn scan_identifier(&mut self) -> Token<'src> {
        while is_alpha(self.peek()) || self.peek().is_ascii_digit() {
            self.advance();
        }

        let kind = match Keyword::lookup(self.lexeme()) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };
        self.make_token(kind)
    }

    fn scan_number(&mut self) -> Token<'src> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A fractional part needs at least one digit after the dot
        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    fn scan_string(&mut self) -> Token<'src> {
        let start_line = self.line;
        while !self.is_at_end() && self.peek() != b'"' {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Token {
                kind: TokenKind::Error,
                lexeme: "Unterminated string.",
                line: start_line,
            };
        }

        // Closing quote
        self.advance();
        self.make_token(TokenKind::String)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                b' ' | b'\r' | b'\t' => {
                    self.advance();
                }
                b'\n' => {
                    self.line += 1;
                    self.advance();
                }
                b'/' if self.peek_next() == b'/' => {
                    while !self.is_at_end() && self.peek() != b'\n' {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Consume the continuation bytes of a multi-byte UTF-8 character.
    fn finish_char(&mut self) {
        while !self.source.is_char_boundary(self.current) {
            self.current += 1;
        }
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token {
            kind,
            lexeme: self.lexeme(),
            line: self.line,
        }
    }

    fn error_token(&self, message: &'static str) -> Token<'src> {
        Token {
            kind: TokenKind::Error,
            lexeme: message,
            line: self.line,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.current).copied().unwrap_or(b'\0')
    }

    fn peek_next(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.current + 1)
            .copied()
            .unwrap_or(b'\0')
    }

    fn advance(&mut self) -> u8 {
        let byte = self.peek();
        self.current += 1;
        byte
    }

    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.peek() != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }
}

/// Yields every token up to and including a single end-of-input token.
impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
