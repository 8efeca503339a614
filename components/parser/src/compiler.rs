//! Single-pass compiler from Cypsa source to bytecode
//!
//! Parses expressions by precedence climbing and writes instructions into the
//! chunk as soon as each construct is recognised; no syntax tree is built.
//!
//! Errors are handled in panic mode: the first error of a burst is recorded,
//! later ones are suppressed until the compiler resynchronises at the end of
//! the input. Once any error has been recorded nothing more is written to the
//! chunk.

use bytecode_system::{Chunk, Opcode};
use core_types::{CompileError, Diagnostic, ErrorKind, ErrorLocation, Value};
use tracing::{debug, warn};

use crate::lexer::{Lexer, Punctuator, Token, TokenKind};

/// Deepest chain of nested prefix operators and groupings the compiler
/// accepts before reporting an error instead of recursing further.
pub const MAX_NESTING: usize = 1024;

/// Binding strength of operators, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Not an operator
    None,
    /// `==` `!=`
    Equality,
    /// `<` `<=` `>` `>=`
    Comparison,
    /// `+` `-`
    Term,
    /// `*` `/`
    Factor,
    /// Prefix `-`
    Unary,
    /// Literals and grouping
    Primary,
}

impl Precedence {
    /// The next tighter level
    ///
    /// Binary operands are parsed one level up so operators associate left.
    fn next(self) -> Precedence {
        match self {
            Precedence::None => Precedence::Equality,
            Precedence::Equality => Precedence::Comparison,
            Precedence::Comparison => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary | Precedence::Primary => Precedence::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseFn {
    Grouping,
    Unary,
    Number,
    Binary,
    Unsupported,
}

#[derive(Debug, Clone, Copy)]
struct ParseRule {
    prefix: Option<ParseFn>,
    infix: Option<ParseFn>,
    precedence: Precedence,
}

impl ParseRule {
    const fn new(prefix: Option<ParseFn>, infix: Option<ParseFn>, precedence: Precedence) -> Self {
        Self {
            prefix,
            infix,
            precedence,
        }
    }
}

fn rule_for(kind: TokenKind) -> ParseRule {
    use ParseFn::*;

    match kind {
        TokenKind::Punctuator(p) => match p {
            Punctuator::LParen => ParseRule::new(Some(Grouping), None, Precedence::None),
            Punctuator::Minus => ParseRule::new(Some(Unary), Some(Binary), Precedence::Term),
            Punctuator::Plus => ParseRule::new(None, Some(Binary), Precedence::Term),
            Punctuator::Slash | Punctuator::Star => {
                ParseRule::new(None, Some(Binary), Precedence::Factor)
            }
            Punctuator::BangEq | Punctuator::EqEq => {
                ParseRule::new(None, Some(Unsupported), Precedence::Equality)
            }
            Punctuator::Lt | Punctuator::LtEq | Punctuator::Gt | Punctuator::GtEq => {
                ParseRule::new(None, Some(Unsupported), Precedence::Comparison)
            }
            _ => ParseRule::new(None, None, Precedence::None),
        },
        TokenKind::Number => ParseRule::new(Some(Number), None, Precedence::None),
        _ => ParseRule::new(None, None, Precedence::None),
    }
}

/// Token window and error flags for one compilation
#[derive(Debug, Clone, Copy)]
struct ParserState<'src> {
    previous: Token<'src>,
    current: Token<'src>,
    had_error: bool,
    panicking: bool,
}

/// Compiles one source string into a chunk
///
/// # Examples
///
/// ```
/// use bytecode_system::Chunk;
/// use parser::Compiler;
///
/// let mut chunk = Chunk::new();
/// Compiler::new("1 + 2", &mut chunk).compile().unwrap();
/// assert_eq!(chunk.code(), &[0, 0, 0, 1, 3, 7]);
/// ```
pub struct Compiler<'src, 'c> {
    lexer: Lexer<'src>,
    parser: ParserState<'src>,
    chunk: &'c mut Chunk,
    diagnostics: Vec<Diagnostic>,
    depth: usize,
}

impl<'src, 'c> Compiler<'src, 'c> {
    /// Create a compiler that appends to `chunk`
    pub fn new(source: &'src str, chunk: &'c mut Chunk) -> Self {
        Self {
            lexer: Lexer::new(source),
            parser: ParserState {
                previous: Token::synthetic(),
                current: Token::synthetic(),
                had_error: false,
                panicking: false,
            },
            chunk,
            diagnostics: Vec::new(),
            depth: 0,
        }
    }

    /// Compile the whole source as a single expression
    ///
    /// # Returns
    ///
    /// `Ok(())` when no diagnostic was recorded, otherwise every diagnostic
    /// in the order reported. A failed compile leaves no `Return` behind, so
    /// the chunk must not be executed.
    pub fn compile(mut self) -> Result<(), CompileError> {
        debug!(bytes_before = self.chunk.len(), "compile start");

        self.advance();
        self.expression();

        if !self.parser.panicking {
            self.consume(TokenKind::Eof, "Expected end of expression.");
        }
        if self.parser.panicking {
            self.synchronize();
        }

        let line = self.parser.previous.line;
        self.emit_opcode(Opcode::Return, line);

        if self.parser.had_error {
            debug!(errors = self.diagnostics.len(), "compile failed");
            Err(CompileError {
                diagnostics: self.diagnostics,
            })
        } else {
            debug!(
                bytes = self.chunk.len(),
                constants = self.chunk.constants().len(),
                "compile finished"
            );
            Ok(())
        }
    }

    fn expression(&mut self) {
        self.parse_precedence(Precedence::Equality);
    }

    fn parse_precedence(&mut self, precedence: Precedence) {
        if self.depth >= MAX_NESTING {
            self.error("Expression nested too deeply.");
            return;
        }
        self.depth += 1;
        self.parse_operand_and_operators(precedence);
        self.depth -= 1;
    }

    fn parse_operand_and_operators(&mut self, precedence: Precedence) {
        self.advance();
        let Some(prefix) = rule_for(self.parser.previous.kind).prefix else {
            self.error("Expected expression.");
            return;
        };
        self.apply(prefix);

        while precedence <= rule_for(self.parser.current.kind).precedence {
            self.advance();
            if let Some(infix) = rule_for(self.parser.previous.kind).infix {
                self.apply(infix);
            }
        }
    }

    fn apply(&mut self, parse_fn: ParseFn) {
        match parse_fn {
            ParseFn::Grouping => self.grouping(),
            ParseFn::Unary => self.unary(),
            ParseFn::Number => self.number(),
            ParseFn::Binary => self.binary(),
            ParseFn::Unsupported => self.unsupported(),
        }
    }

    fn number(&mut self) {
        let token = self.parser.previous;
        match token.lexeme.parse::<f64>() {
            Ok(number) => self.emit_constant(Value::new(number), token.line),
            Err(_) => self.error("Invalid number literal."),
        }
    }

    fn grouping(&mut self) {
        self.expression();
        self.consume(
            TokenKind::Punctuator(Punctuator::RParen),
            "Expected ')' after expression.",
        );
    }

    fn unary(&mut self) {
        let operator = self.parser.previous;
        self.parse_precedence(Precedence::Unary);

        if operator.kind == TokenKind::Punctuator(Punctuator::Minus) {
            self.emit_opcode(Opcode::Negate, operator.line);
        }
    }

    fn binary(&mut self) {
        let operator = self.parser.previous;
        let rule = rule_for(operator.kind);
        self.parse_precedence(rule.precedence.next());

        let opcode = match operator.kind {
            TokenKind::Punctuator(Punctuator::Plus) => Opcode::Add,
            TokenKind::Punctuator(Punctuator::Minus) => Opcode::Subtract,
            TokenKind::Punctuator(Punctuator::Star) => Opcode::Multiply,
            TokenKind::Punctuator(Punctuator::Slash) => Opcode::Divide,
            _ => return,
        };
        self.emit_opcode(opcode, operator.line);
    }

    /// Equality and comparison operators parse their right operand at the
    /// proper level but have no instruction to compile to.
    fn unsupported(&mut self) {
        let operator = self.parser.previous;
        let message = format!("Operator '{}' is not supported.", operator.lexeme);
        self.error(&message);

        let rule = rule_for(operator.kind);
        self.parse_precedence(rule.precedence.next());
    }

    fn advance(&mut self) {
        self.parser.previous = self.parser.current;
        loop {
            self.parser.current = self.lexer.next_token();
            if self.parser.current.kind != TokenKind::Error {
                break;
            }
            let message = self.parser.current.lexeme;
            self.error_at_current(message);
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) {
        if self.parser.current.kind == kind {
            self.advance();
        } else {
            self.error_at_current(message);
        }
    }

    /// Skip to the end of the input without reporting anything further.
    fn synchronize(&mut self) {
        while self.parser.current.kind != TokenKind::Eof {
            self.advance();
        }
        self.parser.panicking = false;
    }

    fn emit_opcode(&mut self, opcode: Opcode, line: usize) {
        if self.parser.had_error {
            return;
        }
        self.chunk.write_opcode(opcode, line);
    }

    fn emit_constant(&mut self, value: Value, line: usize) {
        if self.parser.had_error {
            return;
        }
        if let Err(full) = self.chunk.write_constant(value, line) {
            self.error(&full.to_string());
        }
    }

    fn error_at_current(&mut self, message: &str) {
        let token = self.parser.current;
        self.error_at(token, message);
    }

    fn error(&mut self, message: &str) {
        let token = self.parser.previous;
        self.error_at(token, message);
    }

    fn error_at(&mut self, token: Token<'src>, message: &str) {
        if self.parser.panicking {
            return;
        }
        self.parser.panicking = true;
        self.parser.had_error = true;

        let (kind, location) = match token.kind {
            TokenKind::Eof => (ErrorKind::SyntaxError, ErrorLocation::End),
            TokenKind::Error => (ErrorKind::LexicalError, ErrorLocation::Unspecified),
            _ => (
                ErrorKind::SyntaxError,
                ErrorLocation::Lexeme(token.lexeme.to_string()),
            ),
        };

        let diagnostic = Diagnostic {
            kind,
            line: token.line,
            location,
            message: message.to_string(),
        };
        warn!(line = token.line, "{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Compile `source` into `chunk`.
///
/// Shorthand for `Compiler::new(source, chunk).compile()`.
pub fn compile(chunk: &mut Chunk, source: &str) -> Result<(), CompileError> {
    Compiler::new(source, chunk).compile()
}
