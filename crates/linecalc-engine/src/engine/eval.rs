//! Arithmetic expression parsing and evaluation.
//!
//! The grammar is deliberately small:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := power (('*' | '/') power)*
//! power   := unary ('^' power)?
//! unary   := ('-' | '+') unary | primary
//! primary := NUMBER | IDENT | '(' expr ')'
//! ```
//!
//! Unary minus binds tighter than `^`, so `-2 ^ 2` is `4`. `^` is
//! right-associative. Parsing produces an [`Expr`] tree which is then
//! evaluated against a borrowed [`Environment`].

use super::env::Environment;
use super::error::{CalcError, Result};

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Op(char),
    LParen,
    RParen,
}

/// Parsed arithmetic expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Var(String),
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

fn tokenize(src: &str) -> Result<Vec<(Token, usize)>> {
    let mut out = Vec::new();
    let mut chars = src.char_indices().peekable();
    while let Some((pos, ch)) = chars.next() {
        let column = pos + 1;
        match ch {
            c if c.is_whitespace() => {}
            '0'..='9' | '.' => {
                let mut buf = String::from(ch);
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        buf.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = buf
                    .parse()
                    .map_err(|_| CalcError::syntax(column, format!("invalid number '{}'", buf)))?;
                out.push((Token::Number(value), column));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut buf = String::from(c);
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        buf.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                out.push((Token::Ident(buf), column));
            }
            '+' | '-' | '*' | '/' | '^' => out.push((Token::Op(ch), column)),
            '(' => out.push((Token::LParen, column)),
            ')' => out.push((Token::RParen, column)),
            other => {
                return Err(CalcError::syntax(
                    column,
                    format!("unexpected character '{}'", other),
                ));
            }
        }
    }
    Ok(out)
}

/// Maximum nesting of parentheses and unary operators.
const MAX_DEPTH: usize = 256;
/// Maximum number of tokens in one expression.
const MAX_TOKENS: usize = 4096;

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
    end_column: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn column(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(_, c)| *c)
            .unwrap_or(self.end_column)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat_op(&mut self, ops: &[char]) -> Option<char> {
        match self.peek() {
            Some(Token::Op(op)) if ops.contains(op) => {
                let op = *op;
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<Expr> {
        let mut lhs = self.term()?;
        while let Some(op) = self.eat_op(&['+', '-']) {
            let rhs = self.term()?;
            let op = if op == '+' { BinOp::Add } else { BinOp::Sub };
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr> {
        let mut lhs = self.power()?;
        while let Some(op) = self.eat_op(&['*', '/']) {
            let rhs = self.power()?;
            let op = if op == '*' { BinOp::Mul } else { BinOp::Div };
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn power(&mut self) -> Result<Expr> {
        let base = self.unary()?;
        if self.eat_op(&['^']).is_some() {
            let exponent = self.power()?;
            return Ok(Expr::Binary(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn unary(&mut self) -> Result<Expr> {
        if self.depth >= MAX_DEPTH {
            return Err(CalcError::syntax(self.column(), "expression nested too deeply"));
        }
        self.depth += 1;
        let out = match self.eat_op(&['-', '+']) {
            Some('-') => self.unary().map(|e| Expr::Neg(Box::new(e))),
            Some(_) => self.unary(),
            None => self.primary(),
        };
        self.depth -= 1;
        out
    }

    fn primary(&mut self) -> Result<Expr> {
        let column = self.column();
        match self.next() {
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(Token::Ident(name)) => Ok(Expr::Var(name)),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(CalcError::syntax(column, "unclosed '('")),
                }
            }
            Some(Token::RParen) => Err(CalcError::syntax(column, "unexpected ')'")),
            Some(Token::Op(op)) => Err(CalcError::syntax(
                column,
                format!("expected operand, found '{}'", op),
            )),
            None => Err(CalcError::syntax(column, "expected operand")),
        }
    }
}

/// Parse an expression into an [`Expr`] tree.
pub fn parse_expression(src: &str) -> Result<Expr> {
    let tokens = tokenize(src)?;
    if tokens.len() > MAX_TOKENS {
        return Err(CalcError::syntax(
            1,
            format!("expression exceeds the limit of {} tokens", MAX_TOKENS),
        ));
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        end_column: src.len() + 1,
    };
    let expr = parser.expr()?;
    if parser.peek().is_some() {
        return Err(CalcError::syntax(parser.column(), "unexpected trailing input"));
    }
    Ok(expr)
}

impl Expr {
    /// Evaluate against `env`. Non-finite results are reported as
    /// [`CalcError::Undefined`].
    pub fn eval(&self, env: &Environment) -> Result<f64> {
        let value = match self {
            Expr::Number(n) => *n,
            Expr::Var(name) => env
                .get(name)
                .ok_or_else(|| CalcError::UnboundIdentifier(name.clone()))?,
            Expr::Neg(inner) => -inner.eval(env)?,
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.eval(env)?;
                let b = rhs.eval(env)?;
                match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => {
                        if b == 0.0 {
                            return Err(CalcError::DivisionByZero);
                        }
                        a / b
                    }
                    BinOp::Pow => a.powf(b),
                }
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::Undefined)
        }
    }
}

/// Parse and evaluate `src` in one step.
pub fn evaluate(src: &str, env: &Environment) -> Result<f64> {
    parse_expression(src)?.eval(env)
}
