//! Recursive-descent parsing of terms, propositions, rules and queries
//! from the token stream [`tokenizer::tokenize`](crate::tokenizer::tokenize)
//! produces.
//!
//! Grammar (informal):
//!
//! <pre>
//! term       ::= VAR | ATOM ( "(" arglist ")" )? | list
//! list       ::= "[" "]" | "[" terms ( "|" term )? "]"
//! arglist    ::= term ( "," term )*
//! atomic     ::= ATOM ( "(" arglist ")" )?
//! proposition ::= atomic ( "," atomic )*
//! rule       ::= atomic ( ":-" proposition )?
//! </pre>

use crate::proposition::{AtomicProp, Proposition};
use crate::rule::Rule;
use crate::term::Term;
use crate::token::Token;
use crate::tokenizer::tokenize;
use crate::variable::FRESH_SENTINEL;

/// A statement the parser hands to the core: either a rule to ingest, or a
/// proposition to prove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Rule(Rule),
    Query(Proposition),
}

/// Builds the `Term` for a functor application of any arity, using the
/// same arity-dependent encoding as [`build_atomic`]: nil for arity 0, the
/// bare argument for arity 1, a `Cons`-list for arity >= 2.
fn build_app(functor: &str, args: Vec<Term>) -> Term {
    match args.len() {
        0 => Term::app(functor, Term::nil()),
        1 => Term::app(functor, args.into_iter().next().unwrap()),
        _ => Term::app(functor, Term::list(args)),
    }
}

fn build_atomic(pred: &str, args: Vec<Term>) -> AtomicProp {
    match args.len() {
        0 => AtomicProp::nullary(pred),
        1 => AtomicProp::new(pred, args.into_iter().next().unwrap()),
        _ => AtomicProp::new(pred, Term::list(args)),
    }
}

struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        tok
    }

    fn expect(&mut self, expected: &Token) -> Result<(), String> {
        match self.advance() {
            Some(ref tok) if tok == expected => Ok(()),
            Some(tok) => Err(format!("expected '{}', found '{}'", expected, tok)),
            None => Err(format!("expected '{}', found end of input", expected)),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn parse_term(&mut self) -> Result<Term, String> {
        match self.advance() {
            Some(Token::Var(name)) => Ok(Term::var(&name, FRESH_SENTINEL)),
            Some(Token::Atom(name)) => {
                if self.peek() == Some(&Token::LParen) {
                    self.advance();
                    let args = self.parse_arg_list()?;
                    self.expect(&Token::RParen)?;
                    Ok(build_app(&name, args))
                } else {
                    Ok(Term::atom(&name))
                }
            }
            Some(Token::LBracket) => self.parse_list(),
            Some(other) => Err(format!("parse_term() - unexpected token: {}", other)),
            None => Err("parse_term() - unexpected end of input".to_string()),
        }
    }

    /// Comma-separated terms, stopping before the first token that is not
    /// a comma (typically `)`).
    fn parse_arg_list(&mut self) -> Result<Vec<Term>, String> {
        let mut args = vec![self.parse_term()?];
        while self.peek() == Some(&Token::Comma) {
            self.advance();
            args.push(self.parse_term()?);
        }
        Ok(args)
    }

    /// Parses the contents of a list after `[` has already been consumed.
    fn parse_list(&mut self) -> Result<Term, String> {
        if self.peek() == Some(&Token::RBracket) {
            self.advance();
            return Ok(Term::nil());
        }

        let mut items = vec![self.parse_term()?];
        while self.peek() == Some(&Token::Comma) {
            self.advance();
            items.push(self.parse_term()?);
        }

        let tail = if self.peek() == Some(&Token::Pipe) {
            self.advance();
            self.parse_term()?
        } else {
            Term::nil()
        };

        self.expect(&Token::RBracket)?;

        let mut list = tail;
        for item in items.into_iter().rev() {
            list = Term::cons(item, list);
        }
        Ok(list)
    }

    fn parse_atomic_prop(&mut self) -> Result<AtomicProp, String> {
        match self.advance() {
            Some(Token::Atom(name)) => {
                if self.peek() == Some(&Token::LParen) {
                    self.advance();
                    let args = self.parse_arg_list()?;
                    self.expect(&Token::RParen)?;
                    Ok(build_atomic(&name, args))
                } else {
                    Ok(AtomicProp::nullary(&name))
                }
            }
            Some(other) => Err(format!("parse_atomic_prop() - expected a predicate name, found: {}", other)),
            None => Err("parse_atomic_prop() - unexpected end of input".to_string()),
        }
    }

    fn parse_proposition(&mut self) -> Result<Proposition, String> {
        let mut atoms = vec![self.parse_atomic_prop()?];
        while self.peek() == Some(&Token::Comma) {
            self.advance();
            atoms.push(self.parse_atomic_prop()?);
        }
        Ok(Proposition::conjunction(atoms))
    }
}

fn stream(text: &str) -> Result<TokenStream, String> {
    Ok(TokenStream { tokens: tokenize(text)?, pos: 0 })
}

/// Parses a single term, e.g. `f(socrates)` or `[$H | $T]`.
pub fn parse_term(text: &str) -> Result<Term, String> {
    let mut s = stream(text)?;
    let term = s.parse_term()?;
    if !s.at_end() {
        return Err(format!("parse_term() - unexpected trailing input: {}", text));
    }
    Ok(term)
}

/// Parses a single atomic proposition, e.g. `mortal($X)`.
pub fn parse_atomic_prop(text: &str) -> Result<AtomicProp, String> {
    let mut s = stream(text)?;
    let prop = s.parse_atomic_prop()?;
    if !s.at_end() {
        return Err(format!("parse_atomic_prop() - unexpected trailing input: {}", text));
    }
    Ok(prop)
}

/// Parses a comma-separated conjunction of atomic propositions.
pub fn parse_proposition(text: &str) -> Result<Proposition, String> {
    let mut s = stream(text)?;
    let prop = s.parse_proposition()?;
    if !s.at_end() {
        return Err(format!("parse_proposition() - unexpected trailing input: {}", text));
    }
    Ok(prop)
}

/// Parses `head` or `head :- goal`, without a trailing period.
pub fn parse_rule_text(text: &str) -> Result<Rule, String> {
    let mut s = stream(text)?;
    let head = s.parse_atomic_prop()?;
    if s.at_end() {
        return Ok(Rule::fact(head));
    }
    s.expect(&Token::Neck)?;
    let goal = s.parse_proposition()?;
    if !s.at_end() {
        return Err(format!("parse_rule_text() - unexpected trailing input: {}", text));
    }
    Ok(Rule::with_goal(head, goal))
}

/// Parses one line of REPL input into a [`Statement`].
///
/// A line ending in `.` is a rule or fact to ingest; anything else is a
/// query to prove. This is the one syntactic cue that tells the two apart,
/// since both share the same head grammar.
pub fn parse_statement(text: &str) -> Result<Statement, String> {
    let trimmed = text.trim();
    if let Some(body) = trimmed.strip_suffix('.') {
        parse_rule_text(body).map(Statement::Rule)
    } else {
        parse_proposition(trimmed).map(Statement::Query)
    }
}
