//! The term and proposition data model.
//!
//! A [`Term`] is one of four shapes: a logic variable, a constant atom, a
//! unary application of a named functor, or a list cell. Multi-argument
//! predicate applications are not a fifth shape — they are written as a
//! `Cons` list terminated by `nil`, the same encoding ordinary list terms
//! use, so that `AtomicProp`'s `(predicate_name, term)` pair stays a true
//! pair at every arity.

use std::fmt;

use crate::variable::Variable;

/// The atom that terminates every list.
pub const NIL: &str = "nil";

/// A term: variable, atom, unary application, or list cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Var(Variable),
    Atom(String),
    App { functor: String, arg: Box<Term> },
    Cons(Box<Term>, Box<Term>),
}

impl Term {
    pub fn var(name: &str, id: i64) -> Term {
        Term::Var(Variable::new(name, id))
    }

    pub fn atom(name: &str) -> Term {
        Term::Atom(name.to_string())
    }

    pub fn nil() -> Term {
        Term::Atom(NIL.to_string())
    }

    pub fn app(functor: &str, arg: Term) -> Term {
        Term::App { functor: functor.to_string(), arg: Box::new(arg) }
    }

    pub fn cons(head: Term, tail: Term) -> Term {
        Term::Cons(Box::new(head), Box::new(tail))
    }

    /// Builds a proper list `[items[0], items[1], ..., nil]`.
    pub fn list(items: Vec<Term>) -> Term {
        let mut out = Term::nil();
        for item in items.into_iter().rev() {
            out = Term::cons(item, out);
        }
        out
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Term::Atom(name) if name == NIL)
    }

    /// In-order traversal of the variables occurring in this term,
    /// left-to-right, duplicates included.
    pub fn vars(&self) -> Vec<Variable> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut Vec<Variable>) {
        match self {
            Term::Var(v) => out.push(v.clone()),
            Term::Atom(_) => {}
            Term::App { arg, .. } => arg.collect_vars(out),
            Term::Cons(head, tail) => {
                head.collect_vars(out);
                tail.collect_vars(out);
            }
        }
    }

    /// Structural copy with every variable's id replaced by `id`.
    pub fn with_fresh_id(&self, id: i64) -> Term {
        match self {
            Term::Var(v) => Term::Var(v.with_id(id)),
            Term::Atom(a) => Term::Atom(a.clone()),
            Term::App { functor, arg } => {
                Term::App { functor: functor.clone(), arg: Box::new(arg.with_fresh_id(id)) }
            }
            Term::Cons(head, tail) => {
                Term::Cons(Box::new(head.with_fresh_id(id)), Box::new(tail.with_fresh_id(id)))
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "${}", v.name),
            Term::Atom(a) => write!(f, "{}", a),
            Term::App { functor, arg } => write!(f, "{}({})", functor, arg),
            Term::Cons(..) => {
                write!(f, "[")?;
                let mut first = true;
                let mut current = self;
                loop {
                    match current {
                        Term::Cons(head, tail) => {
                            if !first { write!(f, ", ")?; }
                            write!(f, "{}", head)?;
                            first = false;
                            current = tail;
                        }
                        Term::Atom(a) if a == NIL => break,
                        other => {
                            write!(f, " | {}", other)?;
                            break;
                        }
                    }
                }
                write!(f, "]")
            }
        }
    }
}
