//! Propositions: atomic predicate applications and conjunctions.

use std::fmt;

use crate::term::Term;
use crate::variable::{fresh_id, Variable};

/// Predicate name of the cut built-in.
pub const CUT: &str = "!";
/// Predicate name of the always-true built-in.
pub const TRUE: &str = "true";

/// A predicate application: a predicate name paired with its argument term.
///
/// Arity-0 predicates (including the two built-ins) carry `nil` as their
/// term; arity-1 predicates carry the bare argument; arity-`n` predicates
/// (`n >= 2`) carry a `Cons`-list of their arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicProp {
    pub pred: String,
    pub term: Term,
}

impl AtomicProp {
    pub fn new(pred: &str, term: Term) -> Self {
        AtomicProp { pred: pred.to_string(), term }
    }

    /// A nullary atomic proposition, e.g. `true` or a user fact like `run`.
    pub fn nullary(pred: &str) -> Self {
        AtomicProp { pred: pred.to_string(), term: Term::nil() }
    }

    pub fn is_cut(&self) -> bool {
        self.pred == CUT && self.term.is_nil()
    }

    pub fn is_true(&self) -> bool {
        self.pred == TRUE && self.term.is_nil()
    }

    fn with_fresh_id(&self, id: i64) -> AtomicProp {
        AtomicProp { pred: self.pred.clone(), term: self.term.with_fresh_id(id) }
    }
}

impl fmt::Display for AtomicProp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.term.is_nil() {
            write!(f, "{}", self.pred)
        } else {
            write!(f, "{}{}", self.pred, display_args(&self.term))
        }
    }
}

/// Renders a proposition's term as a parenthesized argument list when it is
/// a `Cons` spine, or as a single parenthesized argument otherwise.
fn display_args(term: &Term) -> String {
    match term {
        Term::Cons(..) => {
            let mut args = Vec::new();
            let mut current = term;
            loop {
                match current {
                    Term::Cons(head, tail) => {
                        args.push(head.to_string());
                        current = tail;
                    }
                    _ => break,
                }
            }
            format!("({})", args.join(", "))
        }
        other => format!("({})", other),
    }
}

/// A proposition: an atomic predicate application, or a conjunction of two
/// propositions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Proposition {
    Atomic(AtomicProp),
    Conj(Box<Proposition>, Box<Proposition>),
}

impl Proposition {
    pub fn conj(left: Proposition, right: Proposition) -> Proposition {
        Proposition::Conj(Box::new(left), Box::new(right))
    }

    /// Builds a right-associated conjunction from a non-empty sequence of
    /// atomic propositions.
    pub fn conjunction(mut atoms: Vec<AtomicProp>) -> Proposition {
        let last = atoms.pop().expect("conjunction() requires at least one atom");
        atoms.into_iter().rev().fold(Proposition::Atomic(last), |acc, atom| {
            Proposition::conj(Proposition::Atomic(atom), acc)
        })
    }

    pub fn vars(&self) -> Vec<Variable> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut Vec<Variable>) {
        match self {
            Proposition::Atomic(a) => out.extend(a.term.vars()),
            Proposition::Conj(l, r) => {
                l.collect_vars(out);
                r.collect_vars(out);
            }
        }
    }

    pub fn with_fresh_id(&self, id: i64) -> Proposition {
        match self {
            Proposition::Atomic(a) => Proposition::Atomic(a.with_fresh_id(id)),
            Proposition::Conj(l, r) => {
                Proposition::Conj(Box::new(l.with_fresh_id(id)), Box::new(r.with_fresh_id(id)))
            }
        }
    }

    /// Allocates one fresh id and applies it to every variable in this
    /// proposition, so that one rule instantiation's variables stay
    /// coreferent while remaining disjoint from every other instantiation.
    pub fn refresh(&self) -> Proposition {
        self.with_fresh_id(fresh_id())
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Proposition::Atomic(a) => write!(f, "{}", a),
            Proposition::Conj(l, r) => write!(f, "{}, {}", l, r),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_cut_and_true() {
        let cut = AtomicProp::nullary(CUT);
        let tru = AtomicProp::nullary(TRUE);
        assert!(cut.is_cut());
        assert!(tru.is_true());
        assert!(!cut.is_true());
    }

    #[test]
    fn test_display_atomic_prop() {
        let p = AtomicProp::new("mortal", Term::var("X", -1));
        assert_eq!(p.to_string(), "mortal($X)");
        let nullary = AtomicProp::nullary("run");
        assert_eq!(nullary.to_string(), "run");
    }

    #[test]
    fn test_display_multi_arg() {
        let args = Term::list(vec![Term::var("X", -1), Term::var("Y", -1)]);
        let p = AtomicProp::new("loves", args);
        assert_eq!(p.to_string(), "loves($X, $Y)");
    }

    #[test]
    fn test_conjunction_vars_left_to_right() {
        let p1 = AtomicProp::new("q", Term::var("X", -1));
        let p2 = AtomicProp::new("r", Term::var("Y", -1));
        let p3 = AtomicProp::new("s", Term::var("X", -1));
        let conj = Proposition::conjunction(vec![p1, p2, p3]);
        let names: Vec<String> = conj.vars().iter().map(|v| v.name.clone()).collect();
        assert_eq!(names, vec!["X", "Y", "X"]);
    }

    #[test]
    fn test_refresh_renames_consistently() {
        let p1 = AtomicProp::new("q", Term::var("X", -1));
        let p2 = AtomicProp::new("r", Term::var("X", -1));
        let conj = Proposition::conj(Proposition::Atomic(p1), Proposition::Atomic(p2));
        let renamed = conj.refresh();
        let ids: Vec<i64> = renamed.vars().iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], ids[1], "same rule instantiation must share one id");
    }
}
