//! The substitution environment.
//!
//! `Env` is conceptually immutable: every operation that would extend the
//! environment returns a new value, leaving the caller's existing handle
//! untouched. The underlying map is cloned on every `bind`, mirroring a
//! copy-on-write persistent map; callers share structure through `Rc` so
//! that abandoning a branch on backtrack is just dropping a clone.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::term::Term;
use crate::variable::Variable;

#[derive(Debug, Clone, Default)]
pub struct Env {
    bindings: Rc<HashMap<Variable, Rc<Term>>>,
}

impl Env {
    pub fn empty() -> Env {
        Env { bindings: Rc::new(HashMap::new()) }
    }

    /// Direct lookup by `(name, id)`. Does not walk through chains of bound
    /// variables.
    ///
    /// Keying on the whole `Variable` rather than just `id` matters because
    /// `refresh` stamps one shared id onto every variable of a rule
    /// instantiation: `$X` and `$Y` in the same clause body end up with the
    /// same id after renaming, so the name has to be part of the key too,
    /// or they would collide in this map.
    pub fn try_find(&self, v: &Variable) -> Option<Term> {
        self.bindings.get(v).map(|t| (**t).clone())
    }

    /// Extends the environment with `v ↦ t`, unless `t` fully dereferences
    /// to `Var(v)` itself, in which case the environment is returned
    /// unchanged (the no-self-binding invariant).
    ///
    /// Precondition: `v` is currently unbound in `self`.
    pub fn bind(&self, v: &Variable, t: &Term) -> Env {
        let t_prime = self.substitute(t);
        if let Term::Var(bound_to) = &t_prime {
            if bound_to == v {
                return self.clone();
            }
        }
        let mut extended = (*self.bindings).clone();
        extended.insert(v.clone(), Rc::new(t_prime));
        Env { bindings: Rc::new(extended) }
    }

    /// Fully dereferences `t` under the current bindings.
    pub fn substitute(&self, t: &Term) -> Term {
        match t {
            Term::Var(v) => match self.try_find(v) {
                Some(u) => self.substitute(&u),
                None => t.clone(),
            },
            Term::Atom(_) => t.clone(),
            Term::App { functor, arg } => {
                Term::App { functor: functor.clone(), arg: Box::new(self.substitute(arg)) }
            }
            Term::Cons(head, tail) => {
                Term::Cons(Box::new(self.substitute(head)), Box::new(self.substitute(tail)))
            }
        }
    }

    /// Attempts to extend `self` so that `substitute(a)` and `substitute(b)`
    /// become structurally equal. Steadfast: on failure, no extension is
    /// observable anywhere, including through intermediate partial binds,
    /// because each step returns a brand new `Env` and the caller only ever
    /// keeps the final `Option`.
    ///
    /// Case order matters: variable cases are checked before constant-match
    /// cases so that a bound variable is walked transparently rather than
    /// being compared as an opaque value.
    pub fn unify(&self, a: &Term, b: &Term) -> Option<Env> {
        match (a, b) {
            (Term::Var(v), _) => match self.try_find(v) {
                Some(u) => self.unify(b, &u),
                None => Some(self.bind(v, b)),
            },
            (_, Term::Var(v)) => match self.try_find(v) {
                Some(u) => self.unify(a, &u),
                None => Some(self.bind(v, a)),
            },
            (Term::Atom(x), Term::Atom(y)) => {
                if x == y { Some(self.clone()) } else { None }
            }
            (Term::App { functor: f1, arg: a1 }, Term::App { functor: f2, arg: a2 }) => {
                if f1 != f2 { return None; }
                self.unify(a1, a2)
            }
            (Term::Cons(h1, t1), Term::Cons(h2, t2)) => {
                let env1 = self.unify(h1, h2)?;
                env1.unify(t1, t2)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<(&Variable, &Rc<Term>)> = self.bindings.iter().collect();
        entries.sort_by_key(|(v, _)| (v.id, v.name.clone()));
        let rendered: Vec<String> = entries.iter().map(|(v, t)| format!("{} -> {}", v.name, t)).collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}
