//! Depth-first proof search with cut.
//!
//! The prover is exposed as a pull-driven iterator, the Rust stand-in for
//! the mutually recursive generator the design calls for: there is no
//! native coroutine to reach for, so each goal shape gets its own small
//! state machine (`RuleIter`, `ConjIter`) that remembers exactly "which
//! rule comes next" or "which conjunct is still being proved", and hands
//! control back to the caller after every successful leaf.
//!
//! Every yielded item is `(Env, cut_flag)`. `cut_flag` is a control signal,
//! not a property of the binding: `true` means the `!` built-in fired while
//! producing this result. [`RuleIter`] masks the flag back to `false` at
//! the rule boundary (cuts do not propagate past the rule whose body
//! contained them) but still uses the unmasked value internally to decide
//! whether to keep trying alternatives.

use crate::environment::Env;
use crate::knowledge_base::KnowledgeBase;
use crate::proposition::{AtomicProp, Proposition};
use crate::rule::Rule;
use crate::term::Term;

/// Proves `goal` under `env` and `kb`, lazily yielding `(env, cut_flag)`.
pub fn prove(goal: Proposition, env: Env, kb: KnowledgeBase) -> Box<dyn Iterator<Item = (Env, bool)>> {
    match goal {
        Proposition::Atomic(atomic) => prove_atomic(atomic, env, kb),
        Proposition::Conj(left, right) => prove_conj(*left, *right, env, kb),
    }
}

fn prove_atomic(atomic: AtomicProp, env: Env, kb: KnowledgeBase) -> Box<dyn Iterator<Item = (Env, bool)>> {
    if atomic.is_cut() {
        return Box::new(std::iter::once((env, true)));
    }
    if atomic.is_true() {
        return Box::new(std::iter::once((env, false)));
    }
    let rules = kb.rules(&atomic.pred);
    Box::new(RuleIter { rules, index: 0, term: atomic.term, env, kb, current: None, stopped: false })
}

/// Tries each candidate rule for one predicate in insertion order.
struct RuleIter {
    rules: Vec<Rule>,
    index: usize,
    term: Term,
    env: Env,
    kb: KnowledgeBase,
    current: Option<Box<dyn Iterator<Item = (Env, bool)>>>,
    stopped: bool,
}

impl Iterator for RuleIter {
    type Item = (Env, bool);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.stopped {
                return None;
            }
            if let Some(sub) = self.current.as_mut() {
                match sub.next() {
                    Some((env2, cut)) => {
                        if cut {
                            self.stopped = true;
                        }
                        return Some((env2, false)); // masked at the rule boundary
                    }
                    None => {
                        self.current = None;
                        continue;
                    }
                }
            }
            if self.index >= self.rules.len() {
                return None;
            }
            let rule = self.rules[self.index].refresh();
            self.index += 1;
            match self.env.unify(&self.term, &rule.head.term) {
                None => continue,
                Some(env1) => match rule.goal {
                    None => return Some((env1, false)),
                    Some(goal) => {
                        self.current = Some(prove(goal, env1, self.kb.clone()));
                        continue;
                    }
                },
            }
        }
    }
}

/// Proves a conjunction: for each result of the left conjunct, proves the
/// right conjunct under the resulting bindings, bubbling the disjunction of
/// both cut flags.
fn prove_conj(left: Proposition, right: Proposition, env: Env, kb: KnowledgeBase) -> Box<dyn Iterator<Item = (Env, bool)>> {
    Box::new(ConjIter {
        left_iter: prove(left, env, kb.clone()),
        right,
        kb,
        right_iter: None,
        left_cut: false,
    })
}

struct ConjIter {
    left_iter: Box<dyn Iterator<Item = (Env, bool)>>,
    right: Proposition,
    kb: KnowledgeBase,
    right_iter: Option<Box<dyn Iterator<Item = (Env, bool)>>>,
    left_cut: bool,
}

impl Iterator for ConjIter {
    type Item = (Env, bool);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(r_iter) = self.right_iter.as_mut() {
                match r_iter.next() {
                    Some((env2, c2)) => return Some((env2, self.left_cut || c2)),
                    None => {
                        self.right_iter = None;
                        continue;
                    }
                }
            }
            match self.left_iter.next() {
                None => return None,
                Some((env1, c1)) => {
                    self.left_cut = c1;
                    self.right_iter = Some(prove(self.right.clone(), env1, self.kb.clone()));
                    continue;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::variable::clear_id;

    fn syllogism_kb() -> KnowledgeBase {
        let mortal = Rule::with_goal(
            AtomicProp::new("mortal", Term::var("X", -1)),
            Proposition::Atomic(AtomicProp::new("human", Term::var("X", -1))),
        );
        KnowledgeBase::empty()
            .assume(mortal)
            .assume(Rule::fact(AtomicProp::new("human", Term::atom("socrates"))))
            .assume(Rule::fact(AtomicProp::new("human", Term::atom("plato"))))
    }

    #[test]
    fn test_syllogism_ground_query() {
        clear_id();
        let kb = syllogism_kb();
        let goal = Proposition::Atomic(AtomicProp::new("mortal", Term::atom("socrates"))).refresh();
        let mut results = prove(goal, Env::empty(), kb);
        assert!(results.next().is_some());
        assert!(results.next().is_none());
    }

    #[test]
    fn test_syllogism_multiple_solutions_in_rule_order() {
        clear_id();
        let kb = syllogism_kb();
        let x = Term::var("X", -1);
        let goal = Proposition::Atomic(AtomicProp::new("mortal", x.clone())).refresh();
        let renamed_x = goal.vars()[0].clone();
        let mut results = prove(goal, Env::empty(), kb);

        let (env1, _) = results.next().expect("first solution");
        assert_eq!(env1.substitute(&Term::Var(renamed_x.clone())), Term::atom("socrates"));

        let (env2, _) = results.next().expect("second solution");
        assert_eq!(env2.substitute(&Term::Var(renamed_x)), Term::atom("plato"));

        assert!(results.next().is_none());
    }

    #[test]
    fn test_unbound_projection() {
        clear_id();
        let kb = KnowledgeBase::empty()
            .assume(Rule::fact(AtomicProp::new("unknown", Term::var("X", -1))))
            .assume(Rule::fact(AtomicProp::new("unknown", Term::atom("a"))));
        let goal = Proposition::Atomic(AtomicProp::new("unknown", Term::var("Y", -1))).refresh();
        let y = goal.vars()[0].clone();
        let mut results = prove(goal, Env::empty(), kb);

        let (env1, _) = results.next().expect("first solution");
        assert_eq!(env1.substitute(&Term::Var(y.clone())), Term::Var(y.clone()));

        let (env2, _) = results.next().expect("second solution");
        assert_eq!(env2.substitute(&Term::Var(y)), Term::atom("a"));

        assert!(results.next().is_none());
    }

    #[test]
    fn test_cut_prunes_alternatives() {
        // p :- !, q.   p :- r.   q.   r.
        clear_id();
        let p_via_q = Rule::with_goal(
            AtomicProp::nullary("p"),
            Proposition::conj(
                Proposition::Atomic(AtomicProp::nullary("!")),
                Proposition::Atomic(AtomicProp::nullary("q")),
            ),
        );
        let p_via_r = Rule::with_goal(AtomicProp::nullary("p"), Proposition::Atomic(AtomicProp::nullary("r")));
        let kb = KnowledgeBase::empty()
            .assume(p_via_q)
            .assume(p_via_r)
            .assume(Rule::fact(AtomicProp::nullary("q")))
            .assume(Rule::fact(AtomicProp::nullary("r")));

        let goal = Proposition::Atomic(AtomicProp::nullary("p")).refresh();
        let mut results = prove(goal, Env::empty(), kb);
        assert!(results.next().is_some(), "the q branch must succeed");
        assert!(results.next().is_none(), "the r branch must never be tried");
    }

    #[test]
    fn test_cut_does_not_escape_its_rule() {
        // p :- !, q.   p :- r.   q.   r.
        // outer :- p.   outer :- s.   s.
        //
        // outer's *caller* must still see both of outer's own clauses: the
        // cut inside p's first rule commits p to its own q-branch (as
        // test_cut_prunes_alternatives already checks), but that commitment
        // must not reach past p's rule boundary and suppress outer's second
        // clause, even though outer's first clause is the one that invoked
        // p.
        clear_id();
        let p_via_q = Rule::with_goal(
            AtomicProp::nullary("p"),
            Proposition::conj(
                Proposition::Atomic(AtomicProp::nullary("!")),
                Proposition::Atomic(AtomicProp::nullary("q")),
            ),
        );
        let p_via_r = Rule::with_goal(AtomicProp::nullary("p"), Proposition::Atomic(AtomicProp::nullary("r")));
        let outer_via_p = Rule::with_goal(AtomicProp::nullary("outer"), Proposition::Atomic(AtomicProp::nullary("p")));
        let outer_via_s = Rule::with_goal(AtomicProp::nullary("outer"), Proposition::Atomic(AtomicProp::nullary("s")));
        let kb = KnowledgeBase::empty()
            .assume(p_via_q)
            .assume(p_via_r)
            .assume(Rule::fact(AtomicProp::nullary("q")))
            .assume(Rule::fact(AtomicProp::nullary("r")))
            .assume(outer_via_p)
            .assume(outer_via_s)
            .assume(Rule::fact(AtomicProp::nullary("s")));

        let goal = Proposition::Atomic(AtomicProp::nullary("outer")).refresh();
        let mut results = prove(goal, Env::empty(), kb);
        assert!(results.next().is_some(), "outer's first clause, via p's q-branch, must succeed");
        assert!(
            results.next().is_some(),
            "outer's second clause must still be tried; the cut inside p must not escape p's rule"
        );
        assert!(results.next().is_none());
    }
}
