//! End-to-end tests of the resolver, built from source text the way a
//! user program actually exercises it, rather than by hand-assembling
//! terms in Rust.

use horn::{parse_rule_text, query, AtomicProp, KnowledgeBase, Proposition, Term};

fn assume(kb: KnowledgeBase, text: &str) -> KnowledgeBase {
    kb.assume(parse_rule_text(text).unwrap())
}

#[test]
fn test_classical_syllogism() {
    let kb = KnowledgeBase::empty();
    let kb = assume(kb, "human(socrates)");
    let kb = assume(kb, "mortal($X) :- human($X)");

    let ground = Proposition::Atomic(AtomicProp::new("mortal", Term::atom("socrates")));
    let mut solutions = query(ground, kb.clone());
    assert!(solutions.next().unwrap().bindings.is_empty());
    assert!(solutions.next().is_none());

    let open = Proposition::Atomic(AtomicProp::new("mortal", Term::var("X", -1)));
    let mut solutions = query(open, kb);
    let s = solutions.next().unwrap();
    assert_eq!(s.to_string(), "$X = socrates");
    assert!(solutions.next().is_none());
}

#[test]
fn test_multiple_solutions_in_rule_order() {
    let kb = KnowledgeBase::empty();
    let kb = assume(kb, "mortal($X) :- human($X)");
    let kb = assume(kb, "human(socrates)");
    let kb = assume(kb, "human(plato)");

    let query_prop = Proposition::Atomic(AtomicProp::new("mortal", Term::var("X", -1)));
    let solutions: Vec<String> = query(query_prop, kb).map(|s| s.to_string()).collect();
    assert_eq!(solutions, vec!["$X = socrates", "$X = plato"]);
}

#[test]
fn test_unbound_projection() {
    let kb = KnowledgeBase::empty();
    let kb = assume(kb, "unknown($X)");
    let kb = assume(kb, "unknown(a)");

    let query_prop = Proposition::Atomic(AtomicProp::new("unknown", Term::var("Y", -1)));
    let solutions: Vec<String> = query(query_prop, kb).map(|s| s.to_string()).collect();
    assert_eq!(solutions, vec!["$Y unbound", "$Y = a"]);
}

#[test]
fn test_list_unification_via_unify_in_environment() {
    use horn::Env;

    let x = Term::var("X", 1);
    let y = Term::var("Y", 2);
    let left = Term::list(vec![x.clone(), Term::atom("plato")]);
    let right = Term::list(vec![Term::atom("socrates"), y.clone()]);
    let env = Env::empty().unify(&left, &right).unwrap();
    assert_eq!(env.substitute(&Term::list(vec![x, y])), Term::list(vec![Term::atom("socrates"), Term::atom("plato")]));
}

#[test]
fn test_nested_application_unification() {
    use horn::Env;

    let x = Term::var("X", 1);
    let env = Env::empty().unify(&Term::app("f", x.clone()), &Term::app("f", Term::atom("socrates"))).unwrap();
    assert_eq!(env.substitute(&x), Term::atom("socrates"));
}

#[test]
fn test_cut_prunes_alternatives() {
    let kb = KnowledgeBase::empty();
    let kb = assume(kb, "p :- !, q");
    let kb = assume(kb, "p :- r");
    let kb = assume(kb, "q");
    let kb = assume(kb, "r");

    let solutions: Vec<_> = query(Proposition::Atomic(AtomicProp::nullary("p")), kb).collect();
    assert_eq!(solutions.len(), 1, "only the first rule's branch should ever fire");
}

#[test]
fn test_backchaining_ancestor() {
    let kb = KnowledgeBase::empty();
    let kb = assume(kb, "parent(charles, tony)");
    let kb = assume(kb, "parent(bill, audrey)");
    let kb = assume(kb, "parent(maria, bill)");
    let kb = assume(kb, "parent(tony, maria)");
    let kb = assume(kb, "ancestor($X, $Y) :- parent($X, $Y)");
    let kb = assume(kb, "ancestor($X, $Y) :- parent($X, $Z), ancestor($Z, $Y)");

    let goal = Proposition::Atomic(AtomicProp::new("ancestor", Term::list(vec![Term::atom("charles"), Term::var("Desc", -1)])));
    let solutions: Vec<String> = query(goal, kb).map(|s| s.to_string()).collect();
    assert_eq!(solutions, vec!["$Desc = tony", "$Desc = maria", "$Desc = bill", "$Desc = audrey"]);
}

#[test]
fn test_unknown_predicate_has_no_solutions_not_an_error() {
    let kb = KnowledgeBase::empty();
    let kb = assume(kb, "human(socrates)");
    let goal = Proposition::Atomic(AtomicProp::new("nonexistent", Term::atom("socrates")));
    assert!(query(goal, kb).next().is_none());
}

#[test]
fn test_list_membership_via_recursive_rule() {
    let kb = KnowledgeBase::empty();
    let kb = assume(kb, "member($X, [$X | $_])");
    let kb = assume(kb, "member($X, [$_ | $T]) :- member($X, $T)");

    let list = Term::list(vec![Term::atom("a"), Term::atom("b"), Term::atom("c")]);
    let goal = Proposition::Atomic(AtomicProp::new("member", Term::list(vec![Term::var("X", -1), list])));
    let solutions: Vec<String> = query(goal, kb).map(|s| s.to_string()).collect();
    assert_eq!(solutions, vec!["$X = a", "$X = b", "$X = c"]);
}
