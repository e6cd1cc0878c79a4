//! Benchmarking support.
//!
//! Builds a small but genuinely recursive append/3 knowledge base and
//! drives the prover over it, to measure unification, rule-renaming and
//! backtracking cost the way a user program would exercise them. Run with:
//!
//! <pre>
//! cargo bench
//! </pre>

use crate::knowledge_base::KnowledgeBase;
use crate::proposition::{AtomicProp, Proposition};
use crate::query::query;
use crate::rule::Rule;
use crate::term::Term;

fn numbers(n: i64) -> Vec<Term> {
    (0..n).map(|i| Term::atom(&format!("n{}", i))).collect()
}

/// `append([], $Y, $Y).`
/// `append([$H | $T], $Y, [$H | $Z]) :- append($T, $Y, $Z).`
fn append_kb() -> KnowledgeBase {
    let y = Term::var("Y", -1);
    let base = Rule::fact(AtomicProp::new("append", Term::list(vec![Term::nil(), y.clone(), y])));

    let h = Term::var("H", -1);
    let t = Term::var("T", -1);
    let y = Term::var("Y", -1);
    let z = Term::var("Z", -1);
    let head = AtomicProp::new(
        "append",
        Term::list(vec![Term::cons(h.clone(), t.clone()), y.clone(), Term::cons(h, z.clone())]),
    );
    let goal = Proposition::Atomic(AtomicProp::new("append", Term::list(vec![t, y, z])));
    let recursive = Rule::with_goal(head, goal);

    KnowledgeBase::empty().assume(base).assume(recursive)
}

/// Appends a 40-element list to a 40-element list, fully enumerating the
/// (unique, since both arguments are ground) solution, then separately
/// runs `append` in split mode — first two arguments unbound — to
/// enumerate every way to split an 80-element list in two, exercising
/// backtracking over 81 choice points.
pub fn benchmark() {
    let kb = append_kb();

    let left = Term::list(numbers(40));
    let right = Term::list(numbers(40));
    let whole = Term::var("Whole", -1);
    let ground_query = Proposition::Atomic(AtomicProp::new("append", Term::list(vec![left, right, whole])));
    let _ = query(ground_query, kb.clone()).next();

    let a = Term::var("A", -1);
    let b = Term::var("B", -1);
    let split_query =
        Proposition::Atomic(AtomicProp::new("append", Term::list(vec![a, b, Term::list(numbers(80))])));
    let count = query(split_query, kb).count();
    assert_eq!(count, 81);
}
