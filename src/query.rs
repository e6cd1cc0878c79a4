//! The query driver: renames a query, then projects each proof result into
//! an ordered [`Solution`].

use std::collections::HashSet;
use std::fmt;

use crate::environment::Env;
use crate::knowledge_base::KnowledgeBase;
use crate::proposition::Proposition;
use crate::prover::prove;
use crate::term::Term;

/// One binding in a solution: a variable's source-level name paired with
/// its value, or `None` if the query left it unbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub term: Option<Term>,
}

/// An ordered sequence of bindings, one per distinct variable of the
/// query, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub bindings: Vec<Binding>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.bindings.is_empty() {
            return write!(f, "Yes.");
        }
        let rendered: Vec<String> = self
            .bindings
            .iter()
            .map(|b| match &b.term {
                Some(t) => format!("${} = {}", b.name, t),
                None => format!("${} unbound", b.name),
            })
            .collect();
        write!(f, "{}", rendered.join(", "))
    }
}

/// Proves `prop` against `kb`, lazily yielding one [`Solution`] per result.
///
/// Variable names in each solution are the original source-level names
/// from `prop`, in the order they first occur — renamed ids are an
/// implementation detail of the prover and never escape here.
pub fn query(prop: Proposition, kb: KnowledgeBase) -> Box<dyn Iterator<Item = Solution>> {
    let refreshed = prop.refresh();

    let mut seen = HashSet::new();
    let mut vars = Vec::new();
    for v in refreshed.vars() {
        if seen.insert(v.clone()) {
            vars.push(v);
        }
    }

    let results = prove(refreshed, Env::empty(), kb);
    Box::new(results.map(move |(env, _cut)| {
        let bindings = vars
            .iter()
            .map(|v| {
                let t = env.substitute(&Term::Var(v.clone()));
                let term = if matches!(&t, Term::Var(_)) { None } else { Some(t) };
                Binding { name: v.name.clone(), term }
            })
            .collect();
        Solution { bindings }
    }))
}
