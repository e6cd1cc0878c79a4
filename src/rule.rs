//! Horn-clause rules: a head with an optional body.

use std::fmt;

use crate::proposition::{AtomicProp, Proposition};

/// A rule `head :- goal.`, or an axiom `head.` when `goal` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub head: AtomicProp,
    pub goal: Option<Proposition>,
}

impl Rule {
    pub fn fact(head: AtomicProp) -> Rule {
        Rule { head, goal: None }
    }

    pub fn with_goal(head: AtomicProp, goal: Proposition) -> Rule {
        Rule { head, goal: Some(goal) }
    }

    /// Allocates one fresh id for the whole rule and applies it to both
    /// head and goal, so that head and body variables of one instantiation
    /// stay coreferent.
    pub fn refresh(&self) -> Rule {
        let id = crate::variable::fresh_id();
        Rule {
            head: AtomicProp { pred: self.head.pred.clone(), term: self.head.term.with_fresh_id(id) },
            goal: self.goal.as_ref().map(|g| g.with_fresh_id(id)),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.goal {
            Some(goal) => write!(f, "{} :- {}.", self.head, goal),
            None => write!(f, "{}.", self.head),
        }
    }
}
