//! The knowledge base: rules indexed by predicate name, in insertion order.

use std::collections::HashMap;
use std::rc::Rc;

use crate::rule::Rule;
use crate::time_out::query_stopped;

/// An insertion-ordered collection of rules, indexed by head predicate
/// name. Value-semantic: `assume` returns an extended knowledge base, the
/// original is left untouched, which is what lets a query hold a reference
/// to one snapshot while a caller elsewhere extends a different one.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    rules: Rc<HashMap<String, Vec<Rule>>>,
}

impl KnowledgeBase {
    pub fn empty() -> KnowledgeBase {
        KnowledgeBase { rules: Rc::new(HashMap::new()) }
    }

    /// Appends `rule` to the rule list of `rule.head.pred`.
    pub fn assume(&self, rule: Rule) -> KnowledgeBase {
        let mut extended = (*self.rules).clone();
        extended.entry(rule.head.pred.clone()).or_insert_with(Vec::new).push(rule);
        KnowledgeBase { rules: Rc::new(extended) }
    }

    /// The rules filed under `pred_name`, in insertion order. An unknown
    /// predicate yields an empty list, never an error. A query that has
    /// been stopped by the query timer also sees an empty list here, which
    /// is how a timed-out proof search unwinds without a distinct failure
    /// path.
    pub fn rules(&self, pred_name: &str) -> Vec<Rule> {
        if query_stopped() {
            return Vec::new();
        }
        self.rules.get(pred_name).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rules.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
