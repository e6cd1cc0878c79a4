//! The value-semantic facade external collaborators drive: ingest rules,
//! interrogate with queries.

use crate::knowledge_base::KnowledgeBase;
use crate::proposition::Proposition;
use crate::query::{query, Solution};
use crate::rule::Rule;

/// A proof system: a knowledge base plus the two operations a REPL needs.
///
/// Value-semantic, per the recommended default: `assume` returns an
/// extended system rather than mutating `self` in place, so a caller
/// holding an older handle (for instance, mid-query) is never surprised by
/// a concurrent extension.
#[derive(Debug, Clone, Default)]
pub struct ProofSystem {
    kb: KnowledgeBase,
}

impl ProofSystem {
    pub fn new() -> ProofSystem {
        ProofSystem { kb: KnowledgeBase::empty() }
    }

    /// Accepts `rule`, provided its head's predicate name is non-empty.
    pub fn assume(&self, rule: Rule) -> Result<ProofSystem, String> {
        if rule.head.pred.is_empty() {
            return Err("malformed rule: head predicate name is empty".to_string());
        }
        Ok(ProofSystem { kb: self.kb.assume(rule) })
    }

    /// Proves `prop` against this system's knowledge base, lazily yielding
    /// one solution per result.
    pub fn query(&self, prop: Proposition) -> Box<dyn Iterator<Item = Solution>> {
        query(prop, self.kb.clone())
    }
}
