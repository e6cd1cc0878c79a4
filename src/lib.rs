//! # Horn
//!
//! Horn is a small, fast depth-first resolver for Horn-clause logic
//! programs: give it facts and rules, ask it a goal, and it enumerates
//! every variable assignment under which the goal follows.
//!
//! Its rule language is Prolog-like, as is its control model (depth-first,
//! left-to-right, with a cut primitive), but the surface syntax and scope
//! are deliberately small: no arithmetic, no type system, no rule
//! indexing, no persistence.
//!
//! ## Briefly
//!
//! A fact means what it says: "June is the mother of Theodore" is written
//!
//! <pre>mother(June, Theodore).</pre>
//!
//! Atoms (`mother`, `June`, `Theodore`) are bare lower- or upper-case
//! words, or quoted text for atoms containing spaces (`"The Beaver"`).
//! Variables are `$`-prefixed (`$Child`); the anonymous variable is `$_`.
//! A query to find June's children:
//!
//! <pre>mother(June, $Child).</pre>
//!
//! Rules chain facts together. "Everyone human is mortal":
//!
//! <pre>mortal($X) :- human($X).</pre>
//!
//! Lists use Prolog's bracket notation, including the head/tail split:
//!
//! <pre>[a, b, c]
//! [$Head | $Tail]</pre>
//!
//! ## Programmatic use
//!
//! Facts and rules can also be built directly in Rust, without going
//! through the parser:
//!
//! <pre>
//! let fact = Rule::fact(AtomicProp::new("mother",
//!     Term::list(vec![Term::atom("June"), Term::atom("Theodore")])));
//! let system = ProofSystem::new().assume(fact).unwrap();
//! let query = Proposition::Atomic(AtomicProp::new("mother",
//!     Term::list(vec![Term::atom("June"), Term::var("Child", -1)])));
//! for solution in system.query(query) {
//!     println!("{}", solution);
//! }</pre>
//!
//! ## Usage
//!
//! The `horn-repl` binary loads a knowledge base from a text file and
//! prompts for queries:
//!
//! <pre>
//! cargo run --bin horn-repl -- tests/kings.txt
//! ?- father($F, $C).
//! $F = Godwin, $C = Harold
//! No more.
//! ?- </pre>
//!
//! ## Scope
//!
//! Horn has exactly two built-in predicates: `!` (cut) and `true`. There
//! is no arithmetic, no comparison, no list-processing library, and no
//! disjunction node in the goal grammar — alternatives are expressed by
//! giving a predicate more than one rule. See `SPEC_FULL.md` and
//! `DESIGN.md` in the repository root for the full design rationale.
//!
//! ## License
//!
//! Licensed under the MIT license; see [LICENSE](./LICENSE).
//!

pub mod variable;
pub mod term;
pub mod proposition;
pub mod environment;
pub mod rule;
pub mod knowledge_base;
pub mod prover;
pub mod query;
pub mod proof_system;
pub mod token;
pub mod tokenizer;
pub mod parser;
pub mod rule_reader;
pub mod time_out;
pub mod benchmark;

pub use benchmark::*;
pub use environment::*;
pub use knowledge_base::*;
pub use parser::*;
pub use proof_system::*;
pub use proposition::*;
pub use prover::*;
pub use query::*;
pub use rule::*;
pub use rule_reader::*;
pub use term::*;
pub use token::*;
pub use tokenizer::*;
pub use variable::*;
