//! Loads a knowledge base from a source file: one clause (fact or rule)
//! per logical unit, possibly spanning several physical lines.

use std::fs;

use crate::parser::parse_rule_text;
use crate::proof_system::ProofSystem;
use crate::tokenizer::{separate_clauses, strip_comments};

/// Reads `file_path`, strips comments, parses every clause, and folds them
/// into a fresh [`ProofSystem`].
///
/// On the first parse error, returns a message naming the offending clause
/// and the clause immediately before it, mirroring the way a human would
/// describe "where things went wrong" when reading the file top to bottom.
pub fn load_kb_from_file(file_path: &str) -> Result<ProofSystem, String> {
    let text = fs::read_to_string(file_path).map_err(|e| format!("load_kb_from_file() - {}: {}", e, file_path))?;

    let mut stripped = String::new();
    for line in text.lines() {
        let line = strip_comments(line);
        if !line.is_empty() {
            stripped.push_str(&line);
            stripped.push(' ');
        }
    }

    let clauses = separate_clauses(&stripped)?;

    let mut system = ProofSystem::new();
    let mut previous = String::new();
    for clause in clauses {
        let body = clause.strip_suffix('.').unwrap_or(&clause);
        let rule = parse_rule_text(body).map_err(|err| load_parse_error(&err, &previous))?;
        system = system.assume(rule).map_err(|err| load_parse_error(&err, &previous))?;
        previous = clause;
    }
    Ok(system)
}

fn load_parse_error(err: &str, previous: &str) -> String {
    if previous.is_empty() {
        format!("{} Check start of file.", err)
    } else {
        format!("{} Error occurs after: {}", err, previous)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::proposition::AtomicProp;
    use crate::term::Term;
    use crate::variable::clear_id;
    use std::io::Write;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("horn_rule_reader_test_{}.txt", crate::variable::fresh_id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_kb_from_file() {
        clear_id();
        let path = write_temp(
            "% classical syllogism\n\
             human(socrates).\n\
             human(plato).\n\
             mortal($X) :- human($X).\n",
        );
        let system = load_kb_from_file(path.to_str().unwrap()).unwrap();
        let solutions: Vec<_> = system
            .query(crate::proposition::Proposition::Atomic(AtomicProp::new("mortal", Term::var("X", -1))))
            .collect();
        assert_eq!(solutions.len(), 2);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_kb_reports_parse_error_with_context() {
        let path = write_temp("human(socrates).\nmortal($X) :- .\n");
        let err = load_kb_from_file(path.to_str().unwrap()).unwrap_err();
        assert!(err.contains("Error occurs after: human(socrates)."), "{}", err);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_kb_missing_file() {
        assert!(load_kb_from_file("/nonexistent/path/to/kb.txt").is_err());
    }
}
