//! `horn-repl` loads a knowledge base from a file and prompts for queries.
//!
//! # Usage
//! ```text
//! cargo run --bin horn-repl -- tests/kings.txt
//! ?- father($F, $C).
//! $F = Godwin, $C = Harold
//! $F = Godwin, $C = Tostig
//! No more.
//! ?- mortal(socrates).
//! accepted
//! ```
//!
//! Each line typed at the `?-` prompt is one of three things: a fact or
//! rule ending in `.`, which is ingested and answered with `accepted`; a
//! query, whose solutions are printed one at a time on each further press
//! of Enter until `No more.`; or malformed input, whose parse error is
//! printed verbatim. A per-query timer (see [`horn::time_out`]) bounds how
//! long a single query may run, so a pathological recursive program
//! cannot hang the REPL forever.

use std::env;
use std::io::{self, Write};
use std::process;

use horn::parser::{parse_statement, Statement};
use horn::rule_reader::load_kb_from_file;
use horn::time_out::{cancel_timer, start_query, start_query_timer};

const QUERY_TIMEOUT_MS: u64 = 1000;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        println!("\nhorn - a depth-first Horn-clause resolver with cut\n");
        println!("Usage:");
        println!("cargo run --bin horn-repl -- tests/kings.txt\n");
        return;
    }

    let file_path = &args[1];
    println!("Loading file: {}", file_path);

    let mut system = match load_kb_from_file(file_path) {
        Ok(system) => system,
        Err(err) => {
            println!("{}", err);
            process::exit(1);
        }
    };

    loop {
        print!("?- ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            break;
        }

        match parse_statement(input) {
            Ok(Statement::Rule(rule)) => match system.assume(rule) {
                Ok(extended) => {
                    system = extended;
                    println!("accepted");
                }
                Err(err) => println!("{}", err),
            },
            Ok(Statement::Query(prop)) => {
                start_query();
                let timer = start_query_timer(QUERY_TIMEOUT_MS);
                let mut solutions = system.query(prop);
                loop {
                    let rendered = match solutions.next() {
                        Some(solution) => solution.to_string(),
                        None => "No more.".to_string(),
                    };
                    print!("{} ", rendered);
                    let _ = io::stdout().flush();
                    let mut line = String::new();
                    if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
                        break;
                    }
                    if rendered == "No more." {
                        break;
                    }
                }
                println!();
                cancel_timer(timer);
            }
            Err(err) => println!("{}", err),
        }
    }
}
