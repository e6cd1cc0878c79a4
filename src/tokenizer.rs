//! Turns source text into a token stream, and splits a source file's text
//! into individual clauses (facts and rules, each terminated by a period).
//!
// Cleve Lendon 2023

use crate::token::Token;
use crate::variable::fresh_id;

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Scans `text` into a flat stream of tokens.
///
/// Quoted atoms (`"The Beaver"`) are unwrapped to their inner text. A bare
/// `$_` is not a single reusable variable; every occurrence gets its own
/// unique generated name, so that two anonymous variables in the same
/// clause never accidentally corefer.
pub fn tokenize(text: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = text.chars().collect();
    let length = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < length {
        let ch = chars[i];

        if ch.is_whitespace() {
            i += 1;
        } else if ch == '(' {
            tokens.push(Token::LParen);
            i += 1;
        } else if ch == ')' {
            tokens.push(Token::RParen);
            i += 1;
        } else if ch == '[' {
            tokens.push(Token::LBracket);
            i += 1;
        } else if ch == ']' {
            tokens.push(Token::RBracket);
            i += 1;
        } else if ch == '|' {
            tokens.push(Token::Pipe);
            i += 1;
        } else if ch == ',' {
            tokens.push(Token::Comma);
            i += 1;
        } else if ch == ':' && i + 1 < length && chars[i + 1] == '-' {
            tokens.push(Token::Neck);
            i += 2;
        } else if ch == '"' {
            let start = i + 1;
            let mut j = start;
            while j < length && chars[j] != '"' {
                j += 1;
            }
            if j >= length {
                return Err(format!("tokenize() - Unmatched quote: {}", text));
            }
            let inner: String = chars[start..j].iter().collect();
            tokens.push(Token::Atom(inner));
            i = j + 1;
        } else if ch == '$' {
            let start = i + 1;
            let mut j = start;
            while j < length && is_word_char(chars[j]) {
                j += 1;
            }
            let name: String = chars[start..j].iter().collect();
            if name == "_" {
                tokens.push(Token::Var(format!("_G{}", fresh_id())));
            } else if name.is_empty() {
                return Err(format!("tokenize() - Bare '$' is not a valid variable: {}", text));
            } else {
                tokens.push(Token::Var(name));
            }
            i = j;
        } else if ch == '!' {
            tokens.push(Token::Atom("!".to_string()));
            i += 1;
        } else if is_word_char(ch) {
            let start = i;
            let mut j = i;
            while j < length && is_word_char(chars[j]) {
                j += 1;
            }
            let word: String = chars[start..j].iter().collect();
            tokens.push(Token::Atom(word));
            i = j;
        } else {
            return Err(format!("tokenize() - Invalid character '{}': {}", ch, text));
        }
    }

    Ok(tokens)
}

/// Strips comments from a line. Valid comment delimiters are `#`, `%` and
/// `//`, unless they occur inside parentheses, brackets or quotes.
pub fn strip_comments(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut round_depth = 0i32;
    let mut square_depth = 0i32;
    let mut in_quotes = false;
    let mut previous = 'x';

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if !in_quotes {
            if ch == '(' {
                round_depth += 1;
            } else if ch == ')' {
                round_depth -= 1;
            } else if ch == '[' {
                square_depth += 1;
            } else if ch == ']' {
                square_depth -= 1;
            } else if round_depth == 0 && square_depth == 0 {
                if ch == '#' || ch == '%' {
                    return chars[0..i].iter().collect::<String>().trim().to_string();
                } else if ch == '/' && previous == '/' {
                    return chars[0..i - 1].iter().collect::<String>().trim().to_string();
                }
            }
        }
        previous = ch;
    }
    line.trim().to_string()
}

/// Splits a long, comment-free string into individual clauses, each ending
/// with a period at depth zero (outside parens, brackets and quotes). The
/// trailing period is included in each returned clause.
pub fn separate_clauses(text: &str) -> Result<Vec<String>, String> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut round_depth = 0i32;
    let mut square_depth = 0i32;
    let mut in_quotes = false;

    for ch in text.chars() {
        current.push(ch);
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if !in_quotes {
            if ch == '(' {
                round_depth += 1;
            } else if ch == ')' {
                round_depth -= 1;
            } else if ch == '[' {
                square_depth += 1;
            } else if ch == ']' {
                square_depth -= 1;
            } else if ch == '.' && round_depth == 0 && square_depth == 0 {
                clauses.push(current.trim().to_string());
                current = String::new();
            }
        }
    }

    if !current.trim().is_empty() {
        return Err(format!("separate_clauses() - Unterminated clause: {}", current.trim()));
    }
    if round_depth != 0 {
        return Err("separate_clauses() - Unmatched parenthesis".to_string());
    }
    if square_depth != 0 {
        return Err("separate_clauses() - Unmatched bracket".to_string());
    }

    Ok(clauses)
}
