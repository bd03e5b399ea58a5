//! Interactive query loop
//!
//! One interaction per turn: read a line, normalize it, dispatch it, print
//! each answer on its own line. The loop ends on an [`Outcome::Exit`], end of
//! input, or Ctrl-C; every path prints the same farewell.

use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::pattern::normalize_query;
use crate::rules::{Outcome, RuleSet};

const BANNER: &str = "Welcome to the fact database!";
const PROMPT: &str = "Your query?";
const FAREWELL: &str = "So long!";

/// Run the query loop against an already-built rule table.
pub async fn run(rules: &RuleSet) -> std::io::Result<()> {
    println!("{}", BANNER.cyan().bold());
    println!("Ask about birth dates, planet radii, populations, capitals, or coordinates.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!();
        print!("{} ", PROMPT.cyan());
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };

        // None on EOF or Ctrl-C
        let Some(line) = line else { break };

        let query = normalize_query(&line);
        match rules.dispatch(&query).await {
            Outcome::Exit => break,
            Outcome::Answers(answers) => {
                for answer in answers {
                    println!("{answer}");
                }
            }
        }
    }

    println!("\n{}\n", FAREWELL.cyan());
    Ok(())
}

/// Answer a single query and return whether the caller should keep going.
///
/// Shared by the one-shot `ask` command; an exit outcome simply prints
/// nothing and reports termination.
pub async fn answer_once(rules: &RuleSet, input: &str) -> Outcome {
    let query = normalize_query(input);
    rules.dispatch(&query).await
}
