//! Terminal output and prompts.
//!
//! The engine emits every progress line through its `Reporter` seam; this
//! module prints those lines verbatim, asks interactive questions through
//! `dialoguer`, and renders the end-of-run summary table.

use console::style;
use dialoguer::Confirm;

use depot::sync::{Reporter, SyncReport, SyncVerdict, UserPrompt};

/// Separator line framing the summary block.
const RULE: &str = "------------------------------------------";

/// Prints engine progress lines straight to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Interactive confirmation through the terminal.
///
/// Anything but an explicit yes is a rejection, and rejections are
/// announced so a skipped change never passes silently.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl UserPrompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        let accepted = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false);
        if !accepted {
            println!("Skipping change...");
        }
        accepted
    }
}

/// Print the end-of-run summary table and verdict.
pub fn print_summary(report: &SyncReport) {
    let c = &report.counters;
    println!();
    println!("{}", RULE);
    match report.verdict() {
        SyncVerdict::Success => {
            println!("{}", style("Operation was successful!").green());
        }
        SyncVerdict::CompletedWithErrors => {
            println!("{}", style("Operation had errors which could be fixed!").yellow());
        }
        SyncVerdict::Failed => {
            println!("{}", style("Operation Failed!").red());
        }
    }
    println!(" - Files checked:......{:5}", c.checked);
    println!(" - New Files:..........{:5}", c.added);
    println!(" - Changed Files:......{:5}", c.changed);
    println!(" - Deleted Files:......{:5}", c.deleted);
    println!(" - Changes Skipped:....{:5}", c.skipped);
    println!(" - Errors:.............{:5}", c.errors);
    println!(" - Failures:...........{:5}", c.failures);
    println!("{}", RULE);
}
