use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::{
    form::{form_model::Field, store::FormStore},
    questions::backend::QuestionBackend,
    report::console::format_error_report,
    submit::{
        controller::{SubmissionController, SubmissionOutcome},
        sink::ConsoleSink,
    },
    trace::logger::TraceLogger,
};

pub mod cli;
pub mod error;
pub mod form;
pub mod questions;
pub mod report;
pub mod submit;
pub mod trace;
pub mod validate;

const HELP: &str = "\
Commands:
  set <field> <value>     set a field (topic changes fetch new questions)
  answer <index> <text>   answer a dependent question
  questions               list the current dependent questions
  show                    show values, answers, and last errors
  submit                  validate; finalize when clean
  help                    this text
  quit                    leave without submitting";

/// Run an interactive survey session on stdin.
///
/// One command per line; between commands the store pumps its fetch
/// resolutions, so question lists arrive without blocking input.
pub fn run_session(
    backend: Arc<dyn QuestionBackend>,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FormStore::new(backend);
    let mut controller = SubmissionController::new();
    let mut sink = ConsoleSink;

    println!("=== Survey session (type 'help' for commands) ===");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        // Apply whatever the provider delivered while the user typed
        if store.apply_resolutions(tracer) > 0 {
            println!("(fetched {} follow-up questions)", store.questions().len());
            if let Some(notice) = store.advisory() {
                println!("Note: {}", notice);
            }
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,

            "set" => match rest.split_once(' ') {
                Some((name, value)) => match Field::from_name(name) {
                    Some(field) => {
                        store.set_field(field, value.trim().to_string(), tracer);
                        if store.has_pending_fetch() {
                            println!("(fetching follow-up questions...)");
                        }
                    }
                    None => print_field_names(name),
                },
                None => match Field::from_name(rest) {
                    // Bare field name clears the field
                    Some(field) => store.set_field(field, String::new(), tracer),
                    None => println!("Usage: set <field> <value>"),
                },
            },

            "answer" => {
                let parsed = rest
                    .split_once(' ')
                    .and_then(|(i, text)| i.parse::<usize>().ok().map(|i| (i, text.trim())));
                match parsed {
                    Some((index, text)) => store.set_answer(index, text.to_string(), tracer),
                    None => println!("Usage: answer <index> <text>"),
                }
            }

            "questions" => print_questions(&store),

            "show" => print_state(&store),

            "submit" => match controller.submit(&mut store, &mut sink, tracer)? {
                SubmissionOutcome::Finalized(_) => break,
                SubmissionOutcome::Rejected { .. } => {
                    print!("{}", format_error_report(store.errors()));
                    println!("Fix the fields above and submit again.");
                }
            },

            other => println!("Unknown command '{}' (try 'help')", other),
        }
    }

    println!("=== Session ended ===");
    Ok(())
}

fn print_field_names(unknown: &str) {
    println!("Unknown field '{}'. Fields:", unknown);
    for field in Field::ALL {
        println!("  {}", field.name());
    }
}

fn print_questions(store: &FormStore) {
    if store.has_pending_fetch() {
        println!("(fetch in flight — ask again in a moment)");
        return;
    }
    if let Some(notice) = store.advisory() {
        println!("Note: {}", notice);
    }
    if store.questions().is_empty() {
        println!("No dependent questions for the current topic.");
        return;
    }
    for (index, question) in store.questions().iter().enumerate() {
        let answer = store
            .answers()
            .get(&index)
            .map(String::as_str)
            .unwrap_or("");
        println!("  [{}] {} = {}", index, question.text, answer);
    }
}

fn print_state(store: &FormStore) {
    println!("Fields:");
    for field in Field::ALL {
        let value = store.values().get(field);
        if !value.is_empty() {
            println!("  {}: {}", field.name(), value);
        }
    }
    print_questions(store);
    if !store.errors().is_empty() {
        print!("{}", format_error_report(store.errors()));
    }
}
