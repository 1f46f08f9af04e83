//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, history, TAB completion of commands and keys.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::warn;

use crate::format::{format_error, format_output};
use crate::parse::{parse_line, COMMAND_NAMES};
use crate::state::{Output, SessionState};

/// What the loop should do after one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Line handled; `false` if it produced an error
    Continue(bool),
    /// `exit` / `quit`
    Exit,
}

/// Parse, execute and print one line.
pub fn execute_line(line: &str, state: &mut SessionState) -> Step {
    let cmd = match parse_line(line) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => return Step::Continue(true),
        Err(msg) => {
            eprintln!("(error) {}", msg);
            return Step::Continue(false);
        }
    };

    match state.execute(cmd) {
        Ok(Output::Exit) => Step::Exit,
        Ok(output) => {
            println!("{}", format_output(&output, state.codec()));
            Step::Continue(true)
        }
        Err(e) => {
            eprintln!("{}", format_error(&e));
            Step::Continue(false)
        }
    }
}

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<QeivauHelper, DefaultHistory> = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Could not start line editor: {}", e);
            return;
        }
    };
    rl.set_helper(Some(QeivauHelper::default()));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        if let Some(helper) = rl.helper_mut() {
            helper.keys = state.keys();
        }

        let prompt = match state.file() {
            Some(path) => format!("qeivau [{}]> ", path.display()),
            None => "qeivau> ".to_string(),
        };
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if execute_line(trimmed, state) == Step::Exit {
                    break;
                }
            }
            // Ctrl-C: fresh prompt
            Err(ReadlineError::Interrupted) => continue,
            // Ctrl-D
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path, error = %e, "Could not save history");
        }
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Every line runs even after a failure; the exit code is 1 if any line
/// failed.
pub fn run_pipe(state: &mut SessionState) -> i32 {
    let stdin = io::stdin();
    run_lines(stdin.lock(), state)
}

fn run_lines<R: BufRead>(input: R, state: &mut SessionState) -> i32 {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        match execute_line(&line, state) {
            Step::Exit => break,
            Step::Continue(false) => exit_code = 1,
            Step::Continue(true) => {}
        }
    }

    exit_code
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.qeivau_history", h))
}

/// Completes command names in first position and store keys after
/// commands that take a key.
#[derive(Default)]
struct QeivauHelper {
    keys: Vec<String>,
}

impl Helper for QeivauHelper {}
impl Validator for QeivauHelper {}
impl Highlighter for QeivauHelper {}
impl Hinter for QeivauHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for QeivauHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let trailing_space = line_to_pos.ends_with(char::is_whitespace);

        let keys = || self.keys.iter().map(String::as_str).collect::<Vec<_>>();
        let (prefix, pool): (&str, Vec<&str>) = match (parts.as_slice(), trailing_space) {
            ([], _) => ("", COMMAND_NAMES.to_vec()),
            ([word], false) => (*word, COMMAND_NAMES.to_vec()),
            ([cmd], true) if takes_key(cmd) => ("", keys()),
            ([cmd, word], false) if takes_key(cmd) => (*word, keys()),
            _ => return Ok((pos, Vec::new())),
        };

        let candidates = pool
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .map(|c| Pair {
                display: c.to_string(),
                replacement: c.to_string(),
            })
            .collect();
        Ok((pos - prefix.len(), candidates))
    }
}

fn takes_key(cmd: &str) -> bool {
    matches!(
        cmd.to_ascii_lowercase().as_str(),
        "set" | "get" | "remove" | "rm" | "del" | "has"
    )
}
