//! Output formatting for shell results.

use qeivau_core::{TaggedCodec, ValueCodec};

use crate::state::{CliError, Output};

/// Command summary printed by `help`.
pub const HELP_TEXT: &str = "\
Available commands:
  set <key> <value>   Store a value ([a,b] is a list, {k:v} a map, \"\" is empty)
  get <key>           Print a value
  remove <key>        Delete a key
  has <key>           Check whether a key exists
  keys                List all keys
  save [file]         Persist to file (default: the --file path)
  load <file>         Load entries from file
  clear               Remove every entry
  help                Show this help
  exit | quit         Leave the shell";

/// Format a successful command result.
///
/// Values are shown in their tagged text form, so a scalar that looks like
/// a list comes back quoted.
pub fn format_output(output: &Output, codec: &TaggedCodec) -> String {
    match output {
        Output::Ok => "OK".to_string(),
        Output::Value(value) => codec.encode(value),
        Output::NotFound => "(not found)".to_string(),
        Output::Bool(b) => b.to_string(),
        Output::Removed => "Removed".to_string(),
        Output::Keys(keys) => {
            if keys.is_empty() {
                "(empty list)".to_string()
            } else {
                keys.iter()
                    .enumerate()
                    .map(|(i, k)| format!("{}) {}", i + 1, k))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Output::Loaded(n) => format!("OK ({} entries)", n),
        Output::Help => HELP_TEXT.to_string(),
        Output::Exit => String::new(),
    }
}

/// Format an error.
pub fn format_error(err: &CliError) -> String {
    format!("(error) {}", err)
}
