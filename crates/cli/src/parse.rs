//! Input line → `CliCommand` conversion.
//!
//! Lines are split on the first whitespace runs only, so the value given to
//! `set` keeps its inner spaces: `set greeting hello world` stores
//! `hello world`.

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Store a value; the text is decoded with the tagged codec.
    Set { key: String, value: String },
    /// Print a value.
    Get { key: String },
    /// Delete a key.
    Remove { key: String },
    /// Report whether a key exists.
    Has { key: String },
    /// List every key.
    Keys,
    /// Persist to the given file, or the session's default file.
    Save { path: Option<String> },
    /// Load entries from a file.
    Load { path: String },
    /// Drop every entry.
    Clear,
    /// Print the command list.
    Help,
    /// Leave the shell.
    Exit,
}

/// Command names offered by TAB completion.
pub const COMMAND_NAMES: &[&str] = &[
    "set", "get", "remove", "has", "keys", "save", "load", "clear", "help", "exit", "quit",
];

/// Parse one input line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<CliCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = split_word(trimmed);
    let cmd = match name.to_ascii_lowercase().as_str() {
        "set" => {
            let (key, value) = split_word(rest);
            if key.is_empty() || value.is_empty() {
                return Err("Usage: set <key> <value>".to_string());
            }
            CliCommand::Set {
                key: key.to_string(),
                value: value.to_string(),
            }
        }
        "get" => CliCommand::Get {
            key: single_arg(rest, "get <key>")?,
        },
        "remove" | "rm" | "del" => CliCommand::Remove {
            key: single_arg(rest, "remove <key>")?,
        },
        "has" => CliCommand::Has {
            key: single_arg(rest, "has <key>")?,
        },
        "keys" => no_args(rest, "keys", CliCommand::Keys)?,
        "save" => match rest {
            "" => CliCommand::Save { path: None },
            path => CliCommand::Save {
                path: Some(path.to_string()),
            },
        },
        "load" => {
            if rest.is_empty() {
                return Err("Usage: load <file>".to_string());
            }
            CliCommand::Load {
                path: rest.to_string(),
            }
        }
        "clear" => no_args(rest, "clear", CliCommand::Clear)?,
        "help" | "?" => CliCommand::Help,
        "exit" | "quit" => CliCommand::Exit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };
    Ok(Some(cmd))
}

/// Split off the first word; the remainder has leading whitespace removed.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn single_arg(rest: &str, usage: &str) -> Result<String, String> {
    let (arg, extra) = split_word(rest);
    if arg.is_empty() || !extra.is_empty() {
        return Err(format!("Usage: {}", usage));
    }
    Ok(arg.to_string())
}

fn no_args(rest: &str, usage: &str, cmd: CliCommand) -> Result<CliCommand, String> {
    if rest.is_empty() {
        Ok(cmd)
    } else {
        Err(format!("Usage: {}", usage))
    }
}
