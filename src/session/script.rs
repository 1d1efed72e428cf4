//! Headless command scripts
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! order process ORD-12347
//! listing duplicate LST-001
//! confirm
//! chart month
//! quick export-data
//! wait 1600
//! dump
//! ```

use crate::error::ScriptError;
use crate::managers::{ListingAction, QuickAction};
use crate::modal::ConfirmChoice;
use crate::notifications::Severity;
use crate::records::Period;
use crate::surface::OrderAction;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Order { action: OrderAction, id: String },
    Listing { action: ListingAction, id: String },
    Chart(Period),
    Quick(QuickAction),
    Notify { severity: Severity, message: String },
    Choose(ConfirmChoice),
    Backdrop,
    Close,
    /// Types text into the focused field of the open listing form.
    Type(String),
    /// Moves focus to the next form field.
    NextField,
    /// Cycles the condition selector when it has focus.
    Cycle,
    Submit,
    Dismiss,
    Wait(Duration),
    Dump,
}

/// A parsed command together with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub text: String,
    pub command: ScriptCommand,
}

impl fmt::Display for ScriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn parse_arg<T: FromStr>(line: usize, what: &str, value: Option<&str>) -> Result<T, ScriptError> {
    let value = value.ok_or_else(|| ScriptError::Parse {
        line,
        message: format!("missing {}", what),
    })?;
    value.parse().map_err(|_| ScriptError::Parse {
        line,
        message: format!("unknown {} '{}'", what, value),
    })
}

fn required_id(line: usize, value: Option<&str>) -> Result<String, ScriptError> {
    value.map(str::to_string).ok_or_else(|| ScriptError::Parse {
        line,
        message: "missing record id".to_string(),
    })
}

/// Parses one non-empty script line.
pub fn parse_command(line: usize, text: &str) -> Result<ScriptCommand, ScriptError> {
    let mut words = text.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_lowercase();
    let rest = |prefix: &str| text.trim()[prefix.len()..].trim().to_string();

    let command = match keyword.as_str() {
        "order" => {
            let action = parse_arg(line, "order action", words.next())?;
            ScriptCommand::Order {
                action,
                id: required_id(line, words.next())?,
            }
        }
        "listing" => {
            let action = parse_arg(line, "listing action", words.next())?;
            ScriptCommand::Listing {
                action,
                id: required_id(line, words.next())?,
            }
        }
        "chart" => ScriptCommand::Chart(parse_arg(line, "period", words.next())?),
        "quick" => ScriptCommand::Quick(parse_arg(line, "quick action", words.next())?),
        "notify" => {
            let severity = Severity::parse_lossy(words.next().unwrap_or_default());
            let message = words.collect::<Vec<_>>().join(" ");
            ScriptCommand::Notify { severity, message }
        }
        "confirm" => ScriptCommand::Choose(ConfirmChoice::Confirm),
        "cancel" => ScriptCommand::Choose(ConfirmChoice::Cancel),
        "backdrop" => ScriptCommand::Backdrop,
        "close" => ScriptCommand::Close,
        "type" => ScriptCommand::Type(rest("type")),
        "tab" => ScriptCommand::NextField,
        "cycle" => ScriptCommand::Cycle,
        "submit" => ScriptCommand::Submit,
        "dismiss" => ScriptCommand::Dismiss,
        "wait" => {
            let ms: u64 = parse_arg(line, "wait duration", words.next())?;
            ScriptCommand::Wait(Duration::from_millis(ms))
        }
        "dump" => ScriptCommand::Dump,
        other => {
            return Err(ScriptError::Parse {
                line,
                message: format!("unknown command '{}'", other),
            });
        }
    };
    Ok(command)
}

/// Parses a whole script. Line numbers start at 1.
pub fn parse_script<'a>(
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in lines.into_iter().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let line = index + 1;
        commands.push(ScriptLine {
            line,
            text: text.to_string(),
            command: parse_command(line, text)?,
        });
    }
    if commands.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(commands)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptLine>, ScriptError> {
    let contents = std::fs::read_to_string(path)?;
    parse_script(contents.lines())
}
