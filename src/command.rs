//! Line commands for the terminal front-end.
//!
//! A line that does not start with `:` replaces the source text verbatim.
//! Start a line with `::` to enter source text that begins with a colon.

use anyhow::{bail, Result};

/// Which text box an action applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    fn parse(arg: &str) -> Result<Side> {
        match arg {
            "from" | "source" => Ok(Side::Source),
            "to" | "target" => Ok(Side::Target),
            other => bail!("Expected 'from' or 'to', got '{}'", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetText(String),
    Translate,
    Swap,
    SourceLanguage(String),
    TargetLanguage(String),
    Copy(Side),
    Speak(Side),
    Languages,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Type text to set the source text, or a command:
  :translate, :t      translate the source text
  :swap               swap source and target languages
  :from <code>        set the source language (e.g. en-GB)
  :to <code>          set the target language (e.g. hi-IN)
  :copy from|to       copy a text box to the clipboard
  :speak from|to      read a text box aloud
  :clear              clear the source text
  :langs              list language codes
  :show               show the widget
  :help               show this help
  :quit               exit
Start a line with '::' to enter text beginning with ':'.";

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        if let Some(escaped) = line.strip_prefix("::") {
            return Ok(Command::SetText(format!(":{}", escaped)));
        }

        let Some(command) = line.strip_prefix(':') else {
            if line.is_empty() {
                return Ok(Command::Show);
            }
            return Ok(Command::SetText(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        if parts.next().is_some() {
            bail!("Too many arguments for ':{}'", name);
        }

        let parsed = match (name, arg) {
            ("translate" | "t", None) => Command::Translate,
            ("swap", None) => Command::Swap,
            ("from", Some(code)) => Command::SourceLanguage(code.to_string()),
            ("to", Some(code)) => Command::TargetLanguage(code.to_string()),
            ("copy", Some(side)) => Command::Copy(Side::parse(side)?),
            ("speak", Some(side)) => Command::Speak(Side::parse(side)?),
            ("clear", None) => Command::SetText(String::new()),
            ("langs" | "languages", None) => Command::Languages,
            ("show", None) => Command::Show,
            ("help" | "h" | "?", None) => Command::Help,
            ("quit" | "q" | "exit", None) => Command::Quit,
            ("from" | "to" | "copy" | "speak", None) => {
                bail!("':{}' needs an argument", name)
            }
            (_, Some(_)) if is_known(name) => bail!("':{}' takes no argument", name),
            _ => bail!("Unknown command ':{}' (try :help)", name),
        };
        Ok(parsed)
    }
}

fn is_known(name: &str) -> bool {
    matches!(
        name,
        "translate" | "t" | "swap" | "clear" | "langs" | "languages" | "show" | "help" | "h"
            | "?" | "quit" | "q" | "exit"
    )
}
