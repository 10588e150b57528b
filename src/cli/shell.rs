use std::{
    borrow::Cow,
    collections::HashMap,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::io::print_info;

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("EXPENSE_TRACKER_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context)));
    print_info("Expense Tracker. Type `help` to see available commands.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                run_line(context, trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                print_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        run_line(context, &line?);
    }
    Ok(())
}

fn run_line(context: &mut ShellContext, line: &str) {
    match context.process_line(line) {
        Ok(LoopControl::Continue) | Ok(LoopControl::Exit) => {}
        Err(err) => context.report_error(err),
    }
}

/// Tab completion over command names and their fixed argument values.
struct CommandHelper {
    commands: Vec<String>,
    arguments: HashMap<String, Vec<String>>,
}

impl CommandHelper {
    fn new(context: &ShellContext) -> Self {
        let mut commands: Vec<String> = context
            .command_names()
            .into_iter()
            .map(str::to_ascii_lowercase)
            .collect();
        commands.sort();
        commands.dedup();

        let arguments = context
            .registry
            .list()
            .into_iter()
            .filter(|entry| !entry.arguments.is_empty())
            .map(|entry| {
                let values = entry.arguments.iter().map(|v| v.to_string()).collect();
                (entry.name.to_string(), values)
            })
            .collect();

        Self {
            commands,
            arguments,
        }
    }

    fn candidates(&self, prefix: &str) -> Vec<&String> {
        let trimmed = prefix.trim_start();
        match trimmed.split_once(char::is_whitespace) {
            None => self
                .commands
                .iter()
                .filter(|name| name.starts_with(&trimmed.to_ascii_lowercase()))
                .collect(),
            Some((command, rest)) => {
                let rest = rest.trim_start();
                if rest.contains(char::is_whitespace) {
                    return Vec::new();
                }
                let needle = rest.to_ascii_lowercase();
                self.arguments
                    .get(&command.to_ascii_lowercase())
                    .map(|values| {
                        values
                            .iter()
                            .filter(|value| value.starts_with(&needle))
                            .collect()
                    })
                    .unwrap_or_default()
            }
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let pairs = self
            .candidates(prefix)
            .into_iter()
            .map(|value| Pair {
                display: value.clone(),
                replacement: value.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
