//! Line editor abstraction for the grammar explorer.
//!
//! The REPL talks to a [`LineEditor`] so tests and batch runs can feed it
//! lines without a terminal.

use std::borrow::Cow;
use std::collections::VecDeque;

use bestiary_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline providing command completion and history hints.
#[derive(Helper, Completer, Hinter, Validator)]
struct ExplorerHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ExplorerHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the explorer's `:command` names at the start of a line.
struct CommandCompleter {
    commands: &'static [&'static str],
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[..pos];
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|command| command.starts_with(word))
            .map(|command| Pair {
                display: (*command).to_string(),
                replacement: format!("{command} "),
            })
            .collect();

        Ok((0, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ExplorerHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor completing the given commands.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(commands: &'static [&'static str]) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = ExplorerHelper {
            completer: CommandCompleter { commands },
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// An editor replaying a fixed list of lines, then reporting EOF.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    /// Creates an editor that will return `lines` in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            history: Vec::new(),
        }
    }

    /// Lines added to history so far.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}
