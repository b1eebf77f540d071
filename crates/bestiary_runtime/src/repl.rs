//! The grammar explorer.
//!
//! Each line is a command naming a grammar followed by the text to parse:
//!
//! ```text
//! :action Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: 5 (1d6 + 2) slashing damage.
//! :feature Web (Recharge 5-6) | The spider shoots webbing.
//! :movement 30 ft., climb 30 ft.
//! ```
//!
//! Text without a command is parsed as an action. For actions, whatever
//! the attack grammar left unconsumed is printed too, which makes gaps in
//! grammar coverage easy to spot.

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use bestiary_combinator::fold_case;
use bestiary_foundation::{Error, ErrorContext, Result};
use bestiary_grammar::auxiliary::{parse_armor_class, parse_hit_points, parse_movement, parse_type_line};
use bestiary_grammar::{ActionGrammar, GrammarConfig, dice_expression_matches, parse_feature};
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Commands understood by the explorer.
pub const COMMANDS: &[&str] = &[
    ":action", ":feature", ":movement", ":ac", ":hp", ":type", ":dice", ":help", ":quit",
];

/// What evaluating one line produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Output to print; the session continues.
    Output(String),
    /// The session should end.
    Quit,
}

/// The interactive grammar explorer.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    config: GrammarConfig,
    actions: ActionGrammar,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new(COMMANDS)?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and default grammars.
    pub fn with_editor(editor: E) -> Self {
        let config = GrammarConfig::default();
        Self {
            editor,
            actions: ActionGrammar::new(&config),
            config,
            show_banner: true,
            prompt: "bestiary> ".to_string(),
        }
    }

    /// Replaces the grammar configuration.
    #[must_use]
    pub fn with_config(mut self, config: GrammarConfig) -> Self {
        self.actions = ActionGrammar::new(&config);
        self.config = config;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the editor.
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Evaluation::Output(output)) => println!("{output}"),
                Ok(Evaluation::Quit) => break,
                Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or a malformed `:feature`.
    pub fn eval(&self, line: &str) -> Result<Evaluation> {
        let line = line.trim();
        let (command, text) = if line.starts_with(':') {
            line.split_once(char::is_whitespace)
                .map_or((line, ""), |(command, text)| (command, text.trim()))
        } else {
            (":action", line)
        };
        debug!(command, "explorer command");

        let output = match command {
            ":action" => self.explain_action(text),
            ":feature" => self.explain_feature(text)?,
            ":movement" => pretty(&parse_movement(text)),
            ":ac" => pretty(&parse_armor_class(text)),
            ":hp" => pretty(&parse_hit_points(text)),
            ":type" => pretty(&parse_type_line(text)),
            ":dice" => pretty(&dice_expression_matches(&fold_case(text))),
            ":help" => HELP.to_string(),
            ":quit" | ":q" => return Ok(Evaluation::Quit),
            other => return Err(Error::unknown_command(other)),
        };
        Ok(Evaluation::Output(output))
    }

    /// Evaluates every non-blank line of a file, skipping `#` comments.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line fails.
    pub fn eval_file(&self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;

        for (index, line) in source.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let evaluation = self.eval(line).map_err(|e| {
                e.with_context(
                    ErrorContext::new()
                        .with_source(path.display().to_string())
                        .with_line(index + 1),
                )
            })?;
            match evaluation {
                Evaluation::Output(output) => println!("{output}"),
                Evaluation::Quit => break,
            }
        }
        Ok(())
    }

    fn explain_action(&self, text: &str) -> String {
        let is_residue = |rest: &str| rest.chars().all(|c| c.is_whitespace() || c.is_ascii_punctuation());
        match self.actions.parse_raw(text) {
            Some((action, remainder)) if is_residue(&remainder) => pretty(&action),
            Some((action, remainder)) => {
                format!("{}\n\x1b[33munparsed:\x1b[0m {remainder}", pretty(&action))
            }
            None => "\x1b[33mno match\x1b[0m".to_string(),
        }
    }

    fn explain_feature(&self, text: &str) -> Result<String> {
        let (name, description) = text
            .split_once('|')
            .ok_or_else(|| Error::internal(":feature expects NAME | DESCRIPTION"))?;
        let parsed = parse_feature(name.trim(), description.trim(), &self.config);
        if parsed.is_empty() {
            return Ok("\x1b[33mno match\x1b[0m".to_string());
        }
        Ok(pretty(&parsed))
    }
}

fn pretty<T: Debug>(value: &T) -> String {
    format!("{value:#?}")
}

fn print_banner() {
    println!("\x1b[1mBestiary\x1b[0m grammar explorer {}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for commands, Ctrl+D to exit.\n");
}

const HELP: &str = "\
:action TEXT                 Parse an attack or saving throw action
:feature NAME | DESCRIPTION  Parse a feature's usage limit, spellcasting, and annotations
:movement TEXT               Parse a speed line, e.g. 30 ft., fly 60 ft.
:ac TEXT                     Parse an armor class, e.g. 15 (natural armor)
:hp TEXT                     Parse hit points, e.g. 7 (2d6)
:type TEXT                   Parse a type line, e.g. Medium humanoid (goblinoid), neutral evil
:dice TEXT                   Find dice expressions in TEXT
:help                        Show this help
:quit                        Exit";
