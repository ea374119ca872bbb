//! REPL (Read-Eval-Print Loop) for mentoring sessions

use super::download::write_transcript;
use super::selection::parse_selection;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::stream::StreamPrinter;
use colored::Colorize;
use mentor_application::{Reply, SessionController, SubmitError};
use mentor_domain::Module;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Result of handling a slash command
enum CommandResult {
    Continue,
    Exit,
}

/// One line read at the chat prompt
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    /// Trimmed slash command with its arguments
    Command(&'a str),
    /// The question exactly as typed
    Question(&'a str),
}

impl<'a> Input<'a> {
    fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Input::Blank
        } else if trimmed.starts_with('/') {
            Input::Command(trimmed)
        } else {
            Input::Question(line)
        }
    }
}

/// Interactive mentoring REPL
///
/// Owns the [`SessionController`]; the controller's transcript is the only
/// conversation state.
pub struct MentorRepl {
    controller: SessionController,
    config: ReplConfig,
}

impl MentorRepl {
    pub fn new(controller: SessionController, config: ReplConfig) -> Self {
        Self { controller, config }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Run the interactive REPL
    ///
    /// Without `initial`, the selection screen is shown first.
    pub async fn run(&mut self, initial: Option<Module>) -> io::Result<()> {
        let mut editor = self.build_editor();

        let module = match initial {
            Some(module) => module,
            None => match Self::select_module(&mut editor)? {
                Some(module) => module,
                None => {
                    println!("Bye!");
                    return Ok(());
                }
            },
        };
        self.begin(module);

        loop {
            let prompt = Self::chat_prompt(self.controller.module());
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match Input::classify(&line) {
                    Input::Blank => continue,
                    Input::Command(command) => match self.handle_command(command, &mut editor)? {
                        CommandResult::Exit => break,
                        CommandResult::Continue => continue,
                    },
                    Input::Question(question) => self.process_question(question).await,
                },
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }

    fn build_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_file.clone() else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    fn chat_prompt(module: Option<Module>) -> DefaultPrompt {
        let left = module.map(|m| m.as_str()).unwrap_or("mentor").to_string();
        DefaultPrompt::new(DefaultPromptSegment::Basic(left), DefaultPromptSegment::Empty)
    }

    /// Show the selection screen until a module is chosen; `None` on Ctrl-D.
    fn select_module(editor: &mut Reedline) -> io::Result<Option<Module>> {
        println!();
        println!("{}", ConsoleFormatter::welcome());

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("module".to_string()),
            DefaultPromptSegment::Empty,
        );
        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match parse_selection(line) {
                        Some(module) => return Ok(Some(module)),
                        None => println!(
                            "{} '{}' is not a module. Pick 1-{} or a module name.",
                            "Unknown:".yellow(),
                            line,
                            Module::ALL.len()
                        ),
                    }
                }
                Signal::CtrlC => continue,
                Signal::CtrlD => return Ok(None),
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }
    }

    fn begin(&mut self, module: Module) {
        self.controller.start_session(module);
        println!();
        println!("{}", ConsoleFormatter::chat_header(module));
    }

    /// Handle slash commands
    fn handle_command(&mut self, line: &str, editor: &mut Reedline) -> io::Result<CommandResult> {
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return Ok(CommandResult::Exit);
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("{}", ConsoleFormatter::help());
            }
            "/transcript" => {
                println!();
                print!("{}", ConsoleFormatter::transcript(self.controller.transcript()));
            }
            "/download" => self.download(),
            "/module" if arg.is_empty() => {
                if let Some(module) = Self::select_module(editor)? {
                    self.begin(module);
                }
            }
            "/module" => match parse_selection(arg) {
                Some(module) => self.begin(module),
                None => println!("{} Invalid module: {}", "Error:".red().bold(), arg),
            },
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        Ok(CommandResult::Continue)
    }

    fn download(&self) {
        if self.controller.transcript().is_empty() {
            println!("Nothing to download yet.");
            return;
        }

        let text = self.controller.export_text();
        match write_transcript(&self.config.export_dir, &text, &chrono::Local::now()) {
            Ok(path) => println!("{} {}", "Saved conversation to".green(), path.display()),
            Err(e) => eprintln!(
                "{} could not save conversation to {}: {}",
                "Error:".red().bold(),
                self.config.export_dir.display(),
                e
            ),
        }
    }

    async fn process_question(&mut self, question: &str) {
        println!();
        let printer = StreamPrinter::new(self.config.show_progress);

        match self.controller.submit(question, &printer).await {
            Ok(Reply::Answered(text)) => debug!("Reply complete ({} bytes)", text.len()),
            Ok(Reply::QuotaExceeded) => debug!("Quota apology shown"),
            Err(SubmitError::Provider(e)) => {
                printer.abort();
                eprintln!("{}", ConsoleFormatter::provider_error(&e));
            }
            Err(e) => {
                printer.abort();
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
        }
        println!();
    }
}
