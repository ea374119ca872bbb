//! Console output formatter for mentoring sessions

use colored::Colorize;
use mentor_application::GatewayError;
use mentor_domain::{Module, Role, Turn};

/// Formats screens and transcripts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Selection screen shown before a module is chosen
    pub fn welcome() -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Welcome to AI Chatbot Mentor"));
        output.push('\n');
        output.push_str("Please select a learning module to begin your mentoring session.\n\n");
        output.push_str(&Self::module_menu());
        output.push_str(&format!(
            "\n{}\n",
            "Enter a number or a module name (Ctrl-D to exit).".dimmed()
        ));
        output
    }

    /// Numbered list of modules in menu order
    pub fn module_menu() -> String {
        Module::ALL
            .iter()
            .enumerate()
            .map(|(i, module)| {
                format!(
                    "  {:>2}. {:<34} {}\n",
                    i + 1,
                    module.title(),
                    module.as_str().dimmed()
                )
            })
            .collect()
    }

    /// Header printed when a session starts
    pub fn chat_header(module: Module) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("{} AI Mentor", module.title())));
        output.push('\n');
        output.push_str(&format!(
            "{} Hello! I'm your personal {} mentor. Ask me anything related to {}.\n",
            Self::label(Role::Assistant),
            module.title(),
            module.title()
        ));
        output.push_str(&format!(
            "\n{}\n",
            "Type /help for commands.".dimmed()
        ));
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  /help, /h, /?        - Show this help\n");
        output.push_str("  /download            - Save the conversation to a text file\n");
        output.push_str("  /transcript          - Show the conversation so far\n");
        output.push_str("  /module [name]       - Switch module (clears the conversation)\n");
        output.push_str("  /quit, /exit, /q     - Exit chat\n");
        output
    }

    /// Whole transcript with colored speaker labels
    pub fn transcript(turns: &[Turn]) -> String {
        if turns.is_empty() {
            return format!("{}\n", "No messages yet.".dimmed());
        }
        turns
            .iter()
            .map(|turn| format!("{} {}\n\n", Self::label(turn.role), turn.content))
            .collect()
    }

    /// Notice for provider failures other than quota exhaustion
    pub fn provider_error(error: &GatewayError) -> String {
        format!(
            "{} the mentor could not respond ({})",
            "Error:".red().bold(),
            error
        )
    }

    pub fn label(role: Role) -> String {
        let label = format!("{}:", role.label());
        match role {
            Role::User => label.cyan().bold().to_string(),
            Role::Assistant => label.green().bold().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_lists_every_module() {
        let welcome = ConsoleFormatter::welcome();
        assert!(welcome.contains("Welcome to AI Chatbot Mentor"));
        assert!(welcome.contains("Please select a learning module to begin your mentoring session."));
        for module in Module::ALL {
            assert!(welcome.contains(module.title()));
        }
    }

    #[test]
    fn test_menu_numbering() {
        let menu = ConsoleFormatter::module_menu();
        let lines: Vec<&str> = menu.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].trim_start().starts_with("1. Python"));
        assert!(lines[7].trim_start().starts_with("8. Agentic AI"));
    }

    #[test]
    fn test_chat_header_greets_with_title() {
        let header = ConsoleFormatter::chat_header(Module::Ml);
        assert!(header.contains("Machine Learning (ML) AI Mentor"));
        assert!(header.contains(
            "Hello! I'm your personal Machine Learning (ML) mentor. Ask me anything related to Machine Learning (ML)."
        ));
    }

    #[test]
    fn test_transcript() {
        let turns = vec![Turn::user("Hi"), Turn::assistant("Hello")];
        let output = ConsoleFormatter::transcript(&turns);
        assert!(output.contains("User:"));
        assert!(output.contains("Hi"));
        assert!(output.contains("Mentor:"));
        assert!(output.contains("Hello"));

        assert!(ConsoleFormatter::transcript(&[]).contains("No messages yet."));
    }

    #[test]
    fn test_provider_error_notice() {
        let notice =
            ConsoleFormatter::provider_error(&GatewayError::ConnectionError("refused".into()));
        assert!(notice.contains("the mentor could not respond (Connection error: refused)"));
    }
}
