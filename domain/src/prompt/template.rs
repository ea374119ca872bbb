//! Prompt template for module-scoped mentoring

use crate::core::module::Module;
use crate::session::window::ContextWindow;

/// Builds the instruction text sent to the model for each turn
///
/// Domain scoping is an instruction to the model, not a check: nothing
/// verifies that the reply actually stayed within the module.
pub struct MentorPrompt;

impl MentorPrompt {
    /// The only reply allowed for off-topic questions
    pub const REFUSAL: &'static str =
        "Sorry, I don't know about this question. Please ask something related to the selected module.";

    /// Role statement and rules for the selected module
    pub fn system(module: Module) -> String {
        format!(
            r#"
You are a module-specific AI mentor.

Selected Module: {module}

STRICT RULE:
If the question is NOT related to "{module}", reply ONLY with:
"{refusal}"

Rules:
- Answer only within the selected module
- Be clear, structured, and educational
- Do not hallucinate
- Provide examples where applicable
- If the user shares their name or something about themselves, listen carefully and respond accordingly
- Be friendly and supportive
- If the user says bye or wishes to end the session, respond politely and end the session

"#,
            module = module.title(),
            refusal = Self::REFUSAL,
        )
    }

    /// Full instruction: rules, recent conversation, then the question
    pub fn build(module: Module, context: &ContextWindow<'_>, question: &str) -> String {
        format!(
            "{}\n\nConversation:\n{}\n\nUser Question:\n{}\nMentor:",
            Self::system(module),
            context.render(),
            question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Turn;

    #[test]
    fn test_system_names_module_and_refusal() {
        let prompt = MentorPrompt::system(Module::Ml);
        assert!(prompt.contains("Selected Module: Machine Learning (ML)"));
        assert!(prompt.contains(r#"If the question is NOT related to "Machine Learning (ML)""#));
        assert!(prompt.contains(MentorPrompt::REFUSAL));
        assert!(prompt.contains("- Do not hallucinate"));
    }

    #[test]
    fn test_build_layout() {
        let turns = vec![Turn::user("What is a JOIN?")];
        let window = ContextWindow::from_transcript(&turns, 6);
        let prompt = MentorPrompt::build(Module::Sql, &window, "What is a JOIN?");

        assert!(prompt.starts_with(&MentorPrompt::system(Module::Sql)));
        assert!(prompt.ends_with(
            "\n\nConversation:\nUser: What is a JOIN?\n\n\nUser Question:\nWhat is a JOIN?\nMentor:"
        ));
    }

    #[test]
    fn test_build_with_empty_context() {
        let prompt = MentorPrompt::build(Module::Python, &ContextWindow::empty(), "Hi");
        assert!(prompt.ends_with("\n\nConversation:\n\n\nUser Question:\nHi\nMentor:"));
    }

    #[test]
    fn test_refusal_sentence_is_exact() {
        assert_eq!(
            MentorPrompt::REFUSAL,
            "Sorry, I don't know about this question. Please ask something related to the selected module."
        );
    }
}
