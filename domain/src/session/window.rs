//! Bounded recent-history view fed to the model

use super::entities::Turn;

/// Number of turns the mentor sees by default
pub const DEFAULT_CONTEXT_WINDOW: usize = 6;

/// The last N turns of a transcript (borrowed view, never stored)
///
/// Rendered as one `"<User|Mentor>: <content>"` line per turn.
#[derive(Debug, Clone, Copy)]
pub struct ContextWindow<'a> {
    turns: &'a [Turn],
}

impl<'a> ContextWindow<'a> {
    pub fn from_transcript(transcript: &'a [Turn], size: usize) -> Self {
        let start = transcript.len().saturating_sub(size);
        Self {
            turns: &transcript[start..],
        }
    }

    pub fn empty() -> Self {
        Self { turns: &[] }
    }

    pub fn turns(&self) -> &'a [Turn] {
        self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|turn| format!("{}: {}\n", turn.role.label(), turn.content))
            .collect()
    }
}

impl std::fmt::Display for ContextWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(n: usize) -> Vec<Turn> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Turn::user(format!("q{}", i))
                } else {
                    Turn::assistant(format!("a{}", i))
                }
            })
            .collect()
    }

    #[test]
    fn test_window_keeps_only_last_turns() {
        let turns = transcript(20);
        let window = ContextWindow::from_transcript(&turns, DEFAULT_CONTEXT_WINDOW);
        assert_eq!(window.len(), 6);
        assert_eq!(window.turns()[0].content, "q14");
        assert_eq!(window.turns()[5].content, "a19");

        let rendered = window.render();
        assert_eq!(rendered.lines().count(), 6);
        assert!(!rendered.contains("q12"));
        assert!(!rendered.contains("a13"));
    }

    #[test]
    fn test_short_transcript_is_taken_whole() {
        let turns = transcript(3);
        let window = ContextWindow::from_transcript(&turns, DEFAULT_CONTEXT_WINDOW);
        assert_eq!(window.len(), 3);
        assert_eq!(window.render(), "User: q0\nMentor: a1\nUser: q2\n");
    }

    #[test]
    fn test_empty_window_renders_nothing() {
        assert!(ContextWindow::empty().is_empty());
        assert_eq!(ContextWindow::empty().render(), "");
        let none: Vec<Turn> = Vec::new();
        assert_eq!(ContextWindow::from_transcript(&none, 6).to_string(), "");
    }

    #[test]
    fn test_zero_size_window() {
        let turns = transcript(4);
        assert!(ContextWindow::from_transcript(&turns, 0).is_empty());
    }
}
