//! Plain-text transcript export

use super::entities::Turn;
use chrono::{DateTime, TimeZone};

/// Prefix of downloaded transcript files
pub const EXPORT_FILE_PREFIX: &str = "ai_chatbot_mentor";

/// Render turns as `"<User|Mentor>: <content>\n\n"` blocks, in order.
pub fn export_text(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|turn| format!("{}: {}\n\n", turn.role.label(), turn.content))
        .collect()
}

/// `ai_chatbot_mentor_YYYYMMDD_HHMMSS.txt` for the given instant
pub fn export_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.txt", EXPORT_FILE_PREFIX, at.format("%Y%m%d_%H%M%S"))
}
