//! Learning module value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Subject domain of a mentoring session (Value Object)
///
/// The set is closed: a session can only be started for one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Python,
    Sql,
    PowerBi,
    Eda,
    Ml,
    Dl,
    GenAi,
    AgenticAi,
}

impl Module {
    /// All modules, in menu order.
    pub const ALL: [Module; 8] = [
        Module::Python,
        Module::Sql,
        Module::PowerBi,
        Module::Eda,
        Module::Ml,
        Module::Dl,
        Module::GenAi,
        Module::AgenticAi,
    ];

    /// Stable identifier used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Python => "python",
            Module::Sql => "sql",
            Module::PowerBi => "power-bi",
            Module::Eda => "eda",
            Module::Ml => "ml",
            Module::Dl => "dl",
            Module::GenAi => "gen-ai",
            Module::AgenticAi => "agentic-ai",
        }
    }

    /// Short human-readable name
    pub fn short_name(&self) -> &'static str {
        match self {
            Module::Python => "Python",
            Module::Sql => "SQL",
            Module::PowerBi => "Power BI",
            Module::Eda => "EDA",
            Module::Ml => "ML",
            Module::Dl => "DL",
            Module::GenAi => "Gen AI",
            Module::AgenticAi => "Agentic AI",
        }
    }

    /// Title shown on the selection screen and substituted into the prompt
    pub fn title(&self) -> &'static str {
        match self {
            Module::Python => "Python",
            Module::Sql => "SQL",
            Module::PowerBi => "Power BI",
            Module::Eda => "Exploratory Data Analysis (EDA)",
            Module::Ml => "Machine Learning (ML)",
            Module::Dl => "Deep Learning (DL)",
            Module::GenAi => "Generative AI (Gen AI)",
            Module::AgenticAi => "Agentic AI",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl std::str::FromStr for Module {
    type Err = DomainError;

    /// Accepts the identifier, the short name or the full title, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Module::ALL
            .into_iter()
            .find(|m| {
                wanted.eq_ignore_ascii_case(m.as_str())
                    || wanted.eq_ignore_ascii_case(m.short_name())
                    || wanted.eq_ignore_ascii_case(m.title())
            })
            .ok_or_else(|| DomainError::InvalidModule(s.to_string()))
    }
}

impl Serialize for Module {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Module {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
