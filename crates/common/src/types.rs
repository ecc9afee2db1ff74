use std::str::FromStr;

use crate::error::BotError;

/// Key of the submission list in the homework-status payload.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key of the server-reported timestamp in the homework-status payload.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Key of the homework title inside a submission record.
pub const HOMEWORK_NAME_KEY: &str = "homework_name";

/// Key of the review status inside a submission record.
pub const STATUS_KEY: &str = "status";

/// Review status of a homework submission. Closed set: anything else the API
/// reports is an error, never silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 3] = [
        ReviewStatus::Approved,
        ReviewStatus::Reviewing,
        ReviewStatus::Rejected,
    ];

    /// Fixed sentence sent to the chat for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| BotError::UnknownStatus(Some(s.to_string())))
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
