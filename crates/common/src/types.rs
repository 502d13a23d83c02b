/// Review status of a homework submission, as reported by the homework API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Parse the API's status code. Returns `None` for anything unrecognized.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Verdict sentence sent to the chat for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The validated newest submission from an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
    pub reviewer_comment: Option<String>,
    pub date_updated: Option<String>,
}

impl HomeworkRecord {
    /// Human-readable notification text for this record.
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}
