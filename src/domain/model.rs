use indexmap::IndexMap;

/// Ordered key to value mapping of a resource file.
///
/// Re-inserting an existing key replaces its value but keeps the position of
/// the first occurrence.
pub type ResourceMap = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// How æ, ø and å should appear in translated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NordicLetters {
    /// `\u00e6`, `\u00f8` and `\u00e5` escape sequences.
    #[default]
    Escaped,
    /// Raw UTF-8 letters.
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStatus {
    Translated,
    /// Every attempt failed.
    FallbackExhausted,
    /// The API answered with an empty choice list.
    FallbackNoChoices,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    /// 1-based.
    pub attempt: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub status: TranslationStatus,
    pub failed_attempts: Vec<FailedAttempt>,
}

impl Translation {
    pub fn is_fallback(&self) -> bool {
        self.status != TranslationStatus::Translated
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationReport {
    pub translated: ResourceMap,
    /// Keys whose original value was passed through untranslated.
    pub fallback_keys: Vec<String>,
}

/// Completed/total counter for the per-entry progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Truncated integer percentage; zero when there is nothing to do.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }
}
