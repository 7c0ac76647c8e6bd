//! Widget state container and its transitions.
//!
//! Every mutation of the five widget values goes through a method here, so
//! the invariants hold no matter which front-end drives the widget:
//! - both language values are catalog codes (enforced by `Language`)
//! - target text only changes when a translation completes successfully
//! - at most one translation is in flight

use crate::catalog::Language;
use crate::translation::{TranslationError, TranslationRequest};
use std::fmt;
use tracing::{error, info, warn};

/// Where the translate action stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TranslationStatus {
    #[default]
    Idle,
    /// A request is in flight; the translate trigger is disabled
    Translating,
    /// The last request failed. Behaves like `Idle` for every transition.
    Failed { message: String },
}

impl TranslationStatus {
    /// The busy flag.
    pub fn is_busy(&self) -> bool {
        matches!(self, TranslationStatus::Translating)
    }

    /// Label for the translate trigger
    pub fn action_label(&self) -> &'static str {
        if self.is_busy() {
            "Translating..."
        } else {
            "Translate Text"
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            TranslationStatus::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorState {
    source_text: String,
    source_language: Language,
    target_text: String,
    target_language: Language,
    status: TranslationStatus,
}

impl TranslatorState {
    pub fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            source_text: String::new(),
            source_language,
            target_text: String::new(),
            target_language,
            status: TranslationStatus::Idle,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn source_language(&self) -> Language {
        self.source_language
    }

    pub fn target_language(&self) -> Language {
        self.target_language
    }

    pub fn status(&self) -> &TranslationStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    /// Replace the source text. Leaves the target text and any in-flight request alone.
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    pub fn set_source_language(&mut self, language: Language) {
        self.source_language = language;
    }

    pub fn set_target_language(&mut self, language: Language) {
        self.target_language = language;
    }

    /// Exchange source and target languages in one step. Texts are untouched.
    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
    }

    /// Enter `Translating` and capture what to translate.
    ///
    /// Returns `None` while another request is in flight.
    pub fn begin_translation(&mut self) -> Option<TranslationRequest> {
        if self.is_busy() {
            warn!("Translation already in progress, ignoring trigger");
            return None;
        }

        let request = TranslationRequest::new(
            self.source_text.clone(),
            self.source_language,
            self.target_language,
        );
        info!("Translating {}", request.langpair());
        self.status = TranslationStatus::Translating;
        Some(request)
    }

    /// Apply the resolution of the in-flight request.
    ///
    /// On success the target text becomes the result verbatim. On failure the
    /// target text is kept and the status moves to `Failed`. Returns `false`
    /// (and changes nothing) when no request is in flight.
    pub fn complete_translation(&mut self, outcome: Result<String, TranslationError>) -> bool {
        if !self.is_busy() {
            warn!("Dropping translation result with no request in flight");
            return false;
        }

        match outcome {
            Ok(translated) => {
                info!("Translation complete ({} chars)", translated.chars().count());
                self.target_text = translated;
                self.status = TranslationStatus::Idle;
            }
            Err(e) => {
                error!("Translation failed: {}", e);
                self.status = TranslationStatus::Failed {
                    message: e.to_string(),
                };
            }
        }
        true
    }

    /// Give up on the in-flight request without a result.
    ///
    /// Returns to `Idle` with the target text untouched, so translate can be
    /// triggered again. Returns `false` when nothing is in flight.
    pub fn abandon_translation(&mut self) -> bool {
        if !self.is_busy() {
            return false;
        }

        warn!("Translation abandoned before it resolved");
        self.status = TranslationStatus::Idle;
        true
    }
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self::new(Language::ENGLISH_GB, Language::HINDI)
    }
}

impl fmt::Display for TranslatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  <->  {}", self.source_language, self.target_language)?;
        writeln!(f, "from: {}", self.source_text)?;
        writeln!(f, "to:   {}", self.target_text)?;
        write!(f, "[{}]", self.status.action_label())?;
        if let Some(message) = self.status.error_message() {
            write!(f, "  error: {}", message)?;
        }
        Ok(())
    }
}
