//! Translator widget: owns the state and drives the collaborators.
//!
//! The widget is single-owner and event-driven. A translation can be run in
//! one call with [`TranslatorWidget::translate`], or split into
//! [`TranslatorWidget::begin_translation`] and
//! [`TranslatorWidget::finish_translation`] so the owner keeps handling
//! input while the request is in flight:
//!
//! ```rust,ignore
//! if let Some(pending) = widget.begin_translation() {
//!     let outcome = pending.run().await; // may run on another task
//!     widget.finish_translation(outcome);
//! }
//! ```
//!
//! A caller that drops a `PendingTranslation` (or its `run` future) without
//! delivering an outcome must call [`TranslatorWidget::abandon_translation`],
//! otherwise the widget stays busy.

mod state;

pub use state::{TranslationStatus, TranslatorState};

use crate::catalog::Language;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::speech::{CommandSpeech, NoopSpeech, SpeechSink};
use crate::translation::{MyMemoryClient, TranslationClient, TranslationError, TranslationRequest};
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

pub type TranslationOutcome = Result<String, TranslationError>;

/// A started translation, detached from the widget so it can be awaited elsewhere.
#[must_use = "finish or abandon the translation, or the widget stays busy"]
pub struct PendingTranslation {
    client: Arc<dyn TranslationClient>,
    request: TranslationRequest,
}

impl PendingTranslation {
    pub fn request(&self) -> &TranslationRequest {
        &self.request
    }

    /// Issue the request. Exactly one call to the translation client.
    pub async fn run(self) -> TranslationOutcome {
        self.client.translate(&self.request).await
    }
}

pub struct TranslatorWidget {
    state: TranslatorState,
    translator: Arc<dyn TranslationClient>,
    speech: Arc<dyn SpeechSink>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl TranslatorWidget {
    pub fn new(
        state: TranslatorState,
        translator: Arc<dyn TranslationClient>,
        speech: Arc<dyn SpeechSink>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        Self {
            state,
            translator,
            speech,
            clipboard,
        }
    }

    /// Wire up the production collaborators described by `config`.
    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        let translator = Arc::new(MyMemoryClient::new(http, config.translate_api_url.clone()));
        let speech: Arc<dyn SpeechSink> = if config.speech_enabled {
            Arc::new(CommandSpeech::new(config.speech_bin.clone()))
        } else {
            Arc::new(NoopSpeech)
        };

        Self::new(
            TranslatorState::new(config.source_language, config.target_language),
            translator,
            speech,
            Arc::new(SystemClipboard),
        )
    }

    pub fn state(&self) -> &TranslatorState {
        &self.state
    }

    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.state.set_source_text(text);
    }

    /// Select the source language by catalog code. Unknown codes leave state unchanged.
    pub fn select_source_language(&mut self, code: &str) -> Result<Language> {
        let language = Language::from_code(code)?;
        self.state.set_source_language(language);
        Ok(language)
    }

    /// Select the target language by catalog code. Unknown codes leave state unchanged.
    pub fn select_target_language(&mut self, code: &str) -> Result<Language> {
        let language = Language::from_code(code)?;
        self.state.set_target_language(language);
        Ok(language)
    }

    pub fn swap_languages(&mut self) {
        self.state.swap_languages();
    }

    /// Start a translation of the current values, or `None` while one is in flight.
    pub fn begin_translation(&mut self) -> Option<PendingTranslation> {
        let request = self.state.begin_translation()?;
        Some(PendingTranslation {
            client: Arc::clone(&self.translator),
            request,
        })
    }

    /// Apply the outcome of the request started by `begin_translation`.
    pub fn finish_translation(&mut self, outcome: TranslationOutcome) -> bool {
        self.state.complete_translation(outcome)
    }

    /// Release the busy flag of a request whose outcome will never arrive.
    pub fn abandon_translation(&mut self) -> bool {
        self.state.abandon_translation()
    }

    /// Translate and wait for the result. Returns `false` if a translation was
    /// already in flight.
    ///
    /// Dropping the returned future before it resolves abandons the request.
    pub async fn translate(&mut self) -> bool {
        let Some(pending) = self.begin_translation() else {
            return false;
        };
        let guard = InFlight(&mut self.state);
        let outcome = pending.run().await;
        guard.0.complete_translation(outcome)
    }

    pub fn copy_source(&self) {
        self.copy(self.state.source_text());
    }

    pub fn copy_target(&self) {
        self.copy(self.state.target_text());
    }

    pub fn speak_source(&self) {
        self.speech
            .speak(self.state.source_text(), self.state.source_language());
    }

    pub fn speak_target(&self) {
        self.speech
            .speak(self.state.target_text(), self.state.target_language());
    }

    /// Current state as display text
    pub fn render(&self) -> String {
        self.state.to_string()
    }

    fn copy(&self, text: &str) {
        if let Err(e) = self.clipboard.write_text(text) {
            warn!("Copy failed: {}", e);
        }
    }
}

/// Abandons the in-flight request if dropped while still busy
struct InFlight<'a>(&'a mut TranslatorState);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.0.is_busy() {
            self.0.abandon_translation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Doubles ====================

    /// Returns scripted outcomes in order and records every request
    #[derive(Default)]
    struct ScriptedClient {
        outcomes: Mutex<VecDeque<TranslationOutcome>>,
        requests: Mutex<Vec<TranslationRequest>>,
    }

    impl ScriptedClient {
        fn with(outcomes: Vec<TranslationOutcome>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<TranslationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationClient for ScriptedClient {
        async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome {
            self.requests.lock().unwrap().push(request.clone());
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TranslationError::Transport("no script".to_string())))
        }
    }

    /// Never answers within a test's lifetime
    struct HangingClient;

    #[async_trait]
    impl TranslationClient for HangingClient {
        async fn translate(&self, _request: &TranslationRequest) -> TranslationOutcome {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    #[derive(Default)]
    struct RecordingSpeech {
        utterances: Mutex<Vec<(String, Language)>>,
    }

    impl SpeechSink for RecordingSpeech {
        fn speak(&self, text: &str, language: Language) {
            self.utterances
                .lock()
                .unwrap()
                .push((text.to_string(), language));
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Mutex<Vec<String>>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl ClipboardSink for DeniedClipboard {
        fn write_text(&self, _text: &str) -> Result<()> {
            bail!("clipboard access denied")
        }
    }

    struct Harness {
        widget: TranslatorWidget,
        client: Arc<ScriptedClient>,
        speech: Arc<RecordingSpeech>,
        clipboard: Arc<RecordingClipboard>,
    }

    fn harness(outcomes: Vec<TranslationOutcome>) -> Harness {
        let client = ScriptedClient::with(outcomes);
        let speech = Arc::new(RecordingSpeech::default());
        let clipboard = Arc::new(RecordingClipboard::default());
        let widget = TranslatorWidget::new(
            TranslatorState::default(),
            client.clone(),
            speech.clone(),
            clipboard.clone(),
        );
        Harness {
            widget,
            client,
            speech,
            clipboard,
        }
    }

    // ==================== Translate Tests ====================

    #[tokio::test]
    async fn test_translate_hello_world_to_hindi() {
        let mut h = harness(vec![Ok("नमस्ते दुनिया!".to_string())]);
        h.widget.set_source_text("Hello World!");

        assert!(h.widget.translate().await);

        assert_eq!(h.widget.state().target_text(), "नमस्ते दुनिया!");
        assert!(!h.widget.state().is_busy());
        assert_eq!(
            h.client.requests(),
            vec![TranslationRequest::new(
                "Hello World!",
                Language::ENGLISH_GB,
                Language::HINDI
            )]
        );
    }

    #[tokio::test]
    async fn test_translate_empty_text_calls_client() {
        let mut h = harness(vec![Err(TranslationError::Status {
            status: 400,
            body: "NO QUERY SPECIFIED".to_string(),
        })]);

        assert!(h.widget.translate().await);

        let requests = h.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "");
        assert_eq!(h.widget.state().target_text(), "");
        assert!(!h.widget.state().is_busy());
        assert!(h.widget.state().status().error_message().is_some());
    }

    #[tokio::test]
    async fn test_second_trigger_rejected_while_in_flight() {
        let mut h = harness(vec![Ok("one".to_string()), Ok("two".to_string())]);
        h.widget.set_source_text("Hello");

        let pending = h.widget.begin_translation().expect("first trigger");
        assert!(h.widget.begin_translation().is_none());
        assert!(!h.widget.translate().await);

        let outcome = pending.run().await;
        h.widget.finish_translation(outcome);

        assert_eq!(h.client.requests().len(), 1);
        assert_eq!(h.widget.state().target_text(), "one");
    }

    #[tokio::test]
    async fn test_edit_during_flight_keeps_captured_text() {
        let mut h = harness(vec![Ok("नमस्ते दुनिया!".to_string())]);
        h.widget.set_source_text("Hello World!");

        let pending = h.widget.begin_translation().unwrap();
        h.widget.set_source_text("Something else");
        h.widget.swap_languages();
        assert_eq!(pending.request().text, "Hello World!");

        let outcome = pending.run().await;
        h.widget.finish_translation(outcome);

        assert_eq!(h.client.requests()[0].text, "Hello World!");
        assert_eq!(h.client.requests()[0].langpair(), "en-GB|hi-IN");
        assert_eq!(h.widget.state().target_text(), "नमस्ते दुनिया!");
        assert_eq!(h.widget.state().source_text(), "Something else");
    }

    #[test]
    fn test_translate_from_sync_context() {
        let mut h = harness(vec![Ok("Bonjour".to_string())]);
        h.widget.select_target_language("fr-FR").unwrap();
        h.widget.set_source_text("Hello");

        assert!(tokio_test::block_on(h.widget.translate()));
        assert_eq!(h.widget.state().target_text(), "Bonjour");
        assert_eq!(h.client.requests()[0].langpair(), "en-GB|fr-FR");
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let mut h = harness(vec![
            Err(TranslationError::Transport("timeout".to_string())),
            Ok("नमस्ते".to_string()),
        ]);
        h.widget.set_source_text("Hello");

        h.widget.translate().await;
        assert_eq!(h.widget.state().target_text(), "");
        assert!(matches!(
            h.widget.state().status(),
            TranslationStatus::Failed { .. }
        ));

        h.widget.translate().await;
        assert_eq!(h.widget.state().target_text(), "नमस्ते");
        assert_eq!(h.widget.state().status(), &TranslationStatus::Idle);
    }

    // ==================== Language Selection Tests ====================

    #[test]
    fn test_select_unknown_language_leaves_state() {
        let mut h = harness(vec![]);
        assert!(h.widget.select_source_language("xx-XX").is_err());
        assert!(h.widget.select_target_language("").is_err());
        assert_eq!(h.widget.state().source_language(), Language::ENGLISH_GB);
        assert_eq!(h.widget.state().target_language(), Language::HINDI);
    }

    #[test]
    fn test_select_same_language_both_sides() {
        let mut h = harness(vec![]);
        h.widget.select_target_language("en-GB").unwrap();
        h.widget.swap_languages();
        assert_eq!(h.widget.state().source_language(), Language::ENGLISH_GB);
        assert_eq!(h.widget.state().target_language(), Language::ENGLISH_GB);
    }

    #[test]
    fn test_swap_leaves_texts() {
        let mut h = harness(vec![]);
        h.widget.set_source_text("Hello World!");
        h.widget.swap_languages();

        assert_eq!(h.widget.state().source_language().code(), "hi-IN");
        assert_eq!(h.widget.state().target_language().code(), "en-GB");
        assert_eq!(h.widget.state().source_text(), "Hello World!");
        assert!(h.client.requests().is_empty());
    }

    // ==================== Copy / Speak Tests ====================

    #[tokio::test]
    async fn test_copy_is_verbatim() {
        let mut h = harness(vec![Ok("  translated  ".to_string())]);
        h.widget.set_source_text("  Hello World!\n");
        h.widget.translate().await;

        h.widget.copy_source();
        h.widget.copy_target();

        assert_eq!(
            *h.clipboard.writes.lock().unwrap(),
            vec!["  Hello World!\n".to_string(), "  translated  ".to_string()]
        );
    }

    #[test]
    fn test_copy_denied_is_swallowed() {
        let mut widget = TranslatorWidget::new(
            TranslatorState::default(),
            ScriptedClient::with(vec![]),
            Arc::new(RecordingSpeech::default()),
            Arc::new(DeniedClipboard),
        );
        widget.set_source_text("Hello");
        let before = widget.state().clone();

        widget.copy_source();
        assert_eq!(widget.state(), &before);
    }

    #[tokio::test]
    async fn test_speak_uses_matching_language() {
        let mut h = harness(vec![Ok("नमस्ते दुनिया!".to_string())]);
        h.widget.set_source_text("Hello World!");
        h.widget.translate().await;

        h.widget.speak_source();
        h.widget.speak_target();

        assert_eq!(
            *h.speech.utterances.lock().unwrap(),
            vec![
                ("Hello World!".to_string(), Language::ENGLISH_GB),
                ("नमस्ते दुनिया!".to_string(), Language::HINDI),
            ]
        );
    }

    #[tokio::test]
    async fn test_timed_out_translate_releases_busy_flag() {
        let mut widget = TranslatorWidget::new(
            TranslatorState::default(),
            Arc::new(HangingClient),
            Arc::new(RecordingSpeech::default()),
            Arc::new(RecordingClipboard::default()),
        );
        widget.set_source_text("Hello");

        let timed_out =
            tokio::time::timeout(Duration::from_millis(50), widget.translate()).await;

        assert!(timed_out.is_err());
        assert!(!widget.state().is_busy());
        assert_eq!(widget.state().target_text(), "");
        assert!(widget.begin_translation().is_some());
    }

    #[test]
    fn test_dropped_pending_can_be_abandoned() {
        let mut h = harness(vec![Ok("after".to_string())]);
        let pending = h.widget.begin_translation().expect("should start");
        assert!(h.widget.render().contains("[Translating...]"));

        drop(pending);
        assert!(h.widget.abandon_translation());
        assert!(h.widget.render().contains("[Translate Text]"));

        assert!(tokio_test::block_on(h.widget.translate()));
        assert_eq!(h.widget.state().target_text(), "after");
    }

    #[test]
    fn test_from_config_uses_configured_languages() {
        let config = Config {
            source_language: Language::from_code("de-DE").unwrap(),
            speech_enabled: false,
            ..Config::default()
        };
        let widget = TranslatorWidget::from_config(&config, reqwest::Client::new());

        assert_eq!(widget.state().source_language().code(), "de-DE");
        assert_eq!(widget.state().target_language(), Language::HINDI);
    }
}
