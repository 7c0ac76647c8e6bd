//! Speech output: hands text to a local synthesizer and forgets about it.
//!
//! Backends:
//! - `CommandSpeech` spawns `espeak-ng` (or `say` on macOS) without waiting
//! - `NoopSpeech` discards everything
//!
//! There is no return channel. If the synthesizer is missing or rejects the
//! voice, the failure is logged and the caller never hears about it.

use crate::catalog::Language;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Fire-and-forget speech capability.
pub trait SpeechSink: Send + Sync {
    fn speak(&self, text: &str, language: Language);
}

/// Speaks by spawning a command-line synthesizer.
///
/// The child is reaped on a detached thread, so this works with or without a
/// tokio runtime. Overlapping calls overlap audibly unless the synthesizer
/// queues them.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    bin: String,
}

impl CommandSpeech {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    /// Arguments passed to the synthesizer for one utterance.
    ///
    /// The text always follows `--` so a leading dash is spoken, not parsed.
    fn args(&self, text: &str, language: Language) -> Vec<String> {
        if self.is_say() {
            // `say` picks the system voice; voice names are not language codes
            vec!["--".to_string(), text.to_string()]
        } else {
            vec![
                "-v".to_string(),
                language.primary_subtag(),
                "--".to_string(),
                text.to_string(),
            ]
        }
    }

    fn is_say(&self) -> bool {
        std::path::Path::new(&self.bin)
            .file_name()
            .map(|name| name == "say")
            .unwrap_or(false)
    }
}

impl SpeechSink for CommandSpeech {
    fn speak(&self, text: &str, language: Language) {
        let args = self.args(text, language);
        debug!("Speaking {} chars in {}", text.chars().count(), language.code());

        let spawned = Command::new(&self.bin)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                std::thread::spawn(move || {
                    if let Err(e) = child.wait() {
                        warn!("Speech synthesizer did not exit cleanly: {}", e);
                    }
                });
            }
            Err(e) => warn!("Speech synthesizer '{}' unavailable: {}", self.bin, e),
        }
    }
}

/// Speech sink that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpeech;

impl SpeechSink for NoopSpeech {
    fn speak(&self, _text: &str, language: Language) {
        debug!("Speech disabled, dropping utterance in {}", language.code());
    }
}
