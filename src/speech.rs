use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::i18n;
use crate::language::Language;
use crate::tui::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechError {
    NotAllowed,
    NoSpeech,
    Other,
}

/// Lifecycle of one single-shot recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Transcript(String),
    Error(SpeechError),
    Ended,
}

/// Speech capability injected at startup. One `start` call runs one
/// single-shot session (one transcript, no interim results) reporting
/// its lifecycle over the app channel. The trait does not guard
/// re-entrancy; the key handler refuses to start a second session.
pub trait SpeechRecognizer: Send {
    /// Whether the transport the capability runs over permits
    /// microphone access.
    fn secure_context(&self) -> bool;

    /// Begins a session for the given locale. An error here is a
    /// synchronous start failure; everything after a successful start
    /// arrives as `SpeechEvent`s.
    fn start(&mut self, locale: &str, tx: mpsc::UnboundedSender<AppEvent>) -> Result<()>;
}

/// Stand-in recognizer: after a short pause it "hears" one of the
/// localized sample queries, advancing through them session by session.
pub struct SimulatedRecognizer {
    next_sample: usize,
    delay: Duration,
}

impl SimulatedRecognizer {
    pub fn new() -> Self {
        Self {
            next_sample: 0,
            delay: Duration::from_millis(1200),
        }
    }

    fn sample_for(locale: &str, index: usize) -> String {
        let language = if locale == "hi-IN" { Language::Hi } else { Language::En };
        let samples = i18n::strings(language).sample_queries;
        samples[index % samples.len()].to_string()
    }
}

impl SpeechRecognizer for SimulatedRecognizer {
    fn secure_context(&self) -> bool {
        true
    }

    fn start(&mut self, locale: &str, tx: mpsc::UnboundedSender<AppEvent>) -> Result<()> {
        let transcript = Self::sample_for(locale, self.next_sample);
        self.next_sample += 1;
        let delay = self.delay;
        tokio::spawn(async move {
            let _ = tx.send(AppEvent::Speech(SpeechEvent::Started));
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::Speech(SpeechEvent::Transcript(transcript)));
            let _ = tx.send(AppEvent::Speech(SpeechEvent::Ended));
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_recognizer() -> SimulatedRecognizer {
        SimulatedRecognizer {
            next_sample: 0,
            delay: Duration::ZERO,
        }
    }

    async fn run_session(rec: &mut SimulatedRecognizer, locale: &str) -> Vec<SpeechEvent> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        rec.start(locale, tx).unwrap();
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            if let AppEvent::Speech(speech) = event {
                events.push(speech);
            }
        }
        events
    }

    #[tokio::test]
    async fn test_session_reports_started_transcript_ended() {
        let mut rec = instant_recognizer();
        let events = run_session(&mut rec, "hi-IN").await;
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], SpeechEvent::Started);
        match &events[1] {
            SpeechEvent::Transcript(text) => {
                let samples = i18n::strings(Language::Hi).sample_queries;
                assert!(samples.contains(&text.as_str()));
            }
            other => panic!("expected transcript, got {:?}", other),
        }
        assert_eq!(events[2], SpeechEvent::Ended);
    }

    #[tokio::test]
    async fn test_sessions_advance_through_samples() {
        let mut rec = instant_recognizer();
        let first = run_session(&mut rec, "en-US").await;
        let second = run_session(&mut rec, "en-US").await;
        let transcript = |events: &[SpeechEvent]| match &events[1] {
            SpeechEvent::Transcript(text) => text.clone(),
            other => panic!("expected transcript, got {:?}", other),
        };
        assert_ne!(transcript(&first), transcript(&second));
    }

    #[tokio::test]
    async fn test_locale_picks_the_table() {
        let mut rec = instant_recognizer();
        let events = run_session(&mut rec, "en-US").await;
        match &events[1] {
            SpeechEvent::Transcript(text) => {
                let samples = i18n::strings(Language::En).sample_queries;
                assert!(samples.contains(&text.as_str()));
            }
            other => panic!("expected transcript, got {:?}", other),
        }
    }
}
