use std::time::Duration;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::conversation::{Conversation, Message};
use crate::geo::{self, LocationData, LocationError, LocationProvider, PermissionState};
use crate::i18n;
use crate::intent;
use crate::language::Language;
use crate::speech::{SpeechError, SpeechEvent, SpeechRecognizer};
use crate::tui::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub language: Language,

    // Conversation state
    pub conversation: Conversation,
    pub input: String,
    pub cursor: usize, // cursor position in input (chars)

    // Location state
    pub location: Option<LocationData>,
    pub permission: PermissionState,
    locator: Option<Box<dyn LocationProvider>>,

    // Voice state
    pub listening: bool,
    recognizer: Option<Box<dyn SpeechRecognizer>>,

    // Simulated reply latency
    pub reply_delay: Duration,

    // Channel into the main loop, cloned into background tasks
    tx: mpsc::UnboundedSender<AppEvent>,

    // Transcript layout for scroll calculations (updated during render)
    pub transcript_scroll: u16,
    pub transcript_height: u16,
    pub transcript_width: u16,
    pub transcript_area: Option<Rect>,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation
}

impl App {
    pub fn new(
        language: Language,
        reply_delay: Duration,
        recognizer: Option<Box<dyn SpeechRecognizer>>,
        locator: Option<Box<dyn LocationProvider>>,
        tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            language,

            conversation: Conversation::new(),
            input: String::new(),
            cursor: 0,

            location: None,
            permission: PermissionState::Pending,
            locator,

            listening: false,
            recognizer,

            reply_delay,
            tx,

            transcript_scroll: 0,
            transcript_height: 0,
            transcript_width: 0,
            transcript_area: None,

            animation_frame: 0,
        }
    }

    /// Fires the one-shot location request. Called once at startup;
    /// a missing capability is an immediate failure.
    pub fn request_location(&mut self) {
        match self.locator.take() {
            Some(mut locator) => locator.request(self.tx.clone()),
            None => self.on_location(Err(LocationError::Unavailable)),
        }
    }

    /// Resolves the permission state and replaces the transcript with
    /// the matching greeting. Arrives exactly once per session.
    pub fn on_location(&mut self, outcome: Result<LocationData, LocationError>) {
        let greeting = geo::greeting_for(&outcome, self.language);
        match outcome {
            Ok(data) => {
                tracing::info!(
                    "location fix: {:.4}, {:.4} ({})",
                    data.latitude,
                    data.longitude,
                    data.city.as_deref().unwrap_or("unknown city"),
                );
                self.permission = PermissionState::Granted;
                self.location = Some(data);
            }
            Err(err) => {
                tracing::info!("no location fix: {:?}", err);
                self.permission = PermissionState::Denied;
            }
        }
        self.conversation.reset_with(greeting);
        self.scroll_to_latest();
    }

    /// Submits the input field. The store enforces the blank/pending
    /// preconditions; on acceptance the reply task is spawned with the
    /// language active right now, so a later toggle cannot retranslate
    /// an in-flight turn.
    pub fn submit_query(&mut self) {
        let Some(text) = self.conversation.begin_turn(&self.input) else {
            return;
        };
        self.input.clear();
        self.cursor = 0;
        self.scroll_to_latest();

        let language = self.language;
        let location_known = self.location.is_some();
        let delay = self.reply_delay;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let reply = intent::generate_response(&text, language, location_known, delay).await;
            let _ = tx.send(AppEvent::Reply(reply));
        });
    }

    pub fn on_reply(&mut self, reply: Message) {
        self.conversation.complete_turn(reply);
        self.scroll_to_latest();
    }

    /// Starts a single-shot recognition session in the active locale.
    /// Every failure path degrades to a transcript notice; nothing
    /// here is fatal.
    pub fn start_listening(&mut self) {
        let strings = i18n::strings(self.language);
        let Some(recognizer) = self.recognizer.as_mut() else {
            self.push_voice_notice(strings.voice_unavailable);
            return;
        };
        if !recognizer.secure_context() {
            self.push_voice_notice(strings.voice_insecure);
            return;
        }
        let locale = self.language.speech_locale();
        if let Err(err) = recognizer.start(locale, self.tx.clone()) {
            tracing::warn!("speech session failed to start: {err:#}");
            self.listening = false;
            self.push_voice_notice(strings.voice_failed);
        }
    }

    pub fn on_speech_event(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Started => self.listening = true,
            SpeechEvent::Transcript(text) => {
                // Prefill only; the user still submits explicitly.
                self.input = text;
                self.cursor = self.input.chars().count();
                self.listening = false;
                self.input_mode = InputMode::Editing;
            }
            SpeechEvent::Error(kind) => {
                self.listening = false;
                let strings = i18n::strings(self.language);
                let text = match kind {
                    SpeechError::NotAllowed => strings.voice_denied,
                    SpeechError::NoSpeech => strings.voice_no_speech,
                    SpeechError::Other => strings.voice_failed,
                };
                self.push_voice_notice(text);
            }
            SpeechEvent::Ended => self.listening = false,
        }
    }

    fn push_voice_notice(&mut self, text: &str) {
        self.conversation.push_notice(Message::assistant(text));
        self.scroll_to_latest();
    }

    /// Flips the language for everything rendered from here on; stored
    /// messages keep their text. The choice persists to config.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        if let Err(err) = Config::save_language(self.language) {
            tracing::warn!("could not persist language choice: {err:#}");
        }
    }

    /// Prefills the input with chip `index` of the latest assistant
    /// message and focuses the field. Never submits.
    pub fn apply_suggestion(&mut self, index: usize) {
        let Some(chip) = self
            .conversation
            .latest_assistant()
            .and_then(|m| m.suggestions.get(index))
            .cloned()
        else {
            return;
        };
        self.input = chip;
        self.cursor = self.input.chars().count();
        self.input_mode = InputMode::Editing;
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.conversation.is_pending() || self.listening {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    pub fn scroll_up(&mut self) {
        self.transcript_scroll = self.transcript_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.transcript_scroll = self.transcript_scroll.saturating_add(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.transcript_scroll = 0;
    }

    /// Scroll the transcript so the latest turn (or the typing
    /// indicator) is visible.
    pub fn scroll_to_latest(&mut self) {
        // Use actual transcript width for wrap calculation, default to 50 if not set
        let wrap_width = if self.transcript_width > 0 {
            self.transcript_width as usize
        } else {
            50
        };

        let messages = self.conversation.messages();
        let mut total_lines: u16 = 0;

        for msg in messages {
            total_lines += 1; // Role line
            // Calculate wrapped lines for each line of content
            for line in msg.text.lines() {
                // Use character count, not byte length, for proper UTF-8 handling
                let char_count = line.chars().count();
                if char_count == 0 {
                    total_lines += 1; // Empty line still takes one line
                } else {
                    total_lines += ((char_count / wrap_width) + 1) as u16;
                }
            }
            // Chip lines render under every message that carries them;
            // older ones are merely dimmed, not hidden
            for chip in &msg.suggestions {
                let char_count = chip.chars().count() + 4; // "[1] " prefix
                total_lines += ((char_count / wrap_width) + 1) as u16;
            }
            total_lines += 1; // Blank line after message
        }

        if self.conversation.is_pending() {
            total_lines += 2; // Role line + thinking indicator
        }

        let visible_height = if self.transcript_height > 0 {
            self.transcript_height
        } else {
            20
        };

        if total_lines > visible_height {
            self.transcript_scroll = total_lines.saturating_sub(visible_height);
        } else {
            self.transcript_scroll = 0;
        }
    }
}
