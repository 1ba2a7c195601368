use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::conversation::Message;
use crate::i18n;
use crate::language::Language;
use crate::tui::AppEvent;

/// One successful location fix. Created at most once per session and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    Denied,
    Unavailable,
}

/// Pending until the one-shot fix resolves, then Granted or Denied for
/// the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Pending,
    Granted,
    Denied,
}

/// Location capability injected at startup. `request` fires the
/// one-shot fix; the outcome arrives over the app channel.
pub trait LocationProvider: Send {
    fn request(&mut self, tx: mpsc::UnboundedSender<AppEvent>);
}

/// Provider backed by coordinates from the config file. Resolves after
/// a short delay like the platform lookup it stands in for.
pub struct ConfiguredLocation {
    data: LocationData,
    delay: Duration,
}

impl ConfiguredLocation {
    pub fn new(data: LocationData) -> Self {
        Self {
            data,
            delay: Duration::from_millis(400),
        }
    }
}

impl LocationProvider for ConfiguredLocation {
    fn request(&mut self, tx: mpsc::UnboundedSender<AppEvent>) {
        let data = self.data.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::Location(Ok(data)));
        });
    }
}

/// Builds the single greeting that replaces the transcript once the
/// location outcome is known.
pub fn greeting_for(outcome: &Result<LocationData, LocationError>, language: Language) -> Message {
    let s = i18n::strings(language);
    let (body, chips) = match outcome {
        Ok(_) => (s.greeting_located, &s.greeting_located_chips),
        Err(_) => (s.greeting_fallback, &s.greeting_fallback_chips),
    };
    let mut message = Message::assistant(body);
    message.suggestions = chips.iter().map(|c| c.to_string()).collect();
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> LocationData {
        LocationData {
            latitude: 28.6139,
            longitude: 77.2090,
            city: Some("Delhi".to_string()),
            state: Some("Delhi".to_string()),
        }
    }

    #[tokio::test]
    async fn test_configured_provider_reports_its_fix() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut provider = ConfiguredLocation {
            data: delhi(),
            delay: Duration::ZERO,
        };
        provider.request(tx);
        match rx.recv().await {
            Some(AppEvent::Location(Ok(data))) => {
                assert_eq!(data.city.as_deref(), Some("Delhi"));
            }
            other => panic!("expected a location fix, got {:?}", other),
        }
    }

    #[test]
    fn test_greetings_differ_by_outcome() {
        let located = greeting_for(&Ok(delhi()), Language::En);
        let fallback = greeting_for(&Err(LocationError::Denied), Language::En);
        assert_ne!(located.text, fallback.text);
        assert_ne!(located.suggestions, fallback.suggestions);
        assert_eq!(located.suggestions.len(), 3);
        assert_eq!(fallback.suggestions.len(), 3);
    }

    #[test]
    fn test_denied_and_unavailable_share_the_fallback() {
        let denied = greeting_for(&Err(LocationError::Denied), Language::Hi);
        let unavailable = greeting_for(&Err(LocationError::Unavailable), Language::Hi);
        assert_eq!(denied.text, unavailable.text);
    }
}
