use std::fmt::Display;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A playable episode as handed over by the content listing.
///
/// The player never builds or edits these, it only keeps them in its queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub members: String,
    /// Cover image URL
    pub thumbnail: String,
    /// Length in seconds
    pub duration: u64,
    /// Playable media URL
    pub url: String,
}

impl Episode {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    /// Duration formatted as `HH:MM:SS`
    pub fn duration_label(&self) -> String {
        let hours = self.duration / 3600;
        let minutes = (self.duration % 3600) / 60;
        let seconds = self.duration % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.title, self.members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(duration: u64) -> Episode {
        Episode {
            title: "A volta do PHP".to_string(),
            members: "Diego e Richard".to_string(),
            thumbnail: "https://example.com/php.jpg".to_string(),
            duration,
            url: "https://example.com/php.m4a".to_string(),
        }
    }

    #[test]
    fn duration_label_pads_every_field() {
        assert_eq!(episode(0).duration_label(), "00:00:00");
        assert_eq!(episode(3661).duration_label(), "01:01:01");
        assert_eq!(episode(5400).duration_label(), "01:30:00");
    }

    #[test]
    fn duration_converts_seconds() {
        assert_eq!(episode(90).duration(), Duration::from_secs(90));
    }

    #[test]
    fn display_shows_title_and_members() {
        assert_eq!(episode(1).to_string(), "A volta do PHP - Diego e Richard");
    }
}
