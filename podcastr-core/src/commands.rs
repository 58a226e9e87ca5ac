use crate::episode::Episode;

/// Commands sent from the UI to the player state
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum PlayerCommand {
    /// Replace the queue with a single episode and start playing it
    Play(Episode),
    /// Replace the queue with a list and start at the given index
    PlayList { episodes: Vec<Episode>, index: usize },
    /// Skip to the next episode (random pick while shuffling)
    PlayNext,
    /// Skip to the previous episode
    PlayPrevious,
    /// Flip between playing and paused
    TogglePlay,
    /// Flip loop mode
    ToggleLoop,
    /// Flip shuffle mode, see [`crate::config::ShuffleToggle`]
    ToggleShuffle,
    /// Force the playing flag, e.g. when the audio element reports play/pause
    SetPlayingState(bool),
    /// Empty the queue
    ClearPlayerState,
}

/// Notifications sent from the player state to every subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A new queue was loaded
    QueueLoaded { len: usize, index: usize },
    /// The queue was emptied and the index reset to 0
    QueueCleared,
    /// The current episode moved within the same queue
    IndexChanged { index: usize },
    PlayingChanged(bool),
    LoopingChanged(bool),
    ShufflingChanged(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_are_variant_names() {
        let name: &'static str = PlayerCommand::ToggleShuffle.into();
        assert_eq!(name, "ToggleShuffle");

        let name: &'static str = PlayerCommand::PlayList {
            episodes: Vec::new(),
            index: 0,
        }
        .into();
        assert_eq!(name, "PlayList");
    }
}
