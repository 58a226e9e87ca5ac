use crossbeam_channel::{Receiver, Sender, TrySendError};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    commands::{PlayerCommand, PlayerEvent},
    config::{PlayerConfig, ShuffleToggle},
    episode::Episode,
    error::{PlayerError, Result},
};

/// Read-only copy of everything the player exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

/// The playback queue state shared by every part of the UI.
///
/// Holds the queue, the current position in it and the play/loop/shuffle
/// flags. It never touches audio: the player component reads these values
/// and drives the actual media element. Every mutation is pushed to the
/// channels handed out by [`PlayerStore::subscribe`].
///
/// `current_episode_index` is not kept in bounds of `episode_list`; use
/// [`PlayerStore::current_episode`] to read the episode safely.
pub struct PlayerStore {
    episode_list: Vec<Episode>,
    current_episode_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    config: PlayerConfig,
    rng: StdRng,
    subscribers: Vec<Sender<PlayerEvent>>,
}

impl PlayerStore {
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a store whose shuffle picks come from `rng`
    pub fn with_rng(config: PlayerConfig, rng: StdRng) -> Self {
        Self {
            episode_list: Vec::new(),
            current_episode_index: 0,
            is_playing: false,
            is_looping: false,
            is_shuffling: false,
            config,
            rng,
            subscribers: Vec::new(),
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Episode at the current index, `None` if the index points past the queue
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Always true while shuffling, even on an empty queue
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index.saturating_add(1) < self.episode_list.len()
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episode_list: self.episode_list.clone(),
            current_episode_index: self.current_episode_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    /// Register a new listener. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        let (tx, rx) = match self.config.event_buffer {
            Some(capacity) => crossbeam_channel::bounded(capacity.get()),
            None => crossbeam_channel::unbounded(),
        };
        self.subscribers.push(tx);
        log::debug!("New subscriber, {} registered", self.subscribers.len());
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Replace the queue with a single episode and start playing it
    pub fn play(&mut self, episode: Episode) {
        log::debug!("Play episode: {}", episode);
        self.load_queue(vec![episode], 0);
    }

    /// Replace the queue and start at `index`. The index is not validated.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) {
        log::debug!("Play list of {} episodes from index {}", episodes.len(), index);
        self.load_queue(episodes, index);
    }

    /// Same as [`PlayerStore::play_list`] but refuses an empty list or an index
    /// outside of it, leaving the state untouched.
    pub fn try_play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        if episodes.is_empty() {
            return Err(PlayerError::EmptyQueue);
        }
        if index >= episodes.len() {
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: episodes.len(),
            });
        }
        self.play_list(episodes, index);
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        self.set_playing_state(!self.is_playing);
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        log::debug!("Looping: {}", self.is_looping);
        self.notify(PlayerEvent::LoopingChanged(self.is_looping));
    }

    pub fn toggle_shuffle(&mut self) {
        match self.config.shuffle_toggle {
            ShuffleToggle::Flip => self.set_shuffling(!self.is_shuffling),
            ShuffleToggle::FlipLoop => self.toggle_loop(),
            ShuffleToggle::InvertLoop => self.set_shuffling(!self.is_looping),
        }
    }

    pub fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
        log::debug!("Playing: {}", state);
        self.notify(PlayerEvent::PlayingChanged(state));
    }

    /// Empty the queue. Playing, looping and shuffling flags are kept.
    pub fn clear_player_state(&mut self) {
        self.episode_list.clear();
        self.current_episode_index = 0;
        log::debug!("Player queue cleared");
        self.notify(PlayerEvent::QueueCleared);
    }

    /// Advance to a random episode while shuffling, otherwise to the next one
    /// if there is any.
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            if self.episode_list.is_empty() {
                log::debug!("Shuffle on an empty queue, nothing to pick");
                return;
            }
            let index = self.rng.random_range(0..self.episode_list.len());
            self.move_to(index);
        } else if self.has_next() {
            self.move_to(self.current_episode_index + 1);
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.move_to(self.current_episode_index - 1);
        }
    }

    /// Run a command against the store
    pub fn apply(&mut self, command: PlayerCommand) {
        let name: &'static str = (&command).into();
        log::debug!("Applying command {}", name);

        match command {
            PlayerCommand::Play(episode) => self.play(episode),
            PlayerCommand::PlayList { episodes, index } => self.play_list(episodes, index),
            PlayerCommand::PlayNext => self.play_next(),
            PlayerCommand::PlayPrevious => self.play_previous(),
            PlayerCommand::TogglePlay => self.toggle_play(),
            PlayerCommand::ToggleLoop => self.toggle_loop(),
            PlayerCommand::ToggleShuffle => self.toggle_shuffle(),
            PlayerCommand::SetPlayingState(state) => self.set_playing_state(state),
            PlayerCommand::ClearPlayerState => self.clear_player_state(),
        }
    }

    fn load_queue(&mut self, episodes: Vec<Episode>, index: usize) {
        self.episode_list = episodes;
        self.current_episode_index = index;
        self.notify(PlayerEvent::QueueLoaded {
            len: self.episode_list.len(),
            index,
        });
        self.set_playing_state(true);
    }

    fn set_shuffling(&mut self, state: bool) {
        self.is_shuffling = state;
        log::debug!("Shuffling: {}", state);
        self.notify(PlayerEvent::ShufflingChanged(state));
    }

    fn move_to(&mut self, index: usize) {
        self.current_episode_index = index;
        log::debug!("Current episode index: {}", index);
        self.notify(PlayerEvent::IndexChanged { index });
    }

    fn notify(&mut self, event: PlayerEvent) {
        log::trace!("Sending {:?} to {} subscribers", event, self.subscribers.len());
        self.subscribers.retain(|tx| match tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::warn!("Subscriber channel full, dropping {:?}", event);
                true
            }
            Err(TrySendError::Disconnected(_)) => false,
        });
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl std::fmt::Debug for PlayerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStore")
            .field("episode_list", &self.episode_list)
            .field("current_episode_index", &self.current_episode_index)
            .field("is_playing", &self.is_playing)
            .field("is_looping", &self.is_looping)
            .field("is_shuffling", &self.is_shuffling)
            .field("config", &self.config)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
