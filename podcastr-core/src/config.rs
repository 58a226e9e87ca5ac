use std::num::NonZeroUsize;

use strum::{EnumIter, EnumString};

/// What `toggle_shuffle` does to the mode flags.
///
/// The default flips the loop flag and leaves shuffle alone, so shuffle can
/// only be switched on through one of the other modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ShuffleToggle {
    /// `is_looping = !is_looping`, shuffle is never touched
    #[default]
    FlipLoop,
    /// `is_shuffling = !is_shuffling`
    Flip,
    /// `is_shuffling = !is_looping`
    InvertLoop,
}

/// Construction-time options for a [`crate::store::PlayerStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerConfig {
    pub shuffle_toggle: ShuffleToggle,
    /// Capacity of each subscriber channel. `None` means unbounded.
    pub event_buffer: Option<NonZeroUsize>,
}

impl PlayerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shuffle_toggle(mut self, shuffle_toggle: ShuffleToggle) -> Self {
        self.shuffle_toggle = shuffle_toggle;
        self
    }

    /// Bound every subscriber channel. A capacity of 0 is raised to 1.
    pub fn with_event_buffer(mut self, capacity: usize) -> Self {
        self.event_buffer = Some(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN));
        self
    }
}
