use thiserror::Error;

/// Errors raised by the validating store operations.
///
/// The plain operations never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("cannot start playback from an empty queue")]
    EmptyQueue,

    #[error("index {index} is out of range for a queue of {len} episodes")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, PlayerError>;
