pub mod commands;
pub mod config;
pub mod episode;
pub mod error;
pub mod handle;
pub mod store;

pub use commands::{PlayerCommand, PlayerEvent};
pub use config::{PlayerConfig, ShuffleToggle};
pub use episode::Episode;
pub use error::PlayerError;
pub use handle::PlayerHandle;
pub use store::{PlayerSnapshot, PlayerStore};

/// Install `env_logger`, filtered by `RUST_LOG` and defaulting to `info`.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Set up logging and hand back the session's player
pub fn init(config: PlayerConfig) -> PlayerHandle {
    init_logger();
    log::info!("Player state ready, shuffle toggle mode: {}", config.shuffle_toggle);
    PlayerHandle::new(config)
}
