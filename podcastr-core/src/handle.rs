use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::Receiver;

use crate::{
    commands::{PlayerCommand, PlayerEvent},
    config::PlayerConfig,
    store::{PlayerSnapshot, PlayerStore},
};

/// Cloneable handle to the one player store of a session.
///
/// Every component that needs playback state gets a clone of this handle
/// instead of reaching for a global.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    inner: Arc<Mutex<PlayerStore>>,
}

impl PlayerHandle {
    pub fn new(config: PlayerConfig) -> Self {
        Self::from_store(PlayerStore::new(config))
    }

    pub fn from_store(store: PlayerStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn dispatch(&self, command: PlayerCommand) {
        self.lock().apply(command);
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.lock().snapshot()
    }

    pub fn subscribe(&self) -> Receiver<PlayerEvent> {
        self.lock().subscribe()
    }

    pub fn read<R>(&self, f: impl FnOnce(&PlayerStore) -> R) -> R {
        f(&self.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut PlayerStore) -> R) -> R {
        f(&mut self.lock())
    }

    // Operations are total, a poisoned store is still consistent
    fn lock(&self) -> MutexGuard<'_, PlayerStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PlayerHandle {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episode::Episode;

    fn episode(title: &str) -> Episode {
        Episode {
            title: title.to_string(),
            members: "Maykão".to_string(),
            thumbnail: String::new(),
            duration: 60,
            url: format!("https://example.com/{}.m4a", title),
        }
    }

    #[test]
    fn clones_share_the_same_state() {
        let handle = PlayerHandle::default();
        let other = handle.clone();

        handle.dispatch(PlayerCommand::Play(episode("one")));

        assert_eq!(other.read(|store| store.current_episode().cloned()), Some(episode("one")));
        assert!(other.snapshot().is_playing);
    }

    #[test]
    fn update_returns_closure_result() {
        let handle = PlayerHandle::default();
        let result = handle.update(|store| store.try_play_list(Vec::new(), 0));
        assert!(result.is_err());
    }

    #[test]
    fn survives_a_poisoned_lock() {
        let handle = PlayerHandle::default();
        let poisoner = handle.clone();

        let _ = std::thread::spawn(move || {
            poisoner.update(|store| {
                store.toggle_loop();
                panic!("consumer crashed while holding the store");
            })
        })
        .join();

        assert!(handle.snapshot().is_looping);
        handle.dispatch(PlayerCommand::ToggleLoop);
        assert!(!handle.snapshot().is_looping);
    }
}
