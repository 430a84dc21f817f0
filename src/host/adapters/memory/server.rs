//! In-memory host server with recording output channels.

use crate::host::domain::HostInstanceId;
use crate::host::ports::{HostPlayer, HostServer};
use std::sync::{Arc, Mutex, RwLock};
use uuid::Uuid;

/// In-memory player with a recorded chat channel.
#[derive(Debug)]
pub struct InMemoryPlayer {
    name: String,
    unique_id: Uuid,
    messages: Mutex<Vec<String>>,
}

impl InMemoryPlayer {
    /// Creates a player with the given name and unique identifier.
    pub fn new(name: impl Into<String>, unique_id: Uuid) -> Self {
        Self {
            name: name.into(),
            unique_id,
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Returns the messages delivered to this player so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl HostPlayer for InMemoryPlayer {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn unique_id(&self) -> Uuid {
        self.unique_id
    }

    fn deliver(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_owned());
        }
    }
}

/// In-memory host server instance.
///
/// Player connections mutate live state, so enumeration reflects the roster
/// at call time exactly like a live host's collections would.
#[derive(Default)]
pub struct InMemoryHostServer {
    instance: HostInstanceId,
    players: RwLock<Vec<Arc<InMemoryPlayer>>>,
    console: Mutex<Vec<String>>,
}

impl InMemoryHostServer {
    /// Creates a host server with a fresh random instance identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects a player and returns a handle to it.
    pub fn connect_player(&self, name: impl Into<String>, unique_id: Uuid) -> Arc<InMemoryPlayer> {
        let player = Arc::new(InMemoryPlayer::new(name, unique_id));
        if let Ok(mut players) = self.players.write() {
            players.push(Arc::clone(&player));
        }
        player
    }

    /// Disconnects a player by unique identifier.
    pub fn disconnect_player(&self, unique_id: Uuid) {
        if let Ok(mut players) = self.players.write() {
            players.retain(|player| player.unique_id != unique_id);
        }
    }

    /// Returns the messages delivered to the console so far.
    #[must_use]
    pub fn console_messages(&self) -> Vec<String> {
        self.console.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl HostServer for InMemoryHostServer {
    fn instance_id(&self) -> HostInstanceId {
        self.instance
    }

    fn players(&self) -> Vec<Arc<dyn HostPlayer>> {
        self.players
            .read()
            .map(|players| {
                players
                    .iter()
                    .map(|player| Arc::clone(player) as Arc<dyn HostPlayer>)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn deliver_console(&self, message: &str) {
        if let Ok(mut console) = self.console.lock() {
            console.push(message.to_owned());
        }
    }
}
