//! Tournament store contract.
//!
//! Tournaments are owned by an external admin workflow; the admission
//! engine only reads them.

use std::collections::HashMap;
use std::future::Future;

use openarena_types::{Result, Tournament, TournamentId};
use tokio::sync::Mutex;

/// Read-only tournament lookup.
pub trait TournamentStore: Send + Sync {
    fn get(&self, id: &TournamentId) -> impl Future<Output = Result<Option<Tournament>>> + Send;
}

impl<T: TournamentStore> TournamentStore for std::sync::Arc<T> {
    fn get(&self, id: &TournamentId) -> impl Future<Output = Result<Option<Tournament>>> + Send {
        (**self).get(id)
    }
}

/// In-memory tournament store for tests and local runs.
#[derive(Debug, Default)]
pub struct InMemoryTournamentStore {
    tournaments: Mutex<HashMap<TournamentId, Tournament>>,
}

impl InMemoryTournamentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tournament (stands in for the admin workflow).
    pub async fn put(&self, tournament: Tournament) {
        self.tournaments
            .lock()
            .await
            .insert(tournament.id, tournament);
    }
}

impl TournamentStore for InMemoryTournamentStore {
    async fn get(&self, id: &TournamentId) -> Result<Option<Tournament>> {
        Ok(self.tournaments.lock().await.get(id).cloned())
    }
}
