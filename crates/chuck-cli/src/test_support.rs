//! Shared test doubles for the subcommand handlers.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use chuck_app::AppContext;
use chuck_client::{ChuckApiError, JokeSource};
use chuck_core::{Joke, JokeCollection, JokeId};
use chuck_store::{JokeRepository, KeyValueStore, MemoryKeyValueStore};

pub fn joke(id: &str) -> Joke {
    Joke::new(JokeId::new(id).unwrap(), format!("joke {id}"))
}

/// Replays a fixed list of results, then fails with a 500.
#[derive(Debug)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Joke, ChuckApiError>>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Joke, ChuckApiError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

#[async_trait::async_trait]
impl JokeSource for ScriptedSource {
    async fn fetch_random(&self) -> Result<Joke, ChuckApiError> {
        self.script.lock().pop_front().unwrap_or_else(|| {
            Err(ChuckApiError::ApiError {
                endpoint: "jokes/random".to_string(),
                status: 500,
                body: "script exhausted".to_string(),
            })
        })
    }
}

/// A context over an in-memory store seeded with `ids`.
pub fn context(ids: &[&str], script: Vec<Result<Joke, ChuckApiError>>) -> (AppContext, Arc<MemoryKeyValueStore>) {
    let store = Arc::new(MemoryKeyValueStore::new());
    let repo = JokeRepository::new(store.clone());
    let seeded: Vec<Joke> = ids.iter().map(|id| joke(id)).collect();
    repo.save(&JokeCollection::from(seeded)).unwrap();
    let ctx = AppContext::new(store.clone(), Arc::new(ScriptedSource::new(script)))
        .with_max_fetch_attempts(3);
    (ctx, store)
}

pub fn stored_ids(store: &Arc<MemoryKeyValueStore>) -> Vec<String> {
    let store: Arc<dyn KeyValueStore> = store.clone();
    JokeRepository::new(store)
        .try_load()
        .unwrap()
        .iter()
        .map(|j| j.id.as_str().to_string())
        .collect()
}
