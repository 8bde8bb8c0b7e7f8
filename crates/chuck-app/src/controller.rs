//! # Joke Controller
//!
//! Runs the user actions against the joke collection:
//!
//! - **startup** ([`JokeController::start`]): load, render.
//! - **fetch-and-add** ([`JokeController::fetch_and_add`]): fetch, load,
//!   dedupe, prepend, persist, render. A duplicate triggers another fetch,
//!   up to `max_fetch_attempts` in total.
//! - **delete** ([`JokeController::delete`]): load, remove one record,
//!   persist, render. Unknown ids are a no-op.
//! - **refresh** ([`JokeController::refresh`]): load, render.
//!
//! ## Single Writer
//!
//! Storage is the source of truth. Every mutation reloads the stored
//! collection, changes it, saves it, and re-renders, all while holding the
//! controller's `parking_lot::Mutex` and the facility lock
//! ([`chuck_store::FacilityLock`]). Other controllers and other `chuck`
//! processes on the same storage wait for that lock, so a long-lived
//! session never writes back a stale copy. The network call runs outside
//! both locks and no lock is held across `.await`.
//!
//! Mutations are applied to a copy and swapped in only after the save
//! succeeds; a failed save leaves both the collection and the view as they
//! were. If the stored value cannot be read, the in-memory copy stands in
//! for it.
//!
//! Storage work blocks on file I/O and on the facility lock. On a
//! multi-thread runtime it runs under `tokio::task::block_in_place`, so
//! other tasks keep their worker.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::{Handle, RuntimeFlavor};

use chuck_client::JokeSource;
use chuck_core::{Insertion, Joke, JokeCollection, JokeId};
use chuck_store::JokeRepository;

use crate::context::AppContext;
use crate::error::ControllerError;
use crate::view::JokeList;

/// A successful fetch-and-add.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// The joke that became the new head of the collection.
    pub joke: Joke,
    /// Fetches made, including discarded duplicates.
    pub attempts: u32,
}

/// Result of a delete action.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Removed(Joke),
    /// No record had that id; nothing was written.
    NotFound,
}

#[derive(Debug)]
struct Screen {
    jokes: JokeCollection,
    view: JokeList,
}

impl Screen {
    fn show(&mut self, jokes: JokeCollection) {
        self.jokes = jokes;
        self.view.render(&self.jokes);
    }
}

/// Orchestrates fetcher, repository, and view.
pub struct JokeController {
    repo: JokeRepository,
    source: Arc<dyn JokeSource>,
    max_fetch_attempts: u32,
    screen: Mutex<Screen>,
}

impl JokeController {
    /// Startup: load the persisted collection and render it.
    pub fn start(ctx: AppContext) -> Self {
        let repo = JokeRepository::new(ctx.store);
        let jokes = off_worker(|| repo.load());
        let mut view = JokeList::new();
        view.render(&jokes);
        tracing::info!(count = jokes.len(), "loaded stored jokes");

        Self {
            repo,
            source: ctx.source,
            max_fetch_attempts: ctx.max_fetch_attempts.max(1),
            screen: Mutex::new(Screen { jokes, view }),
        }
    }

    /// Fetch a joke that is not stored yet, prepend it, persist, re-render.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::Fetch`] on the first fetch failure; no retry.
    /// - [`ControllerError::DuplicatesExhausted`] when every allowed fetch
    ///   returned an id that is already stored.
    /// - [`ControllerError::Storage`] when locking or saving fails.
    pub async fn fetch_and_add(&self) -> Result<FetchOutcome, ControllerError> {
        for attempt in 1..=self.max_fetch_attempts {
            let joke = match self.source.fetch_random().await {
                Ok(joke) => joke,
                Err(e) => {
                    tracing::error!(attempt, "joke fetch failed: {e}");
                    return Err(ControllerError::Fetch(e));
                }
            };

            match off_worker(|| self.insert(&joke))? {
                Insertion::Duplicate => {
                    tracing::debug!(
                        id = %joke.id,
                        attempt,
                        max_attempts = self.max_fetch_attempts,
                        "fetched joke is already stored, fetching another"
                    );
                }
                Insertion::Inserted => {
                    tracing::info!(id = %joke.id, attempts = attempt, "added joke");
                    return Ok(FetchOutcome {
                        joke,
                        attempts: attempt,
                    });
                }
            }
        }

        tracing::warn!(
            attempts = self.max_fetch_attempts,
            "giving up: every fetched joke was already stored"
        );
        Err(ControllerError::DuplicatesExhausted {
            attempts: self.max_fetch_attempts,
        })
    }

    /// Remove the joke with `id`, persist, re-render.
    ///
    /// An id that is not stored is not an error and writes nothing.
    pub fn delete(&self, id: &JokeId) -> Result<DeleteOutcome, ControllerError> {
        off_worker(|| -> Result<DeleteOutcome, ControllerError> {
            let mut screen = self.screen.lock();
            let _held = self.repo.lock()?;
            let mut next = self.latest(&screen);
            let Some(removed) = next.remove(id) else {
                tracing::debug!(%id, "delete requested for unknown joke");
                screen.show(next);
                return Ok(DeleteOutcome::NotFound);
            };

            self.commit(&mut screen, next)?;
            tracing::info!(%id, "deleted joke");
            Ok(DeleteOutcome::Removed(removed))
        })
    }

    /// Reload the stored collection and re-render it, picking up changes
    /// made by other writers.
    pub fn refresh(&self) -> JokeList {
        off_worker(|| {
            let mut screen = self.screen.lock();
            let latest = self.latest(&screen);
            screen.show(latest);
            screen.view.clone()
        })
    }

    /// Snapshot of the collection as of the last action.
    pub fn jokes(&self) -> JokeCollection {
        self.screen.lock().jokes.clone()
    }

    /// Snapshot of the view as of the last action.
    pub fn view(&self) -> JokeList {
        self.screen.lock().view.clone()
    }

    /// Load, dedupe-check, prepend, persist and render `joke` under both locks.
    fn insert(&self, joke: &Joke) -> Result<Insertion, ControllerError> {
        let mut screen = self.screen.lock();
        let _held = self.repo.lock()?;
        let mut next = self.latest(&screen);
        let insertion = next.insert_newest(joke.clone());
        match insertion {
            Insertion::Inserted => self.commit(&mut screen, next)?,
            Insertion::Duplicate => screen.show(next),
        }
        Ok(insertion)
    }

    /// The stored collection, or the in-memory copy if storage is unreadable.
    fn latest(&self, screen: &Screen) -> JokeCollection {
        match self.repo.try_load() {
            Ok(jokes) => jokes,
            Err(e) => {
                tracing::warn!("stored jokes unreadable, using the in-memory copy: {e}");
                screen.jokes.clone()
            }
        }
    }

    /// Persist `next`, then make it current and re-render.
    fn commit(&self, screen: &mut Screen, next: JokeCollection) -> Result<(), ControllerError> {
        self.repo.save(&next)?;
        screen.show(next);
        Ok(())
    }
}

impl std::fmt::Debug for JokeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JokeController")
            .field("repo", &self.repo)
            .field("max_fetch_attempts", &self.max_fetch_attempts)
            .field("screen", &self.screen)
            .finish()
    }
}

/// Run blocking storage work. On a multi-thread runtime the worker hands its
/// other tasks to another thread first; elsewhere `f` runs in place.
fn off_worker<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}
