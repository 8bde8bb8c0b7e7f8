//! # Joke Collection
//!
//! The ordered set of stored jokes, newest first.
//!
//! ## Invariant
//!
//! No two records share an id. The only ways to add a record are
//! [`JokeCollection::insert_newest`] and [`JokeCollection::from_records`],
//! and both enforce it. The collection is always read and written in full,
//! so there is no partial-update path that could bypass the check.

use serde::{Deserialize, Serialize};

use crate::identity::JokeId;
use crate::joke::Joke;

/// Result of offering a joke to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The joke is now the head of the collection.
    Inserted,
    /// A joke with the same id is already stored; nothing changed.
    Duplicate,
}

/// Newest-first, id-unique sequence of jokes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Joke>", into = "Vec<Joke>")]
pub struct JokeCollection {
    jokes: Vec<Joke>,
}

impl JokeCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from records in newest-first order.
    ///
    /// If the input repeats an id, the first (newest) occurrence wins and
    /// later ones are dropped.
    pub fn from_records(records: Vec<Joke>) -> Self {
        let mut jokes: Vec<Joke> = Vec::with_capacity(records.len());
        for joke in records {
            if !jokes.iter().any(|j| j.id == joke.id) {
                jokes.push(joke);
            }
        }
        Self { jokes }
    }

    /// Prepend `joke` unless its id is already present.
    pub fn insert_newest(&mut self, joke: Joke) -> Insertion {
        if self.contains(&joke.id) {
            return Insertion::Duplicate;
        }
        self.jokes.insert(0, joke);
        Insertion::Inserted
    }

    /// Remove the record with `id`, keeping the relative order of the rest.
    /// Returns `None` if no such record exists.
    pub fn remove(&mut self, id: &JokeId) -> Option<Joke> {
        let pos = self.jokes.iter().position(|j| &j.id == id)?;
        Some(self.jokes.remove(pos))
    }

    /// Whether a record with `id` is stored.
    pub fn contains(&self, id: &JokeId) -> bool {
        self.jokes.iter().any(|j| &j.id == id)
    }

    /// The record with `id`, if stored.
    pub fn get(&self, id: &JokeId) -> Option<&Joke> {
        self.jokes.iter().find(|j| &j.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Records in newest-first order.
    pub fn iter(&self) -> std::slice::Iter<'_, Joke> {
        self.jokes.iter()
    }

    /// Records in newest-first order, as a slice.
    pub fn as_slice(&self) -> &[Joke] {
        &self.jokes
    }

    /// Consume the collection, returning its records newest first.
    pub fn into_vec(self) -> Vec<Joke> {
        self.jokes
    }
}

impl From<Vec<Joke>> for JokeCollection {
    fn from(records: Vec<Joke>) -> Self {
        Self::from_records(records)
    }
}

impl From<JokeCollection> for Vec<Joke> {
    fn from(collection: JokeCollection) -> Self {
        collection.jokes
    }
}

impl<'a> IntoIterator for &'a JokeCollection {
    type Item = &'a Joke;
    type IntoIter = std::slice::Iter<'a, Joke>;

    fn into_iter(self) -> Self::IntoIter {
        self.jokes.iter()
    }
}
