//! # Joke List View
//!
//! The UI root. [`JokeList::render`] replaces the list's items wholesale
//! from a collection; nothing accumulates between renders. Front ends
//! (the terminal printer, the shell) only read the resulting items.

use std::fmt;

use chuck_core::{Joke, JokeCollection, JokeId};

/// Guidance shown when there are no jokes.
pub const PLACEHOLDER_TEXT: &str = "No jokes yet! Use \"fetch\" to get one.";

/// A delete control bound to one joke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteControl {
    pub joke_id: JokeId,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    /// Shown alone when the collection is empty.
    Placeholder { text: String },
    /// One joke with its delete control.
    Joke {
        text: String,
        delete: DeleteControl,
    },
}

impl ListItem {
    fn for_joke(joke: &Joke) -> Self {
        Self::Joke {
            text: joke.value.clone(),
            delete: DeleteControl {
                joke_id: joke.id.clone(),
            },
        }
    }

    pub fn delete_control(&self) -> Option<&DeleteControl> {
        match self {
            Self::Placeholder { .. } => None,
            Self::Joke { delete, .. } => Some(delete),
        }
    }
}

/// The visual joke list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JokeList {
    items: Vec<ListItem>,
}

impl JokeList {
    /// A list that has not been rendered yet (no items at all).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list content with one item per joke, in collection order,
    /// or a single placeholder when `jokes` is empty.
    pub fn render(&mut self, jokes: &JokeCollection) {
        self.items = if jokes.is_empty() {
            vec![ListItem::Placeholder {
                text: PLACEHOLDER_TEXT.to_string(),
            }]
        } else {
            jokes.iter().map(ListItem::for_joke).collect()
        };
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn delete_controls(&self) -> impl Iterator<Item = &DeleteControl> {
        self.items.iter().filter_map(ListItem::delete_control)
    }

    /// Resolve a delete control by the id it is tagged with.
    pub fn find_control(&self, id: &str) -> Option<&DeleteControl> {
        self.delete_controls().find(|c| c.joke_id.as_str() == id)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.items.as_slice(), [ListItem::Placeholder { .. }])
    }
}

impl fmt::Display for JokeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.delete_controls().count();
        if count > 0 {
            writeln!(f, "Jokes ({count}):")?;
        }
        let mut n = 0;
        for item in &self.items {
            match item {
                ListItem::Placeholder { text } => writeln!(f, "  {text}")?,
                ListItem::Joke { text, delete } => {
                    n += 1;
                    writeln!(f, "  {n:>2}. {text}")?;
                    writeln!(f, "      [delete {}]", delete.joke_id)?;
                }
            }
        }
        Ok(())
    }
}
