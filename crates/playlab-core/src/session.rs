use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use playlab_catalog::Lab;

use crate::Client;

/// How many recently viewed labs are remembered.
const MAX_RECENT_LABS: usize = 5;

/// App-level UI state: the search query, favorite labs and recently viewed
/// labs.
///
/// A session is created with the client, lives for the whole process, and is
/// cleared only through an explicit [`reset`](Session::reset). Nothing here
/// is persisted; persistence belongs to the storage cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    search_query: String,
    favorites: Vec<String>,
    recent_labs: Vec<String>,
}

impl Session {
    /// The current search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Replaces the search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Clears the search query.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    /// The favorited lab ids, in the order they were added.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Whether a lab is currently favorited.
    pub fn is_favorite(&self, lab_id: &str) -> bool {
        self.favorites.iter().any(|id| id == lab_id)
    }

    /// Adds `lab_id` to the favorites, or removes it if already present.
    pub fn toggle_favorite(&mut self, lab_id: &str) {
        if let Some(position) = self.favorites.iter().position(|id| id == lab_id) {
            self.favorites.remove(position);
        } else {
            self.favorites.push(lab_id.to_string());
        }
    }

    /// The recently viewed lab ids, most recent first.
    pub fn recent_labs(&self) -> &[String] {
        &self.recent_labs
    }

    /// Records a lab visit. Recents are deduplicated and capped at
    /// [`MAX_RECENT_LABS`].
    pub fn record_visit(&mut self, lab_id: &str) {
        self.recent_labs.retain(|id| id != lab_id);
        self.recent_labs.insert(0, lab_id.to_string());
        self.recent_labs.truncate(MAX_RECENT_LABS);
    }

    /// Back to a fresh session.
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}

/// Wrapper for session specific functionality.
pub struct SessionClient {
    client: Client,
}

impl SessionClient {
    fn new(client: Client) -> Self {
        Self { client }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.client
            .internal
            .session
            .read()
            .expect("RwLock should not be poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.client
            .internal
            .session
            .write()
            .expect("RwLock should not be poisoned")
    }

    /// Replaces the search query.
    pub fn set_search(&self, query: impl Into<String>) {
        self.write().set_search_query(query);
    }

    /// Clears the search query.
    pub fn clear_search(&self) {
        self.write().clear_search();
    }

    /// The current search query.
    pub fn search_query(&self) -> String {
        self.read().search_query().to_string()
    }

    /// The labs matching the current search query.
    pub fn search_results(&self) -> Vec<Lab> {
        let query = self.search_query();
        self.client
            .internal
            .catalog
            .search(&query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Adds a lab to the favorites, or removes it if already present.
    pub fn toggle_favorite(&self, lab_id: &str) {
        self.write().toggle_favorite(lab_id);
    }

    /// Whether a lab is currently favorited.
    pub fn is_favorite(&self, lab_id: &str) -> bool {
        self.read().is_favorite(lab_id)
    }

    /// The favorited lab ids.
    pub fn favorites(&self) -> Vec<String> {
        self.read().favorites().to_vec()
    }

    /// Records a lab visit.
    pub fn record_visit(&self, lab_id: &str) {
        self.write().record_visit(lab_id);
    }

    /// The recently viewed lab ids, most recent first.
    pub fn recent_labs(&self) -> Vec<String> {
        self.read().recent_labs().to_vec()
    }

    /// Clears the whole session.
    pub fn reset(&self) {
        self.write().reset();
    }
}

#[allow(missing_docs)]
pub trait SessionClientExt {
    fn session(&self) -> SessionClient;
}

impl SessionClientExt for Client {
    fn session(&self) -> SessionClient {
        SessionClient::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_favorite_twice_is_a_no_op() {
        let mut session = Session::default();
        session.toggle_favorite("zustand");
        assert!(session.is_favorite("zustand"));
        session.toggle_favorite("zustand");
        assert!(!session.is_favorite("zustand"));
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn recents_are_deduplicated_and_capped() {
        let mut session = Session::default();
        for id in ["a", "b", "c", "b", "d", "e", "f"] {
            session.record_visit(id);
        }
        assert_eq!(session.recent_labs(), ["f", "e", "d", "b", "c"]);

        session.record_visit("c");
        assert_eq!(session.recent_labs(), ["c", "f", "e", "d", "b"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::default();
        session.set_search_query("redux");
        session.toggle_favorite("redux");
        session.record_visit("redux");

        session.reset();
        assert_eq!(session, Session::default());
    }
}
