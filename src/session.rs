// ABOUTME: In-memory store of recipe-finder sessions, each owning one user's ingredient list
// ABOUTME: Concurrent map keyed by session id with scoped mutation and idle-session eviction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

//! Session store
//!
//! A session is the server-side counterpart of one browser tab: it holds the
//! ingredients typed or detected so far. Sessions live in memory only and
//! disappear with the process. A session left untouched for longer than the
//! idle TTL is treated as closed: lookups miss it and [`SessionStore::evict_idle`]
//! drops it from the map.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use recipes_core::UserIngredients;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// One user's recipe-finding session
#[derive(Debug, Clone, Serialize)]
pub struct RecipeSession {
    /// Session identifier
    pub id: Uuid,
    /// Ingredients collected so far
    pub ingredients: UserIngredients,
    /// When the session was opened
    pub created_at: DateTime<Utc>,
    /// Last read or write through the store
    pub last_active: DateTime<Utc>,
}

impl RecipeSession {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ingredients: UserIngredients::new(),
            created_at: now,
            last_active: now,
        }
    }

    fn is_idle(&self, now: DateTime<Utc>, ttl: Option<TimeDelta>) -> bool {
        ttl.is_some_and(|ttl| now - self.last_active > ttl)
    }
}

/// Concurrent session registry
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, RecipeSession>,
    idle_ttl: Option<TimeDelta>,
}

impl SessionStore {
    /// Create an empty store whose sessions never expire
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store expiring sessions idle for longer than `ttl`
    ///
    /// `None` keeps sessions until they are removed.
    #[must_use]
    pub fn with_idle_ttl(ttl: Option<Duration>) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_ttl: ttl.map(|ttl| TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX)),
        }
    }

    /// Open a new session with no ingredients
    pub fn create(&self) -> RecipeSession {
        let session = RecipeSession::new(Utc::now());
        self.sessions.insert(session.id, session.clone());
        session
    }

    /// Snapshot of a session, marking it active
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown or expired id
    pub fn get(&self, id: Uuid) -> AppResult<RecipeSession> {
        self.with_session_mut(id, |session| Ok(session.clone()))
    }

    /// Run `f` against a session while holding its entry lock
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown or expired id, or whatever `f` returns
    pub fn with_session_mut<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut RecipeSession) -> AppResult<T>,
    ) -> AppResult<T> {
        let now = Utc::now();
        let idle_ttl = self.idle_ttl;
        self.sessions
            .remove_if(&id, |_, session| session.is_idle(now, idle_ttl));

        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| session_not_found(id))?;
        let session = entry.value_mut();
        session.last_active = now;
        f(session)
    }

    /// Close a session
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id
    pub fn remove(&self, id: Uuid) -> AppResult<()> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| session_not_found(id))
    }

    /// Drop every session idle for longer than the TTL, returning how many went
    pub fn evict_idle(&self) -> usize {
        self.evict_idle_at(Utc::now())
    }

    fn evict_idle_at(&self, now: DateTime<Utc>) -> usize {
        if self.idle_ttl.is_none() {
            return 0;
        }
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !session.is_idle(now, self.idle_ttl));
        before.saturating_sub(self.sessions.len())
    }

    /// Number of sessions held, including idle ones not yet evicted
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Session {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour_ttl_store() -> SessionStore {
        SessionStore::with_idle_ttl(Some(Duration::from_secs(3600)))
    }

    #[test]
    fn test_create_get_remove() {
        let store = SessionStore::new();
        let session = store.create();
        assert_eq!(store.len(), 1);
        assert!(store.get(session.id).unwrap().ingredients.is_empty());

        store.remove(session.id).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get(session.id).unwrap_err().http_status(), 404);
        assert!(store.remove(session.id).is_err());
    }

    #[test]
    fn test_mutation_is_visible_to_later_reads() {
        let store = SessionStore::new();
        let id = store.create().id;

        let added = store
            .with_session_mut(id, |s| Ok(s.ingredients.add("Tomato")))
            .unwrap();
        assert!(added);
        assert_eq!(store.get(id).unwrap().ingredients.as_slice(), ["tomato"]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create().id;
        let b = store.create().id;

        store
            .with_session_mut(a, |s| Ok(s.ingredients.add("rice")))
            .unwrap();
        assert!(store.get(b).unwrap().ingredients.is_empty());
    }

    #[test]
    fn test_unknown_session_mutation_fails() {
        let store = SessionStore::new();
        let result = store.with_session_mut(Uuid::new_v4(), |_| Ok(()));
        assert_eq!(result.unwrap_err().http_status(), 404);
    }

    #[test]
    fn test_idle_sessions_are_evicted() {
        let store = hour_ttl_store();
        for _ in 0..100 {
            store.create();
        }
        assert_eq!(store.len(), 100);

        assert_eq!(store.evict_idle(), 0);
        let later = Utc::now() + TimeDelta::hours(2);
        assert_eq!(store.evict_idle_at(later), 100);
        assert!(store.is_empty());
    }

    #[test]
    fn test_access_keeps_session_alive() {
        let store = hour_ttl_store();
        let active = store.create().id;
        let abandoned = store.create().id;

        for id in [active, abandoned] {
            store.sessions.alter(&id, |_, mut s| {
                s.last_active -= TimeDelta::minutes(50);
                s
            });
        }
        store.get(active).unwrap();

        let later = Utc::now() + TimeDelta::minutes(30);
        assert_eq!(store.evict_idle_at(later), 1);
        assert!(store.get(active).is_ok());
        assert_eq!(store.get(abandoned).unwrap_err().http_status(), 404);
    }

    #[test]
    fn test_expired_session_is_not_found_before_sweep() {
        let store = SessionStore::with_idle_ttl(Some(Duration::from_secs(60)));
        let id = store.create().id;
        store.sessions.alter(&id, |_, mut s| {
            s.last_active -= TimeDelta::minutes(5);
            s
        });

        assert_eq!(store.get(id).unwrap_err().http_status(), 404);
        assert!(store.is_empty());
    }

    #[test]
    fn test_without_ttl_nothing_expires() {
        let store = SessionStore::new();
        let id = store.create().id;
        assert_eq!(store.evict_idle_at(Utc::now() + TimeDelta::days(365)), 0);
        assert!(store.get(id).is_ok());
    }
}
