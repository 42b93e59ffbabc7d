//! In-memory session store - the single source of truth for auth state.
//!
//! One store instance lives for the application process; components receive
//! it by reference (it is cheap to clone) rather than through a global.
//! State is lost when the process ends - nothing is persisted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use skillmap_core::domain::{Session, User};

type Observer = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct StoreInner {
    session: RwLock<Session>,
    observers: RwLock<HashMap<u64, Observer>>,
    next_observer_id: AtomicU64,
}

/// Session store - owns the current [`Session`] and notifies subscribers on
/// every change. Clones share state.
///
/// All operations are total: no I/O, no error conditions. Mutations are
/// atomic; observers always see a consistent post-mutation snapshot.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl SessionStore {
    /// Create a store holding the unauthenticated empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session. No side effects.
    pub fn current(&self) -> Session {
        read_lock(&self.inner.session).clone()
    }

    /// Record a successful authentication.
    pub fn login(&self, user: User, token: String) {
        let snapshot = {
            let mut session = write_lock(&self.inner.session);
            session.user = Some(user);
            session.token = Some(token);
            session.authenticated = true;
            session.clone()
        };
        if let Some(user) = &snapshot.user {
            tracing::debug!(user_id = %user.id, "session authenticated");
        }
        self.notify(&snapshot);
    }

    /// Clear the session. Idempotent - calling it while already logged out
    /// leaves the store unauthenticated and still notifies observers.
    pub fn logout(&self) {
        let snapshot = {
            let mut session = write_lock(&self.inner.session);
            session.user = None;
            session.token = None;
            session.authenticated = false;
            session.clone()
        };
        tracing::debug!("session cleared");
        self.notify(&snapshot);
    }

    /// Set the loading indicator, independent of authentication state.
    pub fn set_loading(&self, loading: bool) {
        let snapshot = {
            let mut session = write_lock(&self.inner.session);
            session.loading = loading;
            session.clone()
        };
        self.notify(&snapshot);
    }

    /// Replace the user record while authenticated. A no-op when logged out:
    /// an anonymous session has no user to update.
    pub fn update_user(&self, user: User) {
        let snapshot = {
            let mut session = write_lock(&self.inner.session);
            if !session.authenticated {
                return;
            }
            session.user = Some(user);
            session.clone()
        };
        self.notify(&snapshot);
    }

    /// Register an observer called synchronously, on the mutating caller's
    /// thread, with the post-mutation snapshot.
    ///
    /// Keep the returned handle to unsubscribe later; dropping it without
    /// calling [`Subscription::unsubscribe`] leaves the observer registered.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = self.inner.next_observer_id.fetch_add(1, Ordering::Relaxed);
        write_lock(&self.inner.observers).insert(id, Arc::new(observer));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn notify(&self, snapshot: &Session) {
        // Clone the observers out of the lock so a callback can re-enter the
        // store (read, subscribe, unsubscribe) without deadlocking.
        let observers: Vec<Observer> = read_lock(&self.inner.observers).values().cloned().collect();
        for observer in observers {
            observer(snapshot);
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[must_use = "dropping the handle without unsubscribing leaves the observer registered"]
pub struct Subscription {
    id: u64,
    inner: Weak<StoreInner>,
}

impl Subscription {
    /// Remove the observer. Safe to call after the store itself is gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            write_lock(&inner.observers).remove(&self.id);
        }
    }
}

// Observers run under no lock and the locked sections cannot panic, but a
// poisoned lock must not take the whole session down with it.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
