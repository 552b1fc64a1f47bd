//! Session store - owns the session slot and the identity directory.
//!
//! Sign-in and sign-up each suspend exactly once, standing in for the
//! network call a real backend would make. Mutating operations take
//! `&mut self`, so a store can never have two operations in flight.
//! `is_loading` is cleared when the operation finishes or its future is
//! dropped.

use crate::{IdentityDirectory, Session, SessionSnapshot, SessionStoreConfig};

use sg_core::{Identity, ProfessionalProfile, Registration};

use std::ops::{Deref, DerefMut};

use log::{debug, info};
use tokio::sync::watch;

pub struct SessionStore {
    directory: IdentityDirectory,
    session: Session,
    is_loading: bool,
    config: SessionStoreConfig,
    state_tx: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Create an anonymous store over the seeded directory
    pub fn new(config: SessionStoreConfig) -> Self {
        Self::with_directory(config, IdentityDirectory::seeded())
    }

    pub fn with_directory(config: SessionStoreConfig, directory: IdentityDirectory) -> Self {
        let (state_tx, _) = watch::channel(SessionSnapshot::default());
        info!(
            "Session store ready: {} known identities, latency={}ms",
            directory.len(),
            config.latency.as_millis()
        );
        Self {
            directory,
            session: Session::Anonymous,
            is_loading: false,
            config,
            state_tx,
        }
    }

    /// Sign in by exact email match.
    ///
    /// The password is accepted as given and never compared with anything;
    /// any password succeeds for a known email. On a miss the session is left
    /// exactly as it was.
    pub async fn sign_in(&mut self, email: &str, _password: &str) -> bool {
        let mut store = LoadingGuard::begin(self);
        store.round_trip().await;

        let found = store.directory.find_by_email(email).cloned();
        match found {
            Some(identity) => {
                info!("Signed in as identity {}", identity.id);
                store.session = Session::Authenticated(identity);
                true
            }
            None => {
                debug!("Sign-in lookup missed for {email}");
                info!("Sign-in rejected: credentials not found");
                false
            }
        }
    }

    /// Register a new identity and sign in as it. Duplicate emails are accepted.
    pub async fn sign_up(&mut self, registration: Registration) -> bool {
        let mut store = LoadingGuard::begin(self);
        store.round_trip().await;

        if store.directory.find_by_email(&registration.email).is_some() {
            debug!(
                "Registering duplicate email {}, earlier identity keeps sign-in",
                registration.email
            );
        }

        let identity = Identity::from_registration(store.directory.next_id(), registration);
        info!("Registered identity {}", identity.id);

        store.directory.push(identity.clone());
        store.session = Session::Authenticated(identity);
        true
    }

    pub fn sign_out(&mut self) {
        if let Some(identity) = self.session.identity() {
            info!("Signed out identity {}", identity.id);
        }
        self.session = Session::Anonymous;
        self.publish();
    }

    /// Replace the signed-in identity's profile in both the session and the
    /// directory. Does nothing when anonymous.
    pub fn update_profile(&mut self, profile: ProfessionalProfile) {
        let Session::Authenticated(identity) = &mut self.session else {
            debug!("Profile update ignored: no identity signed in");
            return;
        };

        if !self.directory.replace_profile(&identity.id, profile.clone()) {
            debug!("Identity {} missing from directory", identity.id);
        }
        identity.profile = Some(profile);
        info!("Updated profile for identity {}", identity.id);

        self.publish();
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn directory(&self) -> &IdentityDirectory {
        &self.directory
    }

    /// Current state as observers see it
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            identity: self.session.identity().cloned(),
            is_loading: self.is_loading,
        }
    }

    /// Receive every subsequent state change
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state_tx.subscribe()
    }

    async fn round_trip(&self) {
        tokio::time::sleep(self.config.latency).await;
    }

    fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
        self.publish();
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.snapshot());
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionStoreConfig::default())
    }
}

/// Holds `is_loading` for the life of one operation and clears it on drop,
/// including when the operation's future is dropped mid-suspension.
struct LoadingGuard<'a> {
    store: &'a mut SessionStore,
}

impl<'a> LoadingGuard<'a> {
    fn begin(store: &'a mut SessionStore) -> Self {
        store.set_loading(true);
        Self { store }
    }
}

impl Deref for LoadingGuard<'_> {
    type Target = SessionStore;

    fn deref(&self) -> &SessionStore {
        self.store
    }
}

impl DerefMut for LoadingGuard<'_> {
    fn deref_mut(&mut self) -> &mut SessionStore {
        self.store
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.set_loading(false);
    }
}
