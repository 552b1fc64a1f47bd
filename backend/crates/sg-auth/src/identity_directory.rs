//! In-memory collection of every known identity.

use sg_core::{Identity, IdentityId, ProfessionalProfile, demo_identity};

/// All identities known to the running process.
///
/// Email is the lookup key, but duplicates are allowed; lookups return the
/// earliest registered match.
#[derive(Debug, Clone)]
pub struct IdentityDirectory {
    identities: Vec<Identity>,
}

impl IdentityDirectory {
    /// Directory holding only the demo identity
    pub fn seeded() -> Self {
        Self {
            identities: vec![demo_identity()],
        }
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Identity> {
        self.identities.iter().find(|identity| identity.email == email)
    }

    pub fn get(&self, id: &IdentityId) -> Option<&Identity> {
        self.identities.iter().find(|identity| &identity.id == id)
    }

    pub fn contains_id(&self, id: &IdentityId) -> bool {
        self.get(id).is_some()
    }

    /// Generate an id no existing identity uses
    pub fn next_id(&self) -> IdentityId {
        loop {
            let id = IdentityId::new();
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    pub fn push(&mut self, identity: Identity) {
        self.identities.push(identity);
    }

    /// Replace the profile of the identity with `id`. Returns false if absent.
    pub fn replace_profile(&mut self, id: &IdentityId, profile: ProfessionalProfile) -> bool {
        match self.identities.iter_mut().find(|identity| &identity.id == id) {
            Some(identity) => {
                identity.profile = Some(profile);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.identities.iter()
    }
}

impl Default for IdentityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
