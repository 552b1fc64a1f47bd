pub mod identity_directory;
pub mod session;
pub mod session_snapshot;
pub mod session_store;
pub mod session_store_config;

pub use identity_directory::IdentityDirectory;
pub use session::Session;
pub use session_snapshot::SessionSnapshot;
pub use session_store::SessionStore;
pub use session_store_config::SessionStoreConfig;

#[cfg(test)]
mod tests;
