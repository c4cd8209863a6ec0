//! Session store adapters.

mod keyring_store;

pub use keyring_store::KeyringSessionStore;
