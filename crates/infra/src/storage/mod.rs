//! Durable storage adapters.

mod file_vault;

pub use file_vault::FileVault;
