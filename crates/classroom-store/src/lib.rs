//! classroom-store: Storage layer for the classroom platform
//!
//! This crate provides:
//! - The `RelationshipStore` contract the engines are written against
//! - A PostgreSQL implementation (`Store`) built on sqlx
//! - An in-memory implementation (`MemoryStore`) for tests and tooling
//! - Embedded migrations
//!
//! # Usage
//!
//! ```rust,ignore
//! use classroom_store::{RelationshipStore, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let teacher = store.find_teacher_with_roster(&email).await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use repository::RelationshipStore;
pub use store::{Store, StoreConfig};

// Re-export classroom-core for downstream crates
pub use classroom_core;
