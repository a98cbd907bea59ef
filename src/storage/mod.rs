//! Address Storage Module
//!
//! Durable persistence for address records.
//!
//! ## Core Concepts
//! - **Uniqueness**: No two records may share a (latitude, longitude) pair. The rule lives in
//!   the SQLite schema as a `UNIQUE` constraint, so concurrent writers cannot both win.
//! - **Scoped transactions**: Every operation acquires the shared connection and runs in its
//!   own transaction, released on all exit paths.
//! - **Ownership**: The store owns record lifetime; callers receive cloned `Address` values.

pub mod sqlite;
pub mod types;
