//! Runtime configuration.
//!
//! Every option can be given on the command line or through an
//! `ADDRESS_BOOK_*` environment variable; the command line wins.

use crate::coords::distance::DistanceModel;
use crate::error::Result;
use crate::storage::sqlite::AddressStore;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Database path value that selects a private in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "address-book",
    version,
    about = "Address book HTTP service with proximity search"
)]
pub struct Config {
    /// Socket address the HTTP server listens on
    #[arg(long, env = "ADDRESS_BOOK_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// SQLite database file, or ":memory:" for a throwaway database
    #[arg(
        long,
        env = "ADDRESS_BOOK_DATABASE",
        value_name = "PATH",
        default_value = "./address_book.db"
    )]
    pub database: PathBuf,

    /// Earth model used by proximity search
    #[arg(
        long,
        env = "ADDRESS_BOOK_DISTANCE_MODEL",
        value_enum,
        default_value_t = DistanceModel::Geodesic
    )]
    pub distance_model: DistanceModel,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "ADDRESS_BOOK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn is_in_memory(&self) -> bool {
        self.database.as_os_str() == IN_MEMORY_DATABASE
    }

    /// Opens the store this configuration points at.
    pub fn open_store(&self) -> Result<AddressStore> {
        if self.is_in_memory() {
            AddressStore::open_in_memory()
        } else {
            AddressStore::open(&self.database)
        }
    }
}

/// Installs the global `tracing` subscriber.
pub fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("address_book={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_level(true))
        .init();
}
