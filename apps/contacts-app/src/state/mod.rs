//! # State Module
//!
//! Application state created during bootstrap.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                        AppState                                         │
//! │                           │                                             │
//! │          ┌────────────────┴────────────────┐                            │
//! │          ▼                                 ▼                            │
//! │  ┌──────────────────┐             ┌──────────────────────┐             │
//! │  │   ConfigState    │             │       DbState        │             │
//! │  │                  │             │                      │             │
//! │  │  database_path   │             │  Arc<Database-       │             │
//! │  │  max_connections │             │      Container>      │             │
//! │  │  log_filter      │             │                      │             │
//! │  └──────────────────┘             └──────────────────────┘             │
//! │                                                                         │
//! │  • ConfigState: read-only after startup                                │
//! │  • DbState: cloneable, every clone shares one database                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;

pub use config::{default_database_path, ConfigError, ConfigState, DEFAULT_LOG_FILTER};
pub use db::DbState;

/// Everything the UI layer needs, wired once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ConfigState,
    pub db: DbState,
}
