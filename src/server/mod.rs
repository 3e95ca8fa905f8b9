//! Server setup and configuration
//!
//! - **`config`** - environment-driven configuration (database, CORS)
//! - **`state`** - shared application state and `FromRef` extraction
//! - **`init`** - application assembly

pub mod config;
pub mod init;
pub mod state;

pub use init::create_app;
pub use state::AppState;
