//! API Error Module
//!
//! This module defines the error taxonomy for the whole API surface.
//! Every handler returns `Result<_, ApiError>`; the conversion submodule
//! maps each variant to an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
