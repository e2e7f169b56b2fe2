//! Connection configuration subsystem.
//!
//! # Data Flow
//! ```text
//! connection file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ConnectionData (validated, immutable)
//!     → handed to FabricConnection
//! ```
//!
//! # Design Decisions
//! - Only the three paths are required; everything else has a default
//! - Validation never touches the file system; missing files surface on connect
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_connection_data, ConfigError};
pub use schema::{ConnectionData, IdentityFormat};
pub use validation::{validate_connection_data, ValidationError};
