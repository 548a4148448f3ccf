//! Infrastructure layer for juris
//!
//! Concrete adapters behind the application layer's ports: the built-in
//! tool catalog, the HTTP execution endpoint client, the REST practice
//! store, and configuration loading.

pub mod config;
pub mod practice;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, PracticeServiceConfig, ToolServiceConfig};
pub use practice::RestPracticeStore;
pub use tools::{HttpToolEndpoint, catalog, default_catalog};
