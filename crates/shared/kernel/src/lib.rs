//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config
//! loading and the shared API state.
//!
//! ## Config loading
//! ```rust,ignore
//! use smint_kernel::config::load_config;
//! let cfg: smint_domain::config::ApiConfig = load_config(Some("server")).unwrap();
//! ```

pub mod config;
pub mod prelude;
pub mod server;

pub use smint_domain as domain;
