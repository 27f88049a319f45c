//! Convenience re-exports for consumers of the kernel.

pub use crate::config::{ConfigError, load_config};
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use smint_domain::config::ApiConfig;
pub use smint_domain::registry::{FeatureSlice, InitializedSlice};
