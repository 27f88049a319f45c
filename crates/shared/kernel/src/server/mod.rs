mod health;
pub mod router;
mod state;

pub use state::{ApiState, ApiStateBuilder, ApiStateError};
