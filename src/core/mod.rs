pub mod clipboard;
pub mod config;
pub mod error;
pub mod transform;
pub mod types;

pub use config::{ConfigLoader, ConfigValidator, StrmodConfig};
pub use error::{AppError, ValidationError};
pub use transform::{transform, validate, TransformRequest, TransformResult};
pub use types::*;
