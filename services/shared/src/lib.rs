pub mod constants;
pub mod errors;
pub mod proto;
pub mod types;

pub use constants::*;
pub use errors::ErrorCategory;
pub use types::*;
