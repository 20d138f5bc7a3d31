pub mod api;
pub mod error;
#[cfg(test)]
pub mod testing;

pub use api::{HttpPlayerApi, PlayerApi};
pub use error::ApiError;
