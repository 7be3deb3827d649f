pub mod errors;

pub use errors::{Error, Result};
