//! Client side authentication against the package repository API.

mod arguments;
mod error;
mod inject;
mod provider;

pub use arguments::*;
pub use error::*;
pub use inject::*;
pub use provider::*;
