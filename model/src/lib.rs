mod package;
mod version;

pub use package::*;
pub use version::*;
