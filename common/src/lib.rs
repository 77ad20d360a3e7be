pub mod error;

#[cfg(feature = "tls")]
pub mod reqwest;
#[cfg(feature = "tls")]
pub mod tls;
