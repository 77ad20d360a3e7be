#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("API token must not be empty")]
    EmptyToken,
}
