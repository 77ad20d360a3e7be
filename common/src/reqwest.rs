//! HTTP client configuration.

use std::time::Duration;

/// A client configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, clap::Args)]
#[command(next_help_heading = "HTTP client")]
pub struct ClientConfig {
    /// Timeout of a single request, unlimited if not set
    #[arg(long = "http-timeout", env = "HTTP_TIMEOUT")]
    pub timeout: Option<humantime::Duration>,

    /// Disable TLS certificate and hostname verification
    #[arg(long = "tls-insecure", env = "TLS_INSECURE", default_value_t = false)]
    pub tls_insecure: bool,

    /// Additional CA certificates (PEM) to trust
    #[arg(long = "ca-certificate", env = "CA_CERTIFICATE", value_delimiter = ',')]
    pub ca_certificates: Vec<String>,
}

impl ClientConfig {
    /// Create a new builder, pre-configured with the TLS settings and timeout.
    pub fn build_client_builder(&self) -> anyhow::Result<reqwest::ClientBuilder> {
        let tls: native_tls::TlsConnector = self.try_into()?;

        let mut builder = reqwest::ClientBuilder::new().use_preconfigured_tls(tls);

        if let Some(timeout) = self.timeout {
            let timeout: Duration = timeout.into();
            log::debug!("Using request timeout: {timeout:?}");
            builder = builder.timeout(timeout);
        }

        Ok(builder)
    }

    pub fn build_client(&self) -> anyhow::Result<reqwest::Client> {
        Ok(self.build_client_builder()?.build()?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_client() {
        assert!(ClientConfig::default().build_client().is_ok());
    }

    #[test]
    fn missing_certificate() {
        let config = ClientConfig {
            ca_certificates: vec!["/does/not/exist.pem".into()],
            ..Default::default()
        };
        let err = config.build_client().unwrap_err();
        assert!(err.to_string().contains("Reading certificate"));
    }

    #[test]
    fn with_timeout() {
        let config = ClientConfig {
            timeout: Some(Duration::from_secs(30).into()),
            ..Default::default()
        };
        assert!(config.build_client().is_ok());
    }
}
