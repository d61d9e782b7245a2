//! Resolves AWS configuration from the standard provider chain.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no AWS region configured (set AWS_REGION, a profile region, or --region)")]
    MissingRegion,
    #[error("no AWS credentials provider available")]
    MissingCredentials,
    #[error("failed to resolve AWS credentials: {0}")]
    Credentials(String),
}

/// Optional overrides applied on top of the default provider chain.
#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Alternate endpoint, e.g. a local emulator.
    pub endpoint_url: Option<String>,
}

/// Load SDK configuration and check that it is usable.
///
/// The default chain is consulted in its usual order: environment variables,
/// shared config/credentials files, then container or instance role metadata.
/// Credentials are resolved eagerly so a missing identity is reported here
/// rather than on every call.
pub async fn load_sdk_config(settings: &ClientSettings) -> Result<SdkConfig, ConfigError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(url) = &settings.endpoint_url {
        loader = loader.endpoint_url(url);
    }

    let config = loader.load().await;
    verify(&config).await?;
    Ok(config)
}

async fn verify(config: &SdkConfig) -> Result<(), ConfigError> {
    let region = config.region().ok_or(ConfigError::MissingRegion)?;
    let provider = config
        .credentials_provider()
        .ok_or(ConfigError::MissingCredentials)?;
    let credentials = provider
        .provide_credentials()
        .await
        .map_err(|e| ConfigError::Credentials(e.to_string()))?;

    info!(
        region = %region,
        access_key = %redact(credentials.access_key_id()),
        "resolved AWS configuration"
    );
    Ok(())
}

/// Keep only the last four characters of a key id for logging.
fn redact(key: &str) -> String {
    let tail: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_credential_types::Credentials;
    use aws_credential_types::provider::SharedCredentialsProvider;

    fn static_credentials() -> SharedCredentialsProvider {
        SharedCredentialsProvider::new(Credentials::new(
            "AKIDEXAMPLE1234",
            "secret",
            None,
            None,
            "test",
        ))
    }

    #[tokio::test]
    async fn verify_requires_region() {
        let config = SdkConfig::builder()
            .credentials_provider(static_credentials())
            .build();
        assert!(matches!(
            verify(&config).await,
            Err(ConfigError::MissingRegion)
        ));
    }

    #[tokio::test]
    async fn verify_requires_credentials_provider() {
        let config = SdkConfig::builder()
            .region(Region::new("us-east-1"))
            .build();
        assert!(matches!(
            verify(&config).await,
            Err(ConfigError::MissingCredentials)
        ));
    }

    #[tokio::test]
    async fn verify_accepts_region_and_credentials() {
        let config = SdkConfig::builder()
            .region(Region::new("eu-west-1"))
            .credentials_provider(static_credentials())
            .build();
        assert!(verify(&config).await.is_ok());
    }

    #[test]
    fn redact_keeps_last_four() {
        assert_eq!(redact("AKIDEXAMPLE1234"), "****1234");
        assert_eq!(redact("ab"), "****ab");
    }

    #[test]
    fn settings_default_has_no_overrides() {
        let settings = ClientSettings::default();
        assert!(settings.region.is_none());
        assert!(settings.profile.is_none());
        assert!(settings.endpoint_url.is_none());
    }
}
