mod dispatch;
mod display;
#[cfg(test)]
mod stub;

use clap::Parser;
use textlens_comprehend::{ClientSettings, ComprehendAnalyzer, ConfigError, load_sdk_config};
use textlens_core::{LanguageCode, SAMPLE_TEXTS};
use tracing_subscriber::EnvFilter;

use crate::dispatch::{DispatchOptions, Dispatcher, LanguagePolicy};

/// Run AWS Comprehend language, sentiment, entity, key-phrase, PII and syntax
/// analysis over a few sample texts.
#[derive(Parser, Debug)]
#[command(name = "textlens", version, about)]
struct Cli {
    /// AWS region; defaults to the standard provider chain.
    #[arg(long, env = "TEXTLENS_REGION")]
    region: Option<String>,

    /// Named profile from the shared AWS config files.
    #[arg(long, env = "TEXTLENS_PROFILE")]
    profile: Option<String>,

    /// Override the Comprehend endpoint.
    #[arg(long, env = "TEXTLENS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Language code sent with every call except language detection.
    #[arg(long, default_value = "en")]
    language: LanguageCode,

    /// Send the detected dominant language instead of --language, which
    /// becomes the fallback when detection fails.
    #[arg(long)]
    follow_detected_language: bool,

    /// Issue the operations for one text concurrently.
    #[arg(long)]
    concurrent: bool,

    /// Text to analyse instead of the built-in samples. Repeatable.
    #[arg(long = "text", value_name = "TEXT")]
    texts: Vec<String>,
}

impl Cli {
    fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }

    fn dispatch_options(&self) -> DispatchOptions {
        let language = if self.follow_detected_language {
            LanguagePolicy::FollowDetected {
                fallback: self.language.clone(),
            }
        } else {
            LanguagePolicy::Fixed(self.language.clone())
        };
        DispatchOptions {
            language,
            concurrent: self.concurrent,
        }
    }
}

/// Startup configuration failures end the run with this one-line report.
fn config_failure(err: ConfigError) -> anyhow::Error {
    anyhow::anyhow!("failed to load AWS config: {err}")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::info!("textlens v{}", env!("CARGO_PKG_VERSION"));

    let config = load_sdk_config(&cli.client_settings())
        .await
        .map_err(config_failure)?;
    let analyzer = ComprehendAnalyzer::new(&config);
    let dispatcher = Dispatcher::new(analyzer, cli.dispatch_options());

    let mut out = std::io::stdout().lock();
    if cli.texts.is_empty() {
        dispatcher.run(SAMPLE_TEXTS, &mut out).await?;
    } else {
        dispatcher.run(cli.texts.as_slice(), &mut out).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keeps_reference_behaviour() {
        let cli = Cli::try_parse_from(["textlens"]).unwrap();
        let options = cli.dispatch_options();
        let expected = LanguagePolicy::Fixed(LanguageCode::english());
        assert_eq!(options.language, expected);
        assert!(!options.concurrent);
        assert!(cli.texts.is_empty());
    }

    #[test]
    fn follow_detected_uses_language_as_fallback() {
        let cli = Cli::try_parse_from([
            "textlens",
            "--language",
            "fr",
            "--follow-detected-language",
            "--concurrent",
        ])
        .unwrap();
        let options = cli.dispatch_options();
        let expected = LanguagePolicy::FollowDetected {
            fallback: "fr".parse().unwrap(),
        };
        assert_eq!(options.language, expected);
        assert!(options.concurrent);
    }

    #[test]
    fn repeated_text_flags_replace_samples() {
        let cli = Cli::try_parse_from(["textlens", "--text", "one", "--text", "two"]).unwrap();
        assert_eq!(cli.texts, vec!["one", "two"]);
    }

    #[test]
    fn invalid_language_is_rejected() {
        assert!(Cli::try_parse_from(["textlens", "--language", "english"]).is_err());
    }

    #[test]
    fn client_overrides_are_forwarded() {
        let cli = Cli::try_parse_from([
            "textlens",
            "--region",
            "eu-west-2",
            "--profile",
            "demo",
            "--endpoint-url",
            "http://localhost:4566",
        ])
        .unwrap();
        let settings = cli.client_settings();
        assert_eq!(settings.region.as_deref(), Some("eu-west-2"));
        assert_eq!(settings.profile.as_deref(), Some("demo"));
        assert_eq!(
            settings.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
    }

    #[test]
    fn config_failure_reports_a_single_line() {
        let err = config_failure(ConfigError::MissingCredentials);
        assert_eq!(err.chain().count(), 1);
        let report = format!("{err:#}");
        assert_eq!(
            report,
            "failed to load AWS config: no AWS credentials provider available"
        );
        assert!(!report.contains('\n'));
    }
}
