pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_required_field, validate_secret, validate_url, Validate,
};
use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://api.abuseipdb.com/api/v2";
pub const DEFAULT_OUTPUT_FILE: &str = "abuseipdb_results_ips.json";
pub const API_KEY_ENV: &str = "ABUSEIPDB_API_KEY";

/// Lookback window sent as `maxAgeInDays`.
pub const MAX_AGE_IN_DAYS: u32 = 30;

#[derive(Debug, Clone, Parser)]
#[command(name = "abuseip-check", version)]
#[command(about = "Check a list of IP addresses against AbuseIPDB")]
pub struct CliConfig {
    /// File with one IP address per line (prompted for when omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Where the JSON results are written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// AbuseIPDB API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the AbuseIPDB v2 API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Do not print the startup banner")]
    pub no_banner: bool,
}

impl CliConfig {
    /// Builds the validated runtime configuration. Fails when no API key
    /// was supplied.
    pub fn resolve(&self) -> Result<CheckerConfig> {
        let api_key = validate_required_field("api_key", &self.api_key)?;

        let config = CheckerConfig {
            api_key: api_key.trim().to_string(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
            max_age_in_days: MAX_AGE_IN_DAYS,
            output_path: self.output.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone)]
pub struct CheckerConfig {
    pub api_key: String,
    pub base_url: String,
    pub max_age_in_days: u32,
    pub output_path: String,
}

impl std::fmt::Debug for CheckerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("max_age_in_days", &self.max_age_in_days)
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl Validate for CheckerConfig {
    fn validate(&self) -> Result<()> {
        validate_secret("api_key", &self.api_key)?;
        validate_url("base_url", &self.base_url)?;
        validate_path("output", &self.output_path)?;
        Ok(())
    }
}

impl ConfigProvider for CheckerConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_age_in_days(&self) -> u32 {
        self.max_age_in_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CheckError;

    fn cli(api_key: Option<&str>) -> CliConfig {
        CliConfig {
            input: None,
            output: DEFAULT_OUTPUT_FILE.to_string(),
            api_key: api_key.map(str::to_string),
            base_url: format!("{}/", DEFAULT_BASE_URL),
            verbose: false,
            no_banner: true,
        }
    }

    #[test]
    fn test_resolve_with_key() {
        let config = cli(Some(" secret ")).resolve().unwrap();
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.max_age_in_days(), 30);
        assert_eq!(config.output_path, "abuseipdb_results_ips.json");
    }

    #[test]
    fn test_resolve_without_key_fails() {
        assert!(matches!(
            cli(None).resolve(),
            Err(CheckError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_resolve_with_blank_key_fails() {
        assert!(matches!(
            cli(Some("  ")).resolve(),
            Err(CheckError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = cli(Some("top-secret")).resolve().unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::try_parse_from([
            "abuseip-check",
            "--input",
            "ips.txt",
            "--api-key",
            "k",
            "--no-banner",
        ])
        .unwrap();
        assert_eq!(config.input.as_deref(), Some("ips.txt"));
        assert_eq!(config.output, DEFAULT_OUTPUT_FILE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.no_banner);
    }
}
