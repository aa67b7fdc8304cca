use crate::domain::ports::{ConfigProvider, ReputationSource};
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

/// AbuseIPDB v2 `/check` client.
pub struct AbuseIpDbClient {
    client: Client,
    api_key: String,
    base_url: String,
    max_age_in_days: u32,
}

impl AbuseIpDbClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key().to_string(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            max_age_in_days: config.max_age_in_days(),
        }
    }

    fn check_url(&self) -> String {
        format!("{}/check", self.base_url)
    }
}

#[async_trait]
impl ReputationSource for AbuseIpDbClient {
    async fn check(&self, target: &str) -> Result<serde_json::Value> {
        tracing::debug!("GET {} ipAddress={}", self.check_url(), target);

        let response = self
            .client
            .get(self.check_url())
            .header(ACCEPT, "application/json")
            .header("Key", &self.api_key)
            .query(&[
                ("ipAddress", target.to_string()),
                ("maxAgeInDays", self.max_age_in_days.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(rejection(status, &url, api_error_detail(&body)));
        }

        let body: serde_json::Value = response.json().await?;
        Ok(body)
    }
}

/// Builds the error for a non-2xx answer, worded
/// `"<code> Client Error: <reason> for url: <url>"`.
pub fn rejection(status: StatusCode, url: &str, detail: Option<String>) -> CheckError {
    let class = if status.is_client_error() {
        "Client Error"
    } else if status.is_server_error() {
        "Server Error"
    } else {
        "HTTP Error"
    };

    CheckError::RemoteRejection {
        status: status.as_u16(),
        message: format!(
            "{} {}: {} for url: {}",
            status.as_u16(),
            class,
            status.canonical_reason().unwrap_or("Unknown"),
            url
        ),
        detail,
    }
}

/// First `errors[].detail` of an AbuseIPDB error body.
fn api_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("errors")?
        .as_array()?
        .iter()
        .find_map(|e| e.get("detail").and_then(|d| d.as_str()))
        .map(str::to_string)
}
