use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn is_file(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn max_age_in_days(&self) -> u32;
}

#[async_trait]
pub trait ReputationSource: Send + Sync {
    /// One lookup for a validated target, sent exactly as it was read.
    /// The raw JSON body on success.
    async fn check(&self, target: &str) -> Result<serde_json::Value>;
}
