use crate::domain::model::{FeedData, MapLayers};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn earthquake_feed(&self) -> &str;
    fn plates_feed(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn output_formats(&self) -> &[String];
    fn bundle(&self) -> bool;
    fn map_center(&self) -> [f64; 2];
    fn map_zoom(&self) -> u8;

    fn wants_format(&self, format: &str) -> bool {
        self.output_formats().iter().any(|f| f == format)
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<FeedData>;
    async fn transform(&self, data: FeedData) -> Result<MapLayers>;
    async fn load(&self, layers: MapLayers) -> Result<String>;
}
