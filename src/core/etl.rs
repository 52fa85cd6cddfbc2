use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting map layer build");

        let feeds = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} earthquakes and {} plate boundaries",
            feeds.earthquakes.features.len(),
            feeds.plates.features.len()
        );
        self.monitor.log_phase("extract");

        let layers = self.pipeline.transform(feeds).await?;
        tracing::info!(
            "Styled {} earthquakes ({} skipped)",
            layers.summaries.len(),
            layers.skipped
        );
        self.monitor.log_phase("transform");

        let output_path = self.pipeline.load(layers).await?;
        tracing::info!("Map layers saved to: {}", output_path);
        self.monitor.log_phase("load");
        self.monitor.log_summary();

        Ok(output_path)
    }
}
