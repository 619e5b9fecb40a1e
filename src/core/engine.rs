use crate::domain::model::BatchStats;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output_path: String,
    pub stats: BatchStats,
}

pub struct AdvisorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AdvisorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting orientation run");

        tracing::info!("📥 Reading roster...");
        let students = self.pipeline.extract().await?;
        tracing::info!("📥 {} students to analyse", students.len());

        tracing::info!("🔄 Generating recommendations...");
        let result = self.pipeline.transform(students).await?;
        let stats = BatchStats::from_processed(&result.processed);
        match stats.success_rate() {
            Some(rate) => tracing::info!(
                "📊 {} students analysed, {} successful, {} failed ({:.1}% success)",
                stats.total,
                stats.successful,
                stats.failed,
                rate
            ),
            None => tracing::info!("📊 No students analysed"),
        }

        tracing::info!("💾 Writing report...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("💾 Report saved to: {}", output_path);

        Ok(RunSummary { output_path, stats })
    }
}
