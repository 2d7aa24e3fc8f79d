use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Counts reported after a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_with_solution: usize,
    pub puzzles_saved: usize,
    pub output_path: String,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("Starting puzzle sampling");

        // Extract: 讀檔 + 過濾
        let extracted = self.pipeline.extract()?;
        let rows_read = extracted.rows_read;
        let rows_with_solution = extracted.rows_with_solution.len();
        println!("Rows with solution: {}", rows_with_solution);
        monitor.log_stats("Extract");

        // Transform: 抽樣 + 轉換
        let transformed = self.pipeline.transform(extracted)?;
        let puzzles_saved = transformed.puzzles.len();
        tracing::info!("Selected {} puzzles", puzzles_saved);
        monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(transformed)?;
        println!("Saved {} puzzles to {}", puzzles_saved, output_path);
        monitor.log_stats("Load");
        monitor.log_final_stats();

        Ok(RunSummary {
            rows_read,
            rows_with_solution,
            puzzles_saved,
            output_path,
        })
    }
}
