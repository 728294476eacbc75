use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use ndarray::Array2;
use tomocore::interface::{ReconReport, StageSummary};
use tomocore::prelude::{ReconError, ReconStage};
use tomocore::processing::{BackprojectStage, ProjectorStage, RampFilterStage};
use tomocore::telemetry::MetricsRecorder;

pub struct WorkflowResult {
    pub sinogram: Array2<f32>,
    pub backprojection: Array2<f32>,
    pub filtered_sinogram: Array2<f32>,
    pub filtered_backprojection: Array2<f32>,
    pub report: ReconReport,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Runs the fixed pipeline order: project, backproject the raw sinogram,
    /// filter, backproject the filtered sinogram.
    pub fn execute(&self, image: &Array2<f32>) -> anyhow::Result<WorkflowResult> {
        let recon_config = self.config.to_recon_config();
        let metrics = MetricsRecorder::new();
        let dim = image.dim().1;

        let mut projector = ProjectorStage::new();
        projector
            .initialize(&recon_config)
            .context("initializing projector stage")?;
        let sinogram =
            run_stage(&mut projector, image, &metrics).context("executing projector stage")?;
        projector.cleanup();

        let mut backprojector = BackprojectStage::new();
        backprojector
            .initialize(&recon_config)
            .context("initializing backprojection stage")?;
        let backprojection = run_stage(&mut backprojector, &sinogram, &metrics)
            .context("backprojecting raw sinogram")?;

        let mut filter = RampFilterStage::new();
        filter
            .initialize(&recon_config)
            .context("initializing ramp-filter stage")?;
        let filtered_sinogram =
            run_stage(&mut filter, &sinogram, &metrics).context("filtering sinogram")?;
        filter.cleanup();

        let filtered_backprojection = run_stage(&mut backprojector, &filtered_sinogram, &metrics)
            .context("backprojecting filtered sinogram")?;
        backprojector.cleanup();

        let snapshot = metrics.snapshot();
        log::info!(
            "pipeline complete: {} stage passes, {} rows produced",
            snapshot.stages_completed,
            snapshot.rows_processed
        );

        let report = ReconReport {
            sino_rows: self.config.sino_rows,
            dim,
            stages: vec![
                StageSummary::from_array("sinogram", &sinogram),
                StageSummary::from_array("backprojection", &backprojection),
                StageSummary::from_array("filtered_sinogram", &filtered_sinogram),
                StageSummary::from_array("filtered_backprojection", &filtered_backprojection),
            ],
        };

        Ok(WorkflowResult {
            sinogram,
            backprojection,
            filtered_sinogram,
            filtered_backprojection,
            report,
        })
    }
}

fn run_stage(
    stage: &mut dyn ReconStage,
    input: &Array2<f32>,
    metrics: &MetricsRecorder,
) -> Result<Array2<f32>, ReconError> {
    match stage.execute(input) {
        Ok(output) => {
            metrics.record_rows(output.dim().0);
            metrics.record_stage();
            Ok(output)
        }
        Err(err) => {
            metrics.record_error();
            Err(err)
        }
    }
}
