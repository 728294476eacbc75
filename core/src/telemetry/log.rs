use log::info;

/// Stage-labelled logger over the `log` facade.
pub struct LogManager {
    stage: &'static str,
}

impl LogManager {
    pub fn for_stage(stage: &'static str) -> Self {
        Self { stage }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.stage, message);
    }
}
