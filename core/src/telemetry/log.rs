use log::{debug, info};

use crate::prelude::InvocationResult;

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn trace_result(&self, result: &InvocationResult) {
        debug!(
            "{} -> {} over {} values",
            result.name,
            result.average,
            result.values.len()
        );
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
