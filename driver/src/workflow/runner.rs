use crate::workflow::config::WorkflowConfig;
use avgcore::telemetry::LogManager;
use avgcore::{average, InvocationResult};

pub struct Runner {
    config: WorkflowConfig,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
        }
    }

    /// Averages every configured invocation, preserving call order.
    pub fn execute(&self) -> Vec<InvocationResult> {
        self.logger.record(&format!(
            "running {} invocation(s)",
            self.config.invocations.len()
        ));
        self.config
            .invocations
            .iter()
            .map(|invocation| {
                let result = InvocationResult {
                    name: invocation.name.clone(),
                    values: invocation.values.clone(),
                    average: average(&invocation.values),
                };
                self.logger.trace_result(&result);
                result
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_averages_default_invocations() {
        let runner = Runner::new(WorkflowConfig::default());
        let averages: Vec<f64> = runner.execute().iter().map(|r| r.average).collect();
        assert_eq!(averages, vec![4.0, 5.0, 312.8, 0.0]);
    }

    #[test]
    fn runner_with_no_invocations_yields_nothing() {
        let runner = Runner::new(WorkflowConfig {
            invocations: Vec::new(),
        });
        assert!(runner.execute().is_empty());
    }
}
