use anyhow::Context;
use avgcore::input::parse_values;
use avgcore::Invocation;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordered list of invocations the driver averages and prints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub invocations: Vec<Invocation>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            invocations: vec![
                Invocation::new("pair", vec![2.0, 6.0]),
                Invocation::new("six", vec![2.0, 3.0, 3.0, 5.0, 7.0, 10.0]),
                Invocation::new("five", vec![7.0, 1432.0, 12.0, 13.0, 100.0]),
                Invocation::new("empty", Vec::new()),
            ],
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let mut config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config.fill_missing_names();
        info!(
            "loaded {} invocation(s) from {}",
            config.invocations.len(),
            path_ref.display()
        );
        Ok(config)
    }

    /// Builds one invocation per `--values` list, named by its position.
    pub fn from_value_lists<S: AsRef<str>>(lists: &[S]) -> anyhow::Result<Self> {
        let invocations = lists
            .iter()
            .enumerate()
            .map(|(index, list)| {
                let values = parse_values(list.as_ref())
                    .with_context(|| format!("parsing --values #{}", index + 1))?;
                Ok(Invocation::new(format!("values-{}", index + 1), values))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { invocations })
    }

    fn fill_missing_names(&mut self) {
        for (index, invocation) in self.invocations.iter_mut().enumerate() {
            if invocation.name.is_empty() {
                invocation.name = format!("invocation-{}", index + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_holds_quiz_invocations_in_order() {
        let cfg = WorkflowConfig::default();
        let lengths: Vec<usize> = cfg.invocations.iter().map(|i| i.values.len()).collect();
        assert_eq!(lengths, vec![2, 6, 5, 0]);
    }

    #[test]
    fn config_from_value_lists_parses_each_list() {
        let cfg = WorkflowConfig::from_value_lists(&["2, 6", ""]).unwrap();
        assert_eq!(cfg.invocations.len(), 2);
        assert_eq!(cfg.invocations[0].values, vec![2.0, 6.0]);
        assert_eq!(cfg.invocations[1].name, "values-2");
        assert!(cfg.invocations[1].values.is_empty());
    }

    #[test]
    fn config_from_value_lists_rejects_junk() {
        let err = WorkflowConfig::from_value_lists(&["1, x"]).unwrap_err();
        assert!(format!("{:#}", err).contains("--values #1"));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"invocations:\n  - name: pair\n    values: [2, 6]\n  - values: []\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.invocations[0].values, vec![2.0, 6.0]);
        assert_eq!(cfg.invocations[1].name, "invocation-2");
    }

    #[test]
    fn config_load_rejects_non_numeric_values() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"invocations:\n  - values: [1, two]\n").unwrap();
        let path = temp.into_temp_path();
        assert!(WorkflowConfig::load(&path).is_err());
    }
}
