use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use tubecell::engine::config::BoundaryPolicy;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileLatticeConfig {
    pub n_phi: Option<usize>,
    pub n_z: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileEnergyConfig {
    pub coefficients: Option<Vec<f64>>,
    pub coefficients_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileValidationConfig {
    pub boundary_policy: Option<BoundaryPolicy>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub lattice: Option<FileLatticeConfig>,
    pub energy: Option<FileEnergyConfig>,
    pub validation: Option<FileValidationConfig>,
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();

            match key {
                "lattice.n-phi" => {
                    self.lattice.get_or_insert_with(Default::default).n_phi =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "lattice.n-z" => {
                    self.lattice.get_or_insert_with(Default::default).n_z =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "energy.coefficients" => {
                    let values = value_str
                        .trim_matches(|c| c == '[' || c == ']')
                        .split(',')
                        .map(|v| parse_value(key, v, "float"))
                        .collect::<Result<Vec<f64>>>()?;
                    let energy = self.energy.get_or_insert_with(Default::default);
                    energy.coefficients = Some(values);
                    energy.coefficients_path = None;
                }
                "energy.coefficients-path" => {
                    let energy = self.energy.get_or_insert_with(Default::default);
                    energy.coefficients_path = Some(PathBuf::from(value_str.trim()));
                    energy.coefficients = None;
                }
                "validation.boundary-policy" => {
                    let policy = value_str
                        .parse::<BoundaryPolicy>()
                        .map_err(|e| CliError::Config(e.to_string()))?;
                    self.validation
                        .get_or_insert_with(Default::default)
                        .boundary_policy = Some(policy);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
