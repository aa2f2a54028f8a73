use super::file::{FileConfig, FileEnergyConfig};
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use tracing::debug;
use tubecell::core::energy::params::{EnergyCoefficients, MOTIF_CLASSES};
use tubecell::core::lattice::geometry::LatticeGeometry;
use tubecell::engine::config::{
    ConfigError, EvaluationConfig, EvaluationConfigBuilder, LatticeConfig,
};
use tubecell::engine::error::EngineError;

fn load_file_config(args: &ConfigArgs) -> Result<FileConfig> {
    let mut file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    file_config.apply_set_values(&args.set_values)?;
    Ok(file_config)
}

fn merge_lattice(args: &ConfigArgs, file_config: &FileConfig) -> Result<LatticeConfig> {
    let lattice_file = file_config.lattice.clone().unwrap_or_default();
    let n_phi = args
        .n_phi
        .or(lattice_file.n_phi)
        .ok_or_else(|| config_error(ConfigError::MissingParameter("lattice.n-phi")))?;
    let n_z = args
        .n_z
        .or(lattice_file.n_z)
        .ok_or_else(|| config_error(ConfigError::MissingParameter("lattice.n-z")))?;
    Ok(LatticeConfig { n_phi, n_z })
}

fn coefficients_from_values(values: &[f64]) -> Result<EnergyCoefficients> {
    let values: [f64; MOTIF_CLASSES] = values.try_into().map_err(|_| {
        CliError::Config(format!(
            "Expected {} energy coefficients (isolated, terminal, chain, junction), got {}",
            MOTIF_CLASSES,
            values.len()
        ))
    })?;
    Ok(EnergyCoefficients::from_array(values))
}

fn merge_coefficients(args: &ConfigArgs, energy_file: FileEnergyConfig) -> Result<EnergyCoefficients> {
    if let Some(values) = &args.coefficients {
        return coefficients_from_values(values);
    }
    if let Some(path) = &args.coefficients_path {
        debug!("Loading energy coefficients from {:?}", path);
        return EnergyCoefficients::load(path).map_err(|e| EngineError::from(e).into());
    }
    match (energy_file.coefficients, energy_file.coefficients_path) {
        (Some(_), Some(_)) => Err(CliError::Config(
            "`energy.coefficients` and `energy.coefficients-path` are mutually exclusive"
                .to_string(),
        )),
        (Some(values), None) => coefficients_from_values(&values),
        (None, Some(path)) => {
            debug!("Loading energy coefficients from {:?}", path);
            EnergyCoefficients::load(&path).map_err(|e| EngineError::from(e).into())
        }
        (None, None) => Err(config_error(ConfigError::MissingParameter(
            "energy.coefficients",
        ))),
    }
}

fn config_error(e: ConfigError) -> CliError {
    CliError::Config(e.to_string())
}

/// The periodic lattice alone; energy coefficients are not required.
pub fn build_lattice(args: &ConfigArgs) -> Result<LatticeGeometry> {
    let file_config = load_file_config(args)?;
    let lattice = merge_lattice(args, &file_config)?;
    lattice.geometry().map_err(config_error)
}

pub fn build_config(args: &ConfigArgs) -> Result<EvaluationConfig> {
    let mut file_config = load_file_config(args)?;
    let lattice = merge_lattice(args, &file_config)?;
    let coefficients = merge_coefficients(args, file_config.energy.take().unwrap_or_default())?;
    let boundary_policy = args
        .boundary_policy
        .or(file_config
            .validation
            .and_then(|validation| validation.boundary_policy))
        .unwrap_or_default();

    EvaluationConfigBuilder::new()
        .n_phi(lattice.n_phi)
        .n_z(lattice.n_z)
        .coefficients(coefficients)
        .boundary_policy(boundary_policy)
        .build()
        .map_err(config_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{TempDir, tempdir};
    use tubecell::engine::config::BoundaryPolicy;

    fn write_config_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn config_args(config_path: Option<&Path>, extra: &[&str]) -> ConfigArgs {
        let mut args = vec!["tubecell".to_string(), "evaluate".to_string()];
        args.extend(["-i".to_string(), "genomes.txt".to_string()]);
        if let Some(path) = config_path {
            args.extend(["-c".to_string(), path.to_str().unwrap().to_string()]);
        }
        args.extend(extra.iter().map(|s| s.to_string()));
        match Cli::parse_from(args).command {
            Commands::Evaluate(evaluate) => evaluate.config,
            _ => panic!("Expected 'evaluate' subcommand"),
        }
    }

    const BASE_CONFIG: &str = r#"
        [lattice]
        n-phi = 6
        n-z = 2

        [energy]
        coefficients = [0.0, -1.5, -3.2, -4.8]
    "#;

    #[test]
    fn file_values_are_used_with_default_policy() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "base.toml", BASE_CONFIG);
        let config = build_config(&config_args(Some(path.as_path()), &[])).unwrap();
        assert_eq!(config.lattice, LatticeConfig { n_phi: 6, n_z: 2 });
        assert_eq!(
            config.energy.coefficients.as_array(),
            [0.0, -1.5, -3.2, -4.8]
        );
        assert_eq!(config.validation.boundary_policy, BoundaryPolicy::EveryAtom);
    }

    #[test]
    fn cli_flags_override_set_values_which_override_the_file() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "base.toml", BASE_CONFIG);
        let args = config_args(
            Some(path.as_path()),
            &[
                "-S",
                "lattice.n-phi=8",
                "-S",
                "lattice.n-z=5",
                "--n-z",
                "3",
                "--boundary-policy",
                "any-bond",
            ],
        );
        let config = build_config(&args).unwrap();
        assert_eq!(config.lattice, LatticeConfig { n_phi: 8, n_z: 3 });
        assert_eq!(config.validation.boundary_policy, BoundaryPolicy::AnyBond);
    }

    #[test]
    fn cli_coefficients_override_the_file() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "base.toml", BASE_CONFIG);
        let args = config_args(Some(path.as_path()), &["--coefficients=1,2,3,4"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.energy.coefficients.as_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn coefficients_path_in_the_file_is_loaded() {
        let dir = tempdir().unwrap();
        let coefficients_path = write_config_file(
            &dir,
            "coefficients.toml",
            "[coefficients]\nisolated = 0.5\nterminal = -1.0\nchain = -2.0\njunction = -3.0\n",
        );
        let content = format!(
            "[lattice]\nn-phi = 3\nn-z = 1\n\n[energy]\ncoefficients-path = \"{}\"\n",
            coefficients_path.to_str().unwrap().replace('\\', "\\\\")
        );
        let path = write_config_file(&dir, "with_path.toml", &content);
        let config = build_config(&config_args(Some(path.as_path()), &[])).unwrap();
        assert_eq!(config.energy.coefficients.as_array(), [0.5, -1.0, -2.0, -3.0]);
    }

    #[test]
    fn config_can_come_entirely_from_the_command_line() {
        let args = config_args(None, &["--n-phi", "2", "--n-z", "1", "--coefficients=0,0,-1,0"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.lattice, LatticeConfig { n_phi: 2, n_z: 1 });
    }

    #[test]
    fn missing_dimension_is_reported_by_key() {
        let args = config_args(None, &["--n-phi", "2", "--coefficients=0,0,-1,0"]);
        let Err(CliError::Config(msg)) = build_config(&args) else {
            panic!("Expected a configuration error");
        };
        assert!(msg.contains("lattice.n-z"));
    }

    #[test]
    fn missing_coefficients_are_an_error_but_not_for_lattice_only_use() {
        let args = config_args(None, &["--n-phi", "2", "--n-z", "1"]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
        let geometry = build_lattice(&args).unwrap();
        assert_eq!((geometry.n_phi(), geometry.n_z()), (2, 1));
    }

    #[test]
    fn wrong_number_of_coefficients_is_rejected() {
        let args = config_args(None, &["--n-phi", "2", "--n-z", "1", "--coefficients=0,-1,-2"]);
        let Err(CliError::Config(msg)) = build_config(&args) else {
            panic!("Expected a configuration error");
        };
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let args = config_args(None, &["--n-phi", "0", "--n-z", "1"]);
        let Err(CliError::Config(msg)) = build_lattice(&args) else {
            panic!("Expected a configuration error");
        };
        assert!(msg.contains("n_phi = 0"));
        let args = config_args(None, &["--n-phi", "3", "--n-z", "0", "--coefficients=0,-1,-2,-3"]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn both_coefficient_sources_in_the_file_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "both.toml",
            "[lattice]\nn-phi = 2\nn-z = 1\n[energy]\ncoefficients = [0.0, 0.0, 0.0, 0.0]\ncoefficients-path = \"c.toml\"\n",
        );
        assert!(matches!(
            build_config(&config_args(Some(path.as_path()), &[])),
            Err(CliError::Config(_))
        ));
    }
}
