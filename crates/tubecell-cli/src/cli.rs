use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tubecell::core::lattice::direction::Direction;
use tubecell::engine::config::BoundaryPolicy;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The tubecell developers",
    version,
    about = "tubecell CLI - Score and validate carbon-nanotube unit cells on a cylindrical honeycomb lattice.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a file of genomes and write a per-genome report.
    Evaluate(EvaluateArgs),
    /// Show the moves and bonds of one lattice site.
    Neighbors(NeighborsArgs),
}

/// Lattice, energy and validation settings shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of circumferential repeats of the unit cell.
    #[arg(long, value_name = "INT")]
    pub n_phi: Option<usize>,

    /// Override the number of axial repeats of the unit cell.
    #[arg(long, value_name = "INT")]
    pub n_z: Option<usize>,

    /// Override the energy coefficients, ordered by neighbor count (isolated, terminal,
    /// chain, junction). Example: --coefficients=0,-1.5,-3.2,-4.8
    #[arg(
        long,
        value_name = "F0,F1,F2,F3",
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with = "coefficients_path"
    )]
    pub coefficients: Option<Vec<f64>>,

    /// Override the energy coefficients with a TOML file holding a [coefficients] table.
    #[arg(long, value_name = "PATH")]
    pub coefficients_path: Option<PathBuf>,

    /// Override the boundary policy ('every-atom' or 'any-bond').
    #[arg(long, value_name = "POLICY")]
    pub boundary_policy: Option<BoundaryPolicy>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S lattice.n-phi=6
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Path to the genome file: one genome of 0/1 symbols per line, '#' starts a comment line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the CSV report. Written to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `neighbors` subcommand.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Lattice index of the site to inspect.
    #[arg(long, required = true, value_name = "INDEX")]
    pub site: usize,

    /// Show only this move (e.g. 'up-right', 'ul').
    #[arg(long, value_name = "NAME")]
    pub direction: Option<Direction>,
}
