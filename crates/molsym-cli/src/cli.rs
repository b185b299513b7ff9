use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const OPERATION_HELP: &str = "\
Operation syntax:
  E              identity
  i | i@x,y,z    inversion through the origin or through (x, y, z)
  Cn | Cn@x,y,z  proper rotation by 360°/n (axis defaults to the principal axis, then z)
  Sn | Sn@x,y,z  improper rotation by 360°/n followed by reflection
  sigma@x,y,z    reflection through the plane with normal (x, y, z)";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "MolSym CLI - Apply, validate and animate point-group symmetry operations on molecules.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S animation.fps=60
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in molecules.
    List,
    /// Show the atoms, bonds and declared symmetry elements of a molecule.
    Show(ShowArgs),
    /// Apply a symmetry operation and report where every atom goes.
    Apply(ApplyArgs),
    /// Check that every declared symmetry element maps the molecule onto itself.
    Validate(ValidateArgs),
    /// Render a forward / hold / reverse animation cycle to CSV.
    Animate(AnimateArgs),
}

/// Where a molecule comes from: the built-in library or a TOML file.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct MoleculeSource {
    /// Name or alias of a built-in molecule (e.g., 'water', 'nh3').
    #[arg(value_name = "MOLECULE")]
    pub molecule: Option<String>,

    /// Path to a molecule definition in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: MoleculeSource,
}

/// Arguments for the `apply` subcommand.
#[derive(Args, Debug)]
#[command(after_help = OPERATION_HELP)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub source: MoleculeSource,

    /// The operation to apply (see syntax below).
    #[arg(long, value_name = "OP", required_unless_present = "element", conflicts_with = "element")]
    pub op: Option<String>,

    /// Apply the operation generated by the declared element with this index.
    #[arg(short, long, value_name = "INDEX")]
    pub element: Option<usize>,

    /// Override the invariance tolerance in Angstroms.
    #[arg(short, long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Names or aliases of built-in molecules to validate.
    #[arg(value_name = "MOLECULE")]
    pub molecules: Vec<String>,

    /// Validate every built-in molecule.
    #[arg(short, long, conflicts_with = "molecules")]
    pub all: bool,

    /// Molecule definitions in TOML format to validate. Can be used multiple times.
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Override the invariance tolerance in Angstroms.
    #[arg(short, long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,
}

/// Arguments for the `animate` subcommand.
#[derive(Args, Debug)]
#[command(after_help = OPERATION_HELP)]
pub struct AnimateArgs {
    #[command(flatten)]
    pub source: MoleculeSource,

    /// The operation to animate (see syntax below).
    #[arg(long, value_name = "OP", required = true)]
    pub op: String,

    /// Path for the output CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override the frame rate in frames per second.
    #[arg(long, value_name = "FLOAT")]
    pub fps: Option<f64>,

    /// Override the forward (and reverse) duration in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Override the hold time in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub hold: Option<f64>,

    /// Override the easing curve (cubic-in-out, linear, quad-in-out, sine-in-out).
    #[arg(long, value_name = "NAME")]
    pub easing: Option<String>,
}
