// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Two subcommands: `convert` and `inspect`.
// With no flags the tool runs the classic Iris conversion:
//   iris.data → xData_iris.txt + yData_iris.txt

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::convert_use_case::ConvertConfig;
use crate::data::loader::{DEFAULT_CAPACITY, DEFAULT_NUM_FEATURES};
use crate::infra::{array_format::DEFAULT_MAX_LINE_WIDTH, array_writer::WriteMode};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a labelled CSV file into a feature dump and a label dump
    Convert(ConvertArgs),

    /// Parse a labelled CSV file and report its shape and classes
    Inspect(InputArgs),
}

/// Where to read from and how each line is shaped.
/// Shared by both subcommands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Comma-separated input: f1,...,fN,label per line
    #[arg(long, default_value = "iris.data")]
    pub input: PathBuf,

    /// Number of numeric fields before the label
    #[arg(long, default_value_t = DEFAULT_NUM_FEATURES)]
    pub num_features: usize,

    /// Maximum number of records accepted
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Accept any number of records (ignores --capacity)
    #[arg(long)]
    pub unbounded: bool,
}

impl InputArgs {
    pub fn capacity_limit(&self) -> Option<usize> {
        if self.unbounded {
            None
        } else {
            Some(self.capacity)
        }
    }
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// File receiving the feature matrix dump
    #[arg(long, default_value = "xData_iris.txt")]
    pub features_out: PathBuf,

    /// File receiving the label vector dump
    #[arg(long, default_value = "yData_iris.txt")]
    pub labels_out: PathBuf,

    /// Also write a JSON summary with the id-ordered class names
    #[arg(long)]
    pub info_out: Option<PathBuf>,

    /// Append to the output files instead of overwriting them
    #[arg(long)]
    pub append: bool,

    /// Wrap printed arrays at this many columns
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_WIDTH)]
    pub max_line_width: usize,
}

/// The application layer never sees clap types
impl From<ConvertArgs> for ConvertConfig {
    fn from(a: ConvertArgs) -> Self {
        ConvertConfig {
            capacity:       a.input.capacity_limit(),
            input:          a.input.input,
            num_features:   a.input.num_features,
            features_out:   a.features_out,
            labels_out:     a.labels_out,
            info_out:       a.info_out,
            mode:           WriteMode::from_append_flag(a.append),
            max_line_width: a.max_line_width,
        }
    }
}
