// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and hands the work to
// Layer 2. This layer only routes and prints results.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConvertArgs, InputArgs};

#[derive(Parser, Debug)]
#[command(
    name = "iris-prep",
    version,
    about = "Convert a labelled CSV dataset into a feature-matrix dump and an integer label dump."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Convert(args) => run_convert(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    use crate::application::convert_use_case::ConvertUseCase;

    let dataset = ConvertUseCase::new(args.into()).execute()?;

    println!(
        "Converted {} records ({} features, {} classes).",
        dataset.num_samples(),
        dataset.features.num_features(),
        dataset.classes.len()
    );
    Ok(())
}

fn run_inspect(args: InputArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let info = InspectUseCase::new(args.input.clone(), args.num_features, args.capacity_limit())
        .execute()?;

    println!("samples:  {}", info.num_samples);
    println!("features: {}", info.num_features);
    println!("classes:  {}", info.num_classes);
    for (id, name) in info.classes.iter().enumerate() {
        println!("  {id}: {name}");
    }
    Ok(())
}
