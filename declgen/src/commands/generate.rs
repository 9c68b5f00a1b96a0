use std::path::PathBuf;

use clap::Args;
use declgen_schema::SchemaFile;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
    targets::{DEFAULT_TARGET, build_app},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the JSON schema
    pub schema: PathBuf,

    /// Target to generate
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Output directory
    #[arg(short, long, default_value = "build")]
    pub output: PathBuf,

    /// Directory to search for additional targets (repeatable)
    #[arg(long = "target-path", value_name = "DIR")]
    pub target_paths: Vec<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = SchemaFile::open(&self.schema).unwrap_or_exit();
        let app = build_app(&self.target_paths).unwrap_or_exit();
        let generation = app.generate(file.schema(), &self.target).unwrap_or_exit();

        let report = ops::generate(
            generation,
            GenerateOptions {
                target: &self.target,
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
