use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    targets::build_app,
};

#[derive(Args)]
pub struct TargetsCommand {
    /// Directory to search for additional targets (repeatable)
    #[arg(long = "target-path", value_name = "DIR")]
    pub target_paths: Vec<PathBuf>,
}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        let app = build_app(&self.target_paths).unwrap_or_exit();
        ops::targets(&app).render(&mut TerminalOutput::new());
        Ok(())
    }
}
