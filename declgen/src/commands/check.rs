use std::path::PathBuf;

use clap::Args;
use declgen_schema::SchemaFile;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the JSON schema
    pub schema: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = SchemaFile::open(&self.schema).unwrap_or_exit();
        ops::check(&file).render(&mut TerminalOutput::new());
        Ok(())
    }
}
