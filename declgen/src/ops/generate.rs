//! Generate operation - writing or previewing a target's artifacts.

use std::path::Path;

use declgen_codegen::Generation;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Target id the artifacts were generated for.
    pub target: &'a str,
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Writes every artifact under the output directory, or collects them for
/// preview when `dry_run` is set.
pub fn generate(generation: Generation, opts: GenerateOptions) -> Result<GenerateReport> {
    let result = if opts.dry_run {
        let files = generation
            .artifacts
            .iter()
            .map(|(path, content)| PreviewFile {
                path: path.to_string(),
                content: content.to_string(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = generation
            .artifacts
            .write_all(opts.output_dir)
            .wrap_err("Failed to write generated files")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: written,
            primary: opts.output_dir.join(&generation.primary),
        })
    };

    Ok(GenerateReport {
        target: opts.target.to_string(),
        result,
    })
}
