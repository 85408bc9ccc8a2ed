use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Fail if writing `output` would clobber the `input` CSV.
pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    let out_norm = resolve(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let in_norm = resolve(input)
        .with_context(|| format!("failed to resolve input path {}", input.display()))?;

    if out_norm == in_norm {
        bail!(
            "refusing to overwrite source file: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn resolve(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // A missing path can't be canonicalized; `..` segments stay unresolved.
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir().context("current_dir")?.join(path))
}
