pub mod features;
pub mod init_config;
pub mod score;

use std::path::Path;

use anyhow::{bail, Result};

/// Error if `path` exists and overwriting was not requested, or is a directory.
pub fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.is_dir() {
        bail!("Path exists but is a directory: {}", path.display());
    }
    if path.exists() && !force {
        bail!("File already exists (use --force to overwrite): {}", path.display());
    }
    Ok(())
}
