use anyhow::{Context, Result, anyhow};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::exporter::ExportArtifact;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    // @reads: Whole file as UTF-8
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    // @writes: Export artifact under its suggested name
    // @returns: Path of the written file
    pub fn write_artifact<P: AsRef<Path>>(artifact: &ExportArtifact, output_dir: P, force_overwrite: bool) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        Self::ensure_dir(output_dir)?;

        let path = output_dir.join(&artifact.file_name);
        if path.exists() && !force_overwrite {
            return Err(anyhow!("Output file already exists: {}. Use -f to force overwrite.", path.display()));
        }

        fs::write(&path, &artifact.content)
            .with_context(|| format!("Failed to write export file: {}", path.display()))?;

        debug!("Wrote {} bytes ({}) to {}", artifact.content.len(), artifact.mime_type, path.display());
        Ok(path)
    }
}
