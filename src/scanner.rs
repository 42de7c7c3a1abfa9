// Scanner - Discovers resume PDFs in a single directory

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

use crate::config::RESUME_EXTENSION;

/// Lists all `.pdf` files (extension matched case-insensitively) directly
/// inside `directory`, sorted by filename so repeated runs rank identically.
///
/// Fails if the directory does not exist or holds no matching files; both
/// are fatal for a screening run.
pub fn find_resumes(directory: &Path) -> Result<Vec<PathBuf>> {
	if !directory.is_dir() {
		bail!("resume directory {} does not exist", directory.display());
	}

	let mut resumes: Vec<PathBuf> = WalkDir::new(directory)
		.max_depth(1)
		.into_iter()
		.filter_map(|e| e.ok())
		.filter(|e| e.path().is_file() && is_resume(e.path()))
		.map(|e| e.path().to_path_buf())
		.collect();

	if resumes.is_empty() {
		bail!("no PDF files found in {}", directory.display());
	}

	resumes.sort();
	Ok(resumes)
}

fn is_resume(path: &Path) -> bool {
	path.extension()
		.and_then(|e| e.to_str())
		.map(|ext| ext.eq_ignore_ascii_case(RESUME_EXTENSION))
		.unwrap_or(false)
}
