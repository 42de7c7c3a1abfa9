//! Core domain types
//!
//! - `ResumeDetails`: contact fields pulled from a resume, sentinel-filled
//! - `MatchResult`: one scored resume, produced once and never mutated
//! - `Job`: the posting resumes are screened against

use std::path::PathBuf;

use crate::config::{DEFAULT_COMPANY, DEFAULT_JOB_DESCRIPTION, NOT_FOUND, UNKNOWN_NAME};

/// Contact details extracted from a resume.
///
/// Fields are best-effort: each falls back to its sentinel when no pattern
/// matched. Callers must treat the values as advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDetails {
	pub name: String,
	pub email: String,
	pub phone: String,
}

impl Default for ResumeDetails {
	fn default() -> Self {
		Self {
			name: UNKNOWN_NAME.to_string(),
			email: NOT_FOUND.to_string(),
			phone: NOT_FOUND.to_string(),
		}
	}
}

/// A screened resume with its relevance score.
#[derive(Debug, Clone)]
pub struct MatchResult {
	pub source: PathBuf,
	pub details: ResumeDetails,
	/// Always in [0.0, 1.0]; the scorer clamps before constructing this.
	pub score: f64,
}

impl MatchResult {
	pub fn new(source: PathBuf, details: ResumeDetails, score: f64) -> Self {
		Self { source, details, score }
	}

	/// Score as a percentage, rounded to two decimals for display.
	/// Sorting and filtering use the unrounded `score` field.
	pub fn score_percent(&self) -> f64 {
		(self.score * 100.0 * 100.0).round() / 100.0
	}
}

/// The job posting resumes are screened against.
#[derive(Debug, Clone)]
pub struct Job {
	pub company: String,
	pub description: String,
}

impl Default for Job {
	fn default() -> Self {
		Self {
			company: DEFAULT_COMPANY.to_string(),
			description: DEFAULT_JOB_DESCRIPTION.to_string(),
		}
	}
}
