// Pipeline - Batch screening driver
//
// Strictly sequential: each resume is extracted, scored and filtered before
// the next one is touched. Per-file failures are logged and skipped; only
// directory-level problems (handled by the scanner) abort a run.

use std::cmp::Ordering;
use std::path::PathBuf;

use crate::details::DetailExtractor;
use crate::extract::extract_text;
use crate::logger::{log, Level};
use crate::score::score_resume;
use crate::skills::SkillMatcher;
use crate::types::{Job, MatchResult, ResumeDetails};

/// Per-run counters for the summary block.
#[derive(Debug, Default)]
pub struct ScreenStats {
	pub screened: usize,
	pub skipped: usize,
}

/// Screens every resume and returns the shortlist, ranked by descending
/// score. Sorting is stable, so equal scores keep encounter order and a
/// fixed input set always produces the same ordering.
pub fn screen_resumes(
	resumes: &[PathBuf],
	job: &Job,
	min_score: f64,
	extractor: &dyn DetailExtractor,
	skills: &SkillMatcher,
) -> (Vec<MatchResult>, ScreenStats) {
	let total = resumes.len();
	let mut shortlist = Vec::new();
	let mut stats = ScreenStats::default();

	for (index, path) in resumes.iter().enumerate() {
		let queue = format!("[{}/{}]", index + 1, total);
		let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown");

		let text = match extract_text(path) {
			Ok(text) => text,
			Err(e) => {
				log(Level::Warning, &format!("{} {}: {}", queue, filename, e));
				stats.skipped += 1;
				continue;
			}
		};

		if text.is_empty() {
			log(Level::Warning, &format!("{} {}: no text extracted", queue, filename));
			stats.skipped += 1;
			continue;
		}

		let score = score_resume(&text, &job.description, skills);
		let details = extractor.extract(&text);
		stats.screened += 1;

		log(Level::Debug, &format!("{} {} scored {:.4}", queue, filename, score));

		if qualifies(score, min_score, &details) {
			shortlist.push(MatchResult::new(path.clone(), details, score));
		}
	}

	rank(&mut shortlist);
	(shortlist, stats)
}

/// Inclusion rule: above threshold, and the extracted name is not the
/// literal word "skills" (the name heuristic's known false positive).
fn qualifies(score: f64, min_score: f64, details: &ResumeDetails) -> bool {
	score > min_score && !details.name.eq_ignore_ascii_case("skills")
}

/// Stable descending sort on the unrounded score. Rounding happens only at
/// render time, so display rounding can never invert ranks.
pub fn rank(shortlist: &mut [MatchResult]) {
	shortlist.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
	use super::*;

	fn details(name: &str) -> ResumeDetails {
		ResumeDetails {
			name: name.to_string(),
			..ResumeDetails::default()
		}
	}

	#[test]
	fn skills_named_candidates_are_always_excluded() {
		for name in ["skills", "Skills", "SKILLS", "sKiLLs"] {
			assert!(!qualifies(1.0, 0.5, &details(name)));
		}
		assert!(qualifies(1.0, 0.5, &details("Skills Summary")));
	}

	#[test]
	fn threshold_is_strictly_greater_than() {
		let d = details("Jane Doe");
		assert!(!qualifies(0.5, 0.5, &d));
		assert!(qualifies(0.51, 0.5, &d));
	}

	#[test]
	fn ranking_is_descending_and_stable() {
		let mut results: Vec<MatchResult> = [("a.pdf", 0.6), ("b.pdf", 0.9), ("c.pdf", 0.6), ("d.pdf", 0.8)]
			.into_iter()
			.map(|(f, s)| MatchResult::new(PathBuf::from(f), details("X Y"), s))
			.collect();

		rank(&mut results);

		let order: Vec<&str> = results
			.iter()
			.map(|r| r.source.to_str().unwrap())
			.collect();
		// b first, then d, then the two 0.6 entries in encounter order.
		assert_eq!(order, vec!["b.pdf", "d.pdf", "a.pdf", "c.pdf"]);
	}
}
