// Score - TF-IDF cosine similarity between skill summaries, plus a
// fixed per-keyword bonus for the target stack. Deterministic for fixed
// input text and fixed vocabularies.

use crate::config::{STACK_KEYWORDS, STACK_KEYWORD_BONUS, STOP_WORDS};
use crate::skills::SkillMatcher;

/// Scores a resume against a job description.
///
/// Base score: cosine similarity of TF-IDF vectors built over the two
/// skill-summary strings. Bonus: [`STACK_KEYWORD_BONUS`] per distinct stack
/// keyword found in the raw resume text. The sum is capped at 1.0.
pub fn score_resume(resume_text: &str, job_description: &str, skills: &SkillMatcher) -> f64 {
	let resume_summary = skills.summary(resume_text);
	let job_summary = skills.summary(job_description);

	let base = summary_similarity(&resume_summary, &job_summary);
	let bonus = stack_bonus(resume_text);

	(base + bonus).min(1.0)
}

/// Cosine similarity of the TF-IDF vectors of two summary strings, in
/// [0.0, 1.0]. An all-zero vector (no usable tokens) yields 0.0.
fn summary_similarity(a: &str, b: &str) -> f64 {
	let (va, vb) = tfidf_pair(a, b);
	va.iter().zip(&vb).map(|(x, y)| x * y).sum()
}

/// Bonus for stack keywords literally present in the resume text.
/// Substring containment on the lower-cased text, so "git" also hits words
/// like "digital"; each distinct keyword counts once however often it
/// appears.
fn stack_bonus(resume_text: &str) -> f64 {
	let lower = resume_text.to_lowercase();
	let hits = STACK_KEYWORDS.iter().filter(|k| lower.contains(**k)).count();
	hits as f64 * STACK_KEYWORD_BONUS
}

/// Lower-cased alphanumeric tokens of length >= 2, stop-words removed.
fn tokenize(text: &str) -> Vec<String> {
	let lower = text.to_lowercase();
	lower
		.split(|c: char| !c.is_alphanumeric())
		.filter(|t| t.len() >= 2)
		.filter(|t| !STOP_WORDS.contains(t))
		.map(String::from)
		.collect()
}

/// Builds unit-length TF-IDF vectors over exactly the two documents.
/// tf is the raw term count; idf is the smoothed ln((1+n)/(1+df)) + 1 with
/// n = 2. Term order is the sorted joint vocabulary, so output is stable.
fn tfidf_pair(a: &str, b: &str) -> (Vec<f64>, Vec<f64>) {
	let docs = [tokenize(a), tokenize(b)];

	let mut terms: Vec<String> = docs.iter().flatten().cloned().collect();
	terms.sort_unstable();
	terms.dedup();

	let idf: Vec<f64> = terms
		.iter()
		.map(|term| {
			let df = docs.iter().filter(|doc| doc.contains(term)).count() as f64;
			((1.0 + docs.len() as f64) / (1.0 + df)).ln() + 1.0
		})
		.collect();

	let mut vectors = docs.iter().map(|doc| {
		let mut v: Vec<f64> = terms
			.iter()
			.zip(&idf)
			.map(|(term, idf)| {
				let tf = doc.iter().filter(|t| *t == term).count() as f64;
				tf * idf
			})
			.collect();
		normalize(&mut v);
		v
	});

	let va = vectors.next().unwrap_or_default();
	let vb = vectors.next().unwrap_or_default();
	(va, vb)
}

/// Scales a vector to unit length; an all-zero vector is left untouched.
fn normalize(v: &mut [f64]) {
	let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
	if norm > 0.0 {
		for x in v.iter_mut() {
			*x /= norm;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn matcher() -> SkillMatcher {
		SkillMatcher::new()
	}

	#[test]
	fn identical_summaries_have_base_similarity_one() {
		let s = summary_similarity("React.js Node.js MongoDB", "React.js Node.js MongoDB");
		assert!((s - 1.0).abs() < 1e-9, "got {s}");
	}

	#[test]
	fn disjoint_summaries_have_base_similarity_zero() {
		let s = summary_similarity("Python Hadoop Spark", "React.js MongoDB Bootstrap");
		assert_eq!(s, 0.0);
	}

	#[test]
	fn empty_resume_summary_scores_zero_base() {
		let s = summary_similarity(" ", "React.js MongoDB");
		assert_eq!(s, 0.0);
	}

	#[test]
	fn stop_words_and_short_tokens_are_dropped() {
		assert_eq!(tokenize("the python and git"), vec!["python", "git"]);
		assert_eq!(tokenize("R a I"), Vec::<String>::new());
	}

	#[test]
	fn score_is_clamped_to_one() {
		// A resume that mirrors the whole stack: cosine near 1.0 plus
		// 17 * 0.05 of bonus must still cap at exactly 1.0.
		let resume = "html5 css3 javascript react.js node.js express.js mongodb \
		              mysql git mern mvc restful cloudinary mapbox multer bootstrap ejs";
		let score = score_resume(resume, resume, &matcher());
		assert_eq!(score, 1.0);
	}

	#[test]
	fn score_never_leaves_unit_interval() {
		let matcher = matcher();
		for resume in ["", " ", "plain prose, no technology at all", "git", "Python R SQL"] {
			let score = score_resume(resume, "React.js and Git", &matcher);
			assert!((0.0..=1.0).contains(&score), "{resume:?} -> {score}");
		}
	}

	#[test]
	fn bonus_counts_distinct_keywords_once() {
		assert_eq!(stack_bonus("git git git"), STACK_KEYWORD_BONUS);
		assert_eq!(stack_bonus("git and mongodb"), 2.0 * STACK_KEYWORD_BONUS);
		assert_eq!(stack_bonus("nothing here"), 0.0);
	}

	#[test]
	fn bonus_is_monotone_in_distinct_keywords() {
		let mut previous = -1.0;
		let mut text = String::new();
		for keyword in STACK_KEYWORDS {
			text.push_str(keyword);
			text.push(' ');
			let bonus = stack_bonus(&text);
			assert!(bonus >= previous);
			previous = bonus;
		}
		assert_eq!(previous, STACK_KEYWORDS.len() as f64 * STACK_KEYWORD_BONUS);
	}

	#[test]
	fn bonus_matches_substrings_case_insensitively() {
		assert_eq!(stack_bonus("Digital MERN shop"), 2.0 * STACK_KEYWORD_BONUS); // "git" + "mern"
	}
}
