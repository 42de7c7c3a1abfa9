// Skills - Fixed-vocabulary keyword matching

use regex::RegexSet;

use crate::config::SKILL_VOCABULARY;

/// Matches a closed vocabulary of technology terms against arbitrary text.
///
/// One `(?i)\b…\b` pattern per entry, compiled once into a `RegexSet`.
/// Entries are evaluated independently, so overlapping terms ("Java" and
/// "JavaScript") each match only on their own word boundaries.
pub struct SkillMatcher {
	set: RegexSet,
	vocabulary: &'static [&'static str],
}

impl SkillMatcher {
	pub fn new() -> Self {
		Self::with_vocabulary(SKILL_VOCABULARY)
	}

	pub fn with_vocabulary(vocabulary: &'static [&'static str]) -> Self {
		let patterns: Vec<String> = vocabulary
			.iter()
			.map(|entry| format!(r"(?i)\b{}\b", regex::escape(entry)))
			.collect();
		Self {
			set: RegexSet::new(&patterns).unwrap(),
			vocabulary,
		}
	}

	/// Returns the matched vocabulary entries, de-duplicated, with the
	/// vocabulary's casing and in vocabulary order (deterministic).
	pub fn extract(&self, text: &str) -> Vec<&'static str> {
		self.set
			.matches(text)
			.into_iter()
			.map(|i| self.vocabulary[i])
			.collect()
	}

	/// Joins the matched skills into a short summary string for the
	/// vectorizer. A single space stands in for "no skills" so the vector
	/// space never degenerates to an empty vocabulary.
	pub fn summary(&self, text: &str) -> String {
		let skills = self.extract(text);
		if skills.is_empty() {
			" ".to_string()
		} else {
			skills.join(" ")
		}
	}
}

impl Default for SkillMatcher {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matching_is_case_insensitive_and_reports_vocabulary_casing() {
		let matcher = SkillMatcher::new();
		assert_eq!(matcher.extract("proficient in PYTHON and docker"), vec!["Python", "Docker"]);
	}

	#[test]
	fn repeated_mentions_are_deduplicated() {
		let matcher = SkillMatcher::new();
		assert_eq!(matcher.extract("Git git GIT"), vec!["Git"]);
	}

	#[test]
	fn whole_word_boundaries_are_required() {
		let matcher = SkillMatcher::new();
		// "R" must not match inside "Rust", nor "Java" inside "JavaScript".
		assert_eq!(matcher.extract("Rust and JavaScript"), vec!["JavaScript"]);
		assert_eq!(matcher.extract("Python and R"), vec!["Python", "R"]);
	}

	#[test]
	fn multi_word_entries_match_as_phrases() {
		let matcher = SkillMatcher::new();
		assert_eq!(matcher.extract("background in machine learning"), vec!["Machine Learning"]);
	}

	#[test]
	fn dotted_entries_do_not_match_arbitrary_separators() {
		let matcher = SkillMatcher::new();
		assert_eq!(matcher.extract("React.js developer"), vec!["React.js"]);
		assert!(matcher.extract("Reactojs developer").is_empty());
	}

	#[test]
	fn summary_of_empty_set_is_a_single_space() {
		let matcher = SkillMatcher::new();
		assert_eq!(matcher.summary("nothing relevant"), " ");
		assert_eq!(matcher.summary("MongoDB and Express.js"), "MongoDB Express.js");
	}
}
