// Details - Contact field extraction from cleaned resume text

use regex::Regex;

use crate::types::ResumeDetails;

/// Strategy seam for contact extraction.
///
/// The default is single-pass regex heuristics; a layout-aware or
/// model-based extractor can replace it without touching the scoring
/// pipeline. Results are advisory, never validated.
pub trait DetailExtractor {
	fn extract(&self, text: &str) -> ResumeDetails;
}

/// Regex heuristics matching the common case: a name near the top, the
/// first email-shaped and phone-shaped substrings anywhere in the text.
pub struct RegexDetailExtractor {
	name: Regex,
	email: Regex,
	phone: Regex,
}

impl RegexDetailExtractor {
	pub fn new() -> Self {
		Self {
			// Two to four alphabetic tokens separated by space or hyphen,
			// e.g. "John Doe", "Maria de la Cruz", "Mary-Jane Smith".
			name: Regex::new(r"\b([A-Za-z]+(?:[ -][A-Za-z]+){1,3})\b").unwrap(),
			email: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap(),
			phone: Regex::new(r"(\+?\d{1,2}\s?)?(\(?\d{3}\)?[\s.-]?)?\d{3}[\s.-]?\d{4}").unwrap(),
		}
	}
}

impl Default for RegexDetailExtractor {
	fn default() -> Self {
		Self::new()
	}
}

impl DetailExtractor for RegexDetailExtractor {
	fn extract(&self, text: &str) -> ResumeDetails {
		let mut details = ResumeDetails::default();

		// First matching line wins. This mis-fires on headers sometimes;
		// the pipeline rejects the known "Skills" false positive downstream.
		for line in text.lines() {
			if let Some(caps) = self.name.captures(line.trim()) {
				details.name = caps[1].trim().to_string();
				break;
			}
		}

		if let Some(m) = self.email.find(text) {
			details.email = m.as_str().to_string();
		}

		if let Some(m) = self.phone.find(text) {
			details.phone = m.as_str().replace([' ', '-', '.'], "");
		}

		details
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{NOT_FOUND, UNKNOWN_NAME};

	fn extract(text: &str) -> ResumeDetails {
		RegexDetailExtractor::new().extract(text)
	}

	#[test]
	fn first_matching_line_supplies_the_name() {
		let details = extract("Jane Doe\nFull Stack Developer\njane@x.com");
		assert_eq!(details.name, "Jane Doe");
	}

	#[test]
	fn hyphenated_and_multi_part_names_match() {
		assert_eq!(extract("Mary-Jane Smith").name, "Mary-Jane Smith");
		assert_eq!(extract("Maria de la Cruz").name, "Maria de la Cruz");
	}

	#[test]
	fn single_word_lines_do_not_match_as_names() {
		let details = extract("Skills\n12345\nJohn Doe");
		assert_eq!(details.name, "John Doe");
	}

	#[test]
	fn sentinels_apply_when_nothing_matches() {
		let details = extract("12345 67890");
		assert_eq!(details.name, UNKNOWN_NAME);
		assert_eq!(details.email, NOT_FOUND);
		// The digit runs above do form a loose phone match, so use a
		// genuinely digit-free text for the phone sentinel.
		assert_eq!(extract("no digits here").phone, NOT_FOUND);
	}

	#[test]
	fn first_email_wins() {
		let details = extract("a@b.com later c@d.org");
		assert_eq!(details.email, "a@b.com");
	}

	#[test]
	fn phone_separators_are_stripped() {
		assert_eq!(extract("call 555-123-4567 now").phone, "5551234567");
		assert_eq!(extract("call 555.123.4567 now").phone, "5551234567");
		assert_eq!(extract("call +1 555 123 4567 now").phone, "+15551234567");
	}
}
