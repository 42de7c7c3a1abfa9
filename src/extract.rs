// Extract - PDF text extraction and normalization

use std::path::Path;

use anyhow::{Context, Result};
use lopdf::Document;

use crate::logger::{log, Level};

/// Extracts the text of a PDF and normalizes it with [`clean_text`].
///
/// Pages are extracted independently: a page that fails to decode is logged
/// and dropped without aborting the document. A document that fails to load
/// at all is an error; callers skip that file and continue the batch.
pub fn extract_text(path: &Path) -> Result<String> {
	let doc = Document::load(path)
		.with_context(|| format!("failed to load PDF {}", path.display()))?;

	let mut text = String::new();
	for (page_num, _page_id) in doc.get_pages() {
		match doc.extract_text(&[page_num]) {
			Ok(content) => {
				text.push_str(&content);
				text.push('\n');
			}
			Err(e) => {
				log(Level::Debug, &format!("{} page {}: {}", path.display(), page_num, e));
			}
		}
	}

	Ok(clean_text(&text))
}

/// Normalizes extracted text: characters outside the allow-list (ASCII
/// letters, digits, whitespace and `. , - @ |`) become spaces, runs of
/// blanks collapse to a single space, lines are trimmed and empty lines
/// dropped. Line breaks survive so the name heuristic can scan lines.
pub fn clean_text(raw: &str) -> String {
	let mut lines = Vec::new();

	for line in raw.lines() {
		let filtered: String = line
			.chars()
			.map(|c| if is_allowed(c) { c } else { ' ' })
			.collect();
		let collapsed = filtered.split_whitespace().collect::<Vec<_>>().join(" ");
		if !collapsed.is_empty() {
			lines.push(collapsed);
		}
	}

	lines.join("\n")
}

fn is_allowed(c: char) -> bool {
	c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '.' | ',' | '-' | '@' | '|')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_disallowed_characters() {
		assert_eq!(clean_text("John #Doe! (dev)"), "John Doe dev");
	}

	#[test]
	fn keeps_contact_punctuation() {
		assert_eq!(
			clean_text("jane.doe@x.com | 555-123-4567, NY"),
			"jane.doe@x.com | 555-123-4567, NY"
		);
	}

	#[test]
	fn collapses_whitespace_within_lines() {
		assert_eq!(clean_text("a\t\tb   c"), "a b c");
	}

	#[test]
	fn preserves_line_structure_and_drops_blank_lines() {
		assert_eq!(clean_text("Jane Doe\n\n  \nSkills: React\n"), "Jane Doe\nSkills React");
	}

	#[test]
	fn empty_input_stays_empty() {
		assert_eq!(clean_text(""), "");
		assert_eq!(clean_text("  \n\t\n"), "");
	}

	#[test]
	fn unreadable_file_is_an_error() {
		assert!(extract_text(Path::new("/nonexistent.pdf")).is_err());
	}
}
