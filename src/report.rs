// Report - Fixed-width console table for the shortlist

use crate::config::{EMAIL_WIDTH, MOBILE_WIDTH, NAME_WIDTH, SCORE_WIDTH};
use crate::types::{Job, MatchResult};

pub const NO_CANDIDATES_MESSAGE: &str = "No candidates matched the job criteria.";

const COLUMN_WIDTHS: [usize; 4] = [EMAIL_WIDTH, MOBILE_WIDTH, NAME_WIDTH, SCORE_WIDTH];

/// Renders the full report: job description, company, then either the
/// candidate table or the no-candidates message. Plain text, no colors, so
/// the output can be piped or diffed.
pub fn render_report(job: &Job, shortlist: &[MatchResult]) -> String {
	let mut out = String::new();

	out.push_str("Job Description:\n");
	out.push_str(&job.description);
	if !job.description.ends_with('\n') {
		out.push('\n');
	}
	out.push('\n');
	out.push_str(&format!("Company: {}\n", job.company));
	out.push_str("Matched Candidates:\n");

	if shortlist.is_empty() {
		out.push_str(NO_CANDIDATES_MESSAGE);
		out.push('\n');
		return out;
	}

	let border = border_line();
	out.push_str(&border);
	out.push_str(&row(["Email ID", "Mobile No", "Name", "Match Score (%)"]));
	out.push_str(&border);

	for candidate in shortlist {
		let score = format!("{:.2}", candidate.score_percent());
		out.push_str(&row([
			&candidate.details.email,
			&candidate.details.phone,
			&candidate.details.name,
			&score,
		]));
	}

	out.push_str(&border);
	out
}

fn border_line() -> String {
	let mut line = String::from("+");
	for width in COLUMN_WIDTHS {
		line.push_str(&"-".repeat(width + 2));
		line.push('+');
	}
	line.push('\n');
	line
}

fn row(cells: [&str; 4]) -> String {
	let mut line = String::from("|");
	for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
		line.push(' ');
		line.push_str(&fit(cell, width));
		line.push_str(" |");
	}
	line.push('\n');
	line
}

/// Truncates to `width` characters or right-pads with spaces.
fn fit(text: &str, width: usize) -> String {
	let mut fitted: String = text.chars().take(width).collect();
	let used = fitted.chars().count();
	for _ in used..width {
		fitted.push(' ');
	}
	fitted
}
