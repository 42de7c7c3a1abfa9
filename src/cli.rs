use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DEFAULT_MIN_SCORE;

fn parse_score(s: &str) -> Result<f64, String> {
	let val: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !(0.0..=1.0).contains(&val) {
		Err(format!("score must be between 0.0 and 1.0, got {}", val))
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "shortlist",
	version,
	about = "Resume screening and ranking against a job description",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {screen}  {screen_args}       {screen_desc}
  {bin} {screen}  {screen_job_args}   {screen_job_desc}
  {bin} {inspect} {inspect_args}        {inspect_desc}
  {bin} {help}    {help_args}              {help_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "shortlist".bright_blue(),
		screen = "screen".yellow(),
		screen_args = "-d ./resumes/",
		screen_desc = "Rank resumes against the built-in posting".dimmed(),
		screen_job_args = "-j job.txt -s 0.6",
		screen_job_desc = "Custom posting, stricter threshold".dimmed(),
		inspect = "inspect".yellow(),
		inspect_args = "resume.pdf",
		inspect_desc = "Show extracted details and skills".dimmed(),
		help = "help".yellow(),
		help_args = "screen",
		help_desc = "Show help for screen".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Screen a directory of resume PDFs and print the ranked shortlist
	Screen {
		/// Directory holding the resume PDFs (non-recursive)
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,

		/// Read the job description from a text file instead of the
		/// built-in posting
		#[arg(short = 'j', long = "job", value_name = "FILE")]
		job_file: Option<PathBuf>,

		/// Company name shown in the report
		#[arg(long = "company")]
		company: Option<String>,

		/// Minimum match score for the shortlist (0.0-1.0)
		#[arg(short = 's', long = "min-score", default_value_t = DEFAULT_MIN_SCORE, value_parser = parse_score)]
		min_score: f64,
	},

	/// Extract text, contact details and skills from a single PDF
	Inspect {
		/// Resume PDF to inspect
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn score_parser_enforces_unit_interval() {
		assert_eq!(parse_score("0.5"), Ok(0.5));
		assert_eq!(parse_score("0"), Ok(0.0));
		assert_eq!(parse_score("1"), Ok(1.0));
		assert!(parse_score("1.5").is_err());
		assert!(parse_score("-0.1").is_err());
		assert!(parse_score("abc").is_err());
	}
}
