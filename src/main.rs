//! Shortlist - resume screening CLI
//!
//! Screens a directory of PDF resumes against a job description and prints
//! a ranked candidate table with extracted contact details.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;

use shortlist::cli::{Cli, Command};
use shortlist::details::{DetailExtractor, RegexDetailExtractor};
use shortlist::extract::extract_text;
use shortlist::logger::{self, log, Level};
use shortlist::pipeline::screen_resumes;
use shortlist::report::render_report;
use shortlist::scanner::find_resumes;
use shortlist::skills::SkillMatcher;
use shortlist::types::Job;

fn main() -> Result<()> {
	let cli = Cli::parse();

	logger::set_verbose(cli.verbose);

	match cli.command {
		Command::Screen { directory, job_file, company, min_score } => {
			run_screen(&directory, job_file.as_deref(), company, min_score)
		}
		Command::Inspect { file } => run_inspect(&file),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help().unwrap();
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help().unwrap();
				}
			} else {
				cmd.print_help().unwrap();
			}
			Ok(())
		}
	}
}

fn run_screen(
	directory: &Path,
	job_file: Option<&Path>,
	company: Option<String>,
	min_score: f64,
) -> Result<()> {
	print_header();

	let mut job = Job::default();
	if let Some(path) = job_file {
		job.description = fs::read_to_string(path)
			.with_context(|| format!("failed to read job description {}", path.display()))?;
	}
	if let Some(company) = company {
		job.company = company;
	}

	log(Level::Info, "Scanning for resumes...");
	let resumes = find_resumes(directory)?;
	log(
		Level::Success,
		&format!("Found {} resumes in {}", resumes.len(), directory.display()),
	);

	let extractor = RegexDetailExtractor::new();
	let skills = SkillMatcher::new();

	let start = Instant::now();
	let (shortlist, stats) = screen_resumes(&resumes, &job, min_score, &extractor, &skills);

	if shortlist.is_empty() {
		log(Level::Warning, "No candidates above the threshold");
	} else {
		log(Level::Success, &format!("Shortlisted {} candidates", shortlist.len()));
	}

	println!();
	println!("{}", render_report(&job, &shortlist));

	logger::summary(stats.screened, shortlist.len(), stats.skipped, start.elapsed().as_secs_f32());

	Ok(())
}

fn run_inspect(file: &Path) -> Result<()> {
	print_header();

	let text = extract_text(file)?;
	if text.is_empty() {
		log(Level::Warning, &format!("No text extracted from {}", file.display()));
		return Ok(());
	}

	let details = RegexDetailExtractor::new().extract(&text);
	let skills = SkillMatcher::new().extract(&text);

	logger::header("Details");
	println!("  {} {}", "Name:".bright_blue(), details.name);
	println!("  {} {}", "Email:".bright_blue(), details.email);
	println!("  {} {}", "Phone:".bright_blue(), details.phone);
	println!("  {} {} chars extracted", "Text:".bright_blue(), text.len());
	if skills.is_empty() {
		println!("  {} none", "Skills:".bright_blue());
	} else {
		println!("  {} {}", "Skills:".bright_blue(), skills.join(", "));
	}
	println!();

	Ok(())
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── Shortlist v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
