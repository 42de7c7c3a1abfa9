// Logger - Colored console output with timestamps

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use colored::*;

static VERBOSE: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy)]
pub enum Level {
	Info,
	Success,
	Warning,
	Error,
	Debug,
}

pub fn set_verbose(enabled: bool) {
	VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Prints a timestamped, colored log message to stdout.
/// Debug messages are suppressed unless verbose mode is on.
pub fn log(level: Level, message: &str) {
	if matches!(level, Level::Debug) && !VERBOSE.load(Ordering::Relaxed) {
		return;
	}

	let time = Local::now().format("%H:%M:%S").to_string().dimmed();
	let icon = match level {
		Level::Info =>    "ℹ".blue().bold(),
		Level::Success => "✔".bright_green().bold(),
		Level::Warning => "⚠".yellow().bold(),
		Level::Error =>   "✘".red().bold(),
		Level::Debug =>   "⚙".bright_blue().bold(),
	};
	println!("[{}] {} {}", time, icon, message);
}

/// Prints a section header with visual separation.
pub fn header(title: &str) {
	println!();
	println!("{}", format!("─── {} ───", title).bright_blue().bold());
}

/// Prints a screening summary with statistics.
pub fn summary(screened: usize, shortlisted: usize, skipped: usize, duration_secs: f32) {
	println!();
	header("Summary");

	println!("  {} {}", "Screened:".bright_blue(), screened);
	println!("  {} {}", "Shortlisted:".bright_blue(), shortlisted);
	if skipped > 0 {
		println!("  {} {}", "Skipped:".yellow(), skipped);
	}

	println!("  {} {:.2}s", "Duration:".bright_blue(), duration_secs);
	println!();
}
