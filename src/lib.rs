//! # Shortlist Library
//!
//! Screens PDF resumes against a job description and ranks candidates by
//! textual relevance: text extraction, contact-field extraction,
//! skill-keyword matching, TF-IDF cosine scoring and report rendering.

pub mod cli;
pub mod config;
pub mod details;
pub mod extract;
pub mod logger;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod score;
pub mod skills;
pub mod types;
