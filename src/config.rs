use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

use crate::report::ReportFormat;

#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(name = "extended_mst", version, about, long_about = None)]
pub struct Config {
	/// the input graph's filename
	#[clap(value_parser, required = true)]
	pub input: PathBuf,

	/// how the spanning tree is printed
	#[clap(long, value_enum, default_value_t = ReportFormat::Text)]
	pub format: ReportFormat,

	/// also write debug logs to this file
	#[clap(long, value_parser)]
	pub log_file: Option<PathBuf>,

	/// log debug details to stderr
	#[clap(short, long, conflicts_with = "quiet")]
	pub verbose: bool,

	/// only log errors to stderr
	#[clap(short, long)]
	pub quiet: bool,
}

impl Config {
	pub fn log_level(&self) -> LevelFilter {
		if self.verbose {
			LevelFilter::Debug
		} else if self.quiet {
			LevelFilter::Error
		} else {
			LevelFilter::Info
		}
	}
}
