extern crate clap;
extern crate extended_mst;
extern crate simplelog;

use clap::Parser;
use simplelog::{CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, WriteLogger};
use std::fs::File;
use std::io::{self, Write};
use std::process;

use extended_mst::{AppError, Config};

fn init_logging(config: &Config) -> Result<(), AppError> {
	let log_config = ConfigBuilder::new()
		.set_time_level(LevelFilter::Off)
		.build();

	// stdout carries the report, so logs only go to stderr and the optional file
	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
		WriteLogger::new(config.log_level(), log_config.clone(), io::stderr()),
	];
	if let Some(path) = &config.log_file {
		let file = File::create(path)
			.map_err(|e| AppError::Logging(format!("{}: {}", path.display(), e)))?;
		loggers.push(WriteLogger::new(LevelFilter::Debug, log_config, file));
	}
	CombinedLogger::init(loggers).map_err(|e| AppError::Logging(e.to_string()))
}

fn run(config: &Config) -> Result<(), AppError> {
	let mut graph = extended_mst::read_graph(&config.input)?;
	let outcome = extended_mst::find_extended_mst(&mut graph)?;

	let stdout = io::stdout();
	let mut out = stdout.lock();
	extended_mst::write_report(&mut out, &outcome, config.format)?;
	out.flush()?;
	Ok(())
}

fn main() {
	let config = Config::parse();

	// a disconnected graph is still a completed run and exits 0
	if let Err(e) = init_logging(&config).and_then(|_| run(&config)) {
		eprintln!("ERROR: {}", e);
		process::exit(e.exit_code());
	}
}
