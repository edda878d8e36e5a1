use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Hard failures of a single MST computation. A disconnected graph is not
/// one of these; see [`MstOutcome`](crate::MstOutcome).
#[derive(Error, Debug)]
pub enum MstError {
	#[error("could not allocate {what}: {source}")]
	Allocation {
		what: &'static str,
		#[source]
		source: TryReserveError,
	},
	#[error("disjoint set over {size} vertices failed to initialize")]
	SetupFailure { size: usize },
	#[error("total cost overflowed after {accepted} accepted edges")]
	CostOverflow { accepted: usize },
}

#[derive(Error, Debug)]
pub enum InputError {
	#[error("could not read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("input ended while reading {what}")]
	MissingToken { what: String },
	#[error("expected an integer for {what}, found {token:?}")]
	InvalidToken { what: String, token: String },
	#[error("{what} must not be negative (got {value})")]
	NegativeCount { what: &'static str, value: i64 },
	#[error(transparent)]
	Graph(#[from] MstError),
}

/// Everything the driver can fail with.
#[derive(Error, Debug)]
pub enum AppError {
	#[error(transparent)]
	Input(#[from] InputError),
	#[error(transparent)]
	Mst(#[from] MstError),
	#[error("could not write report: {0}")]
	Output(#[from] io::Error),
	#[error("could not set up logging: {0}")]
	Logging(String),
}

impl AppError {
	/// Every failure that stops a run before a report is printed exits with 1.
	pub fn exit_code(&self) -> i32 {
		match self {
			AppError::Input(_) | AppError::Mst(_) | AppError::Output(_) | AppError::Logging(_) => 1,
		}
	}
}
