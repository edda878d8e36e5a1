use std::convert::TryFrom;
use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::error::InputError;
use crate::graph::{Graph, VertexId, Weight};

struct Tokens<'a> {
	inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
	fn next<T: FromStr, F: Fn() -> String>(&mut self, what: F) -> Result<T, InputError> {
		let token = self.inner.next()
			.ok_or_else(|| InputError::MissingToken { what: what() })?;
		token.parse::<T>()
			.map_err(|_| InputError::InvalidToken { what: what(), token: token.to_string() })
	}

	fn count(&mut self, what: &'static str) -> Result<usize, InputError> {
		let value: i64 = self.next(|| what.to_string())?;
		usize::try_from(value).map_err(|_| InputError::NegativeCount { what, value })
	}
}

/// `V E`, then `V` vertex weights, then `E` triples `u v w`, all
/// whitespace-separated.
pub fn parse_graph(text: &str) -> Result<Graph, InputError> {
	let mut tokens = Tokens { inner: text.split_whitespace() };

	let num_vertices = tokens.count("vertex count")?;
	let num_edges = tokens.count("edge count")?;
	info!("reading {} vertices and {} edges", num_vertices, num_edges);

	// the header alone never decides how much gets allocated
	let available = tokens.inner.clone().count();
	let mut weights: Vec<Weight> = Vec::with_capacity(num_vertices.min(available));
	for i in 0..num_vertices {
		weights.push(tokens.next(|| format!("weight of vertex {}", i))?);
	}

	let mut edges: Vec<(VertexId, VertexId, Weight)> =
		Vec::with_capacity(num_edges.min((available - weights.len()) / 3));
	for i in 0..num_edges {
		let u: VertexId = tokens.next(|| format!("first endpoint of edge {}", i))?;
		let v: VertexId = tokens.next(|| format!("second endpoint of edge {}", i))?;
		let w: Weight = tokens.next(|| format!("weight of edge {}", i))?;
		edges.push((u, v, w));
	}

	let leftover = tokens.inner.count();
	if leftover > 0 {
		warn!("ignoring {} tokens after the last edge", leftover);
	}
	Graph::from_parts(&weights, &edges).map_err(InputError::from)
}

pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph, InputError> {
	let path = path.as_ref();
	let text = fs::read_to_string(path)
		.map_err(|source| InputError::Io { path: path.to_path_buf(), source })?;
	debug!("read {} bytes from {}", text.len(), path.display());
	parse_graph(&text)
}
