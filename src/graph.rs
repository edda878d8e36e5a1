use std::convert::TryFrom;

use crate::error::MstError;

/// Raw vertex and edge weights, as they appear in the input.
pub type Weight = i32;
/// Effective and total costs. Wide enough that `w_e + w_u + w_v` cannot overflow.
pub type Cost = i64;
/// Edge endpoints are kept exactly as read, so they may be out of range or negative.
pub type VertexId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
	/// Position in the input edge list.
	pub index: usize,
	pub u: VertexId,
	pub v: VertexId,
	pub weight: Weight,
	pub effective_cost: Cost,
}

#[derive(Debug, Clone)]
pub struct Graph {
	pub(crate) node_weights: Vec<Weight>,
	pub(crate) edges: Vec<Edge>,
	pub(crate) costs_ready: bool,
}

impl Graph {
	pub fn new(num_vertices: usize, num_edges: usize) -> Result<Graph, MstError> {
		let mut node_weights = Vec::new();
		node_weights.try_reserve_exact(num_vertices)
			.map_err(|source| MstError::Allocation { what: "vertex weights", source })?;
		node_weights.resize(num_vertices, 0);

		let mut edges = Vec::new();
		edges.try_reserve_exact(num_edges)
			.map_err(|source| MstError::Allocation { what: "edge list", source })?;

		Ok(Graph {
			node_weights,
			edges,
			costs_ready: false,
		})
	}

	pub fn from_parts(node_weights: &[Weight], edges: &[(VertexId, VertexId, Weight)]) -> Result<Graph, MstError> {
		let mut graph = Graph::new(node_weights.len(), edges.len())?;
		graph.node_weights.copy_from_slice(node_weights);
		for &(u, v, w) in edges {
			graph.add_edge(u, v, w);
		}
		Ok(graph)
	}

	pub fn num_vertices(&self) -> usize {
		self.node_weights.len()
	}

	pub fn num_edges(&self) -> usize {
		self.edges.len()
	}

	/// Returns false (and changes nothing) when `id` is not a vertex.
	pub fn set_node_weight(&mut self, id: usize, weight: Weight) -> bool {
		match self.node_weights.get_mut(id) {
			Some(w) => {
				*w = weight;
				self.costs_ready = false;
				true
			}
			None => false,
		}
	}

	pub fn node_weight(&self, id: VertexId) -> Option<Weight> {
		usize::try_from(id).ok().and_then(|i| self.node_weights.get(i).copied())
	}

	pub fn node_weights(&self) -> &[Weight] {
		&self.node_weights
	}

	/// Appends an edge and returns its index. Endpoints are not checked here.
	pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> usize {
		let index = self.edges.len();
		self.edges.push(Edge {
			index,
			u,
			v,
			weight,
			effective_cost: 0,
		});
		self.costs_ready = false;
		index
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn is_valid_vertex(&self, id: VertexId) -> bool {
		self.node_weight(id).is_some()
	}
}
