use crate::graph::{Cost, Edge, Graph, VertexId, Weight};

// sorts last, so edges touching a missing vertex are never picked
pub const INVALID_EDGE_COST: Cost = Cost::MAX;

/// `w_e + w_u + w_v`, or `None` when either endpoint is not a vertex.
pub fn effective_cost(graph: &Graph, u: VertexId, v: VertexId, weight: Weight) -> Option<Cost> {
	let w_u = graph.node_weight(u)?;
	let w_v = graph.node_weight(v)?;
	Some(Cost::from(weight) + Cost::from(w_u) + Cost::from(w_v))
}

impl Graph {
	/// Returns how many edges had an endpoint outside the graph.
	pub fn augment_costs(&mut self) -> usize {
		let mut invalid = 0;
		for i in 0..self.edges.len() {
			let Edge { u, v, weight, .. } = self.edges[i];
			let cost = match effective_cost(self, u, v, weight) {
				Some(cost) => cost,
				None => {
					debug!("edge {} ({}, {}) has an endpoint outside 0..{}", i, u, v, self.num_vertices());
					invalid += 1;
					INVALID_EDGE_COST
				}
			};
			self.edges[i].effective_cost = cost;
		}
		self.costs_ready = true;
		invalid
	}

	pub fn costs_ready(&self) -> bool {
		self.costs_ready
	}

	/// Ties keep input order.
	pub fn edges_by_cost(&self) -> Vec<Edge> {
		let mut sorted = self.edges.clone();
		sorted.sort_by_key(|e| e.effective_cost);
		sorted
	}
}
