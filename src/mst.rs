use crate::disjoint_set::DisjointSet;
use crate::error::MstError;
use crate::graph::{Cost, Edge, Graph, VertexId, Weight};

/// One accepted edge, with everything the report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
	pub u: VertexId,
	pub v: VertexId,
	pub weight: Weight,
	pub u_weight: Weight,
	pub v_weight: Weight,
	pub effective_cost: Cost,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
	pub total_cost: Cost,
	/// In acceptance order, i.e. ascending effective cost.
	pub edges: Vec<TreeEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MstOutcome {
	Spanning(SpanningTree),
	/// Fewer than `required` edges could be accepted.
	Disconnected { accepted: usize, required: usize },
}

impl MstOutcome {
	pub fn tree(&self) -> Option<&SpanningTree> {
		match self {
			MstOutcome::Spanning(tree) => Some(tree),
			MstOutcome::Disconnected { .. } => None,
		}
	}

	pub fn total_cost(&self) -> Option<Cost> {
		self.tree().map(|t| t.total_cost)
	}

	pub fn is_connected(&self) -> bool {
		self.tree().is_some()
	}
}

/// A fresh set must be usable before the scan starts; a torn-down or
/// half-built one is a setup failure, not a disconnected graph.
fn check_ready(ds: &mut DisjointSet, num_vertices: usize) -> Result<(), MstError> {
	if !ds.is_initialized() || ds.size() != num_vertices || ds.find(0).is_none() {
		return Err(MstError::SetupFailure { size: num_vertices });
	}
	Ok(())
}

fn tree_edge(graph: &Graph, edge: &Edge) -> Option<TreeEdge> {
	Some(TreeEdge {
		u: edge.u,
		v: edge.v,
		weight: edge.weight,
		u_weight: graph.node_weight(edge.u)?,
		v_weight: graph.node_weight(edge.v)?,
		effective_cost: edge.effective_cost,
	})
}

/// Kruskal over effective costs, with a disjoint set of its own. Graphs with
/// zero or one vertex get an empty tree of cost 0.
pub fn find_extended_mst(graph: &mut Graph) -> Result<MstOutcome, MstError> {
	let num_vertices = graph.num_vertices();
	if num_vertices <= 1 {
		info!("{} vertices, nothing to span", num_vertices);
		return Ok(MstOutcome::Spanning(SpanningTree::default()));
	}

	if !graph.costs_ready() {
		let invalid = graph.augment_costs();
		if invalid > 0 {
			warn!("{} of {} edges reference vertices outside 0..{} and will be skipped",
				invalid, graph.num_edges(), num_vertices);
		}
	}
	let sorted = graph.edges_by_cost();
	let required = num_vertices - 1;

	let mut ds = DisjointSet::make_singletons(num_vertices)?;
	check_ready(&mut ds, num_vertices)?;

	let mut edges = Vec::new();
	edges.try_reserve_exact(required)
		.map_err(|source| MstError::Allocation { what: "spanning tree edges", source })?;
	let mut total_cost: Cost = 0;
	let mut scanned = 0;

	for edge in &sorted {
		if edges.len() == required {
			break;
		}
		scanned += 1;
		if !ds.unite(edge.u, edge.v) {
			continue;
		}
		let accepted = tree_edge(graph, edge)
			.ok_or(MstError::SetupFailure { size: num_vertices })?;
		total_cost = total_cost.checked_add(accepted.effective_cost)
			.ok_or(MstError::CostOverflow { accepted: edges.len() })?;
		edges.push(accepted);
	}
	debug!("scanned {} of {} edges, {} sets left", scanned, sorted.len(), ds.num_sets());

	if edges.len() != required {
		info!("graph is disconnected: accepted {} of {} edges", edges.len(), required);
		return Ok(MstOutcome::Disconnected { accepted: edges.len(), required });
	}

	info!("spanning tree with {} edges, total cost {}", edges.len(), total_cost);
	Ok(MstOutcome::Spanning(SpanningTree { total_cost, edges }))
}
