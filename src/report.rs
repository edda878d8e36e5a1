use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use serde_json::{json, Value};

use crate::graph::Cost;
use crate::mst::{MstOutcome, TreeEdge};

/// Printed as the total cost when the graph cannot be spanned.
pub const DISCONNECTED_COST: Cost = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
	Text,
	Json,
}

impl Default for ReportFormat {
	fn default() -> Self {
		ReportFormat::Text
	}
}

impl fmt::Display for ReportFormat {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			ReportFormat::Text => write!(f, "text"),
			ReportFormat::Json => write!(f, "json"),
		}
	}
}

/// ```text
/// TOTAL_COST:6
/// MST_EDGES_START
/// 0,1,1,0,0,1
/// MST_EDGES_END
/// ```
///
/// or just `TOTAL_COST:-1` for a disconnected graph.
pub fn write_text<W: Write>(out: &mut W, outcome: &MstOutcome) -> io::Result<()> {
	let tree = match outcome.tree() {
		Some(tree) => tree,
		None => return writeln!(out, "TOTAL_COST:{}", DISCONNECTED_COST),
	};
	writeln!(out, "TOTAL_COST:{}", tree.total_cost)?;
	writeln!(out, "MST_EDGES_START")?;
	for e in &tree.edges {
		writeln!(out, "{},{},{},{},{},{}", e.u, e.v, e.weight, e.u_weight, e.v_weight, e.effective_cost)?;
	}
	writeln!(out, "MST_EDGES_END")
}

fn edge_json(e: &TreeEdge) -> Value {
	json!({
		"u": e.u,
		"v": e.v,
		"w_e": e.weight,
		"w_u": e.u_weight,
		"w_v": e.v_weight,
		"c_e": e.effective_cost,
	})
}

pub fn to_json(outcome: &MstOutcome) -> Value {
	match outcome {
		MstOutcome::Spanning(tree) => json!({
			"total_cost": tree.total_cost,
			"edges": tree.edges.iter().map(edge_json).collect::<Vec<_>>(),
		}),
		MstOutcome::Disconnected { accepted, required } => json!({
			"total_cost": DISCONNECTED_COST,
			"disconnected": true,
			"accepted": accepted,
			"required": required,
		}),
	}
}

pub fn write_report<W: Write>(out: &mut W, outcome: &MstOutcome, format: ReportFormat) -> io::Result<()> {
	match format {
		ReportFormat::Text => write_text(out, outcome),
		ReportFormat::Json => {
			serde_json::to_writer_pretty(&mut *out, &to_json(outcome))?;
			writeln!(out)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mst::SpanningTree;

	fn sample() -> MstOutcome {
		MstOutcome::Spanning(SpanningTree {
			total_cost: -12,
			edges: vec![
				TreeEdge { u: 2, v: 0, weight: 3, u_weight: -10, v_weight: 1, effective_cost: -6 },
				TreeEdge { u: 1, v: 2, weight: 4, u_weight: 0, v_weight: -10, effective_cost: -6 },
			],
		})
	}

	fn text(outcome: &MstOutcome) -> String {
		let mut buf = Vec::new();
		write_report(&mut buf, outcome, ReportFormat::Text).unwrap();
		String::from_utf8(buf).unwrap()
	}

	#[test]
	fn text_report_lists_edges_verbatim() {
		assert_eq!(
			text(&sample()),
			"TOTAL_COST:-12\nMST_EDGES_START\n2,0,3,-10,1,-6\n1,2,4,0,-10,-6\nMST_EDGES_END\n"
		);
	}

	#[test]
	fn empty_tree_still_has_an_edge_block() {
		let outcome = MstOutcome::Spanning(SpanningTree::default());
		assert_eq!(text(&outcome), "TOTAL_COST:0\nMST_EDGES_START\nMST_EDGES_END\n");
	}

	#[test]
	fn disconnected_is_a_single_line() {
		let outcome = MstOutcome::Disconnected { accepted: 1, required: 2 };
		assert_eq!(text(&outcome), "TOTAL_COST:-1\n");
	}

	#[test]
	fn json_report_carries_the_same_numbers() {
		let value = to_json(&sample());
		assert_eq!(value["total_cost"], -12);
		assert_eq!(value["edges"][0]["u"], 2);
		assert_eq!(value["edges"][0]["w_u"], -10);
		assert_eq!(value["edges"][1]["c_e"], -6);

		let value = to_json(&MstOutcome::Disconnected { accepted: 0, required: 3 });
		assert_eq!(value["total_cost"], -1);
		assert_eq!(value["disconnected"], true);
		assert!(value.get("edges").is_none());
	}

	#[test]
	fn json_report_is_valid_json() {
		let mut buf = Vec::new();
		write_report(&mut buf, &sample(), ReportFormat::Json).unwrap();
		let parsed: Value = serde_json::from_slice(&buf).unwrap();
		assert_eq!(parsed, to_json(&sample()));
	}
}
