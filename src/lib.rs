#[macro_use] extern crate log;
extern crate clap;
extern crate serde_json;
extern crate simplelog;
extern crate thiserror;

pub mod config;
pub mod cost;
pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod input;
pub mod mst;
pub mod report;

pub use config::Config;
pub use cost::{effective_cost, INVALID_EDGE_COST};
pub use disjoint_set::DisjointSet;
pub use error::{AppError, InputError, MstError};
pub use graph::{Cost, Edge, Graph, VertexId, Weight};
pub use input::{parse_graph, read_graph};
pub use mst::{find_extended_mst, MstOutcome, SpanningTree, TreeEdge};
pub use report::{write_report, ReportFormat};
