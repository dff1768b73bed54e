//! Connectivity graph and path queries for elaborated netlists.
//!
//! [`NetlistGraph::build`] turns a parsed description into an immutable arena
//! graph with a name index; [`PathQuery`] answers reachability questions
//! against it.

mod check;
mod dot;
mod error;
pub mod graph_index;
pub mod query;
mod vertex;

pub use check::{GraphWarning, check_graph};
pub use dot::write_dot;
pub use error::QueryError;
pub use graph_index::{NameIndex, NetlistGraph};
pub use query::{PathIter, PathQuery};
pub use vertex::{Edge, EdgeId, Path, Vertex, VertexId};
