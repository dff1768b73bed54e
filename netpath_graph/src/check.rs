//! Structural sanity checks run after the graph is built.

use std::fmt;

use netpath_common::name;
use tracing::warn;

use crate::NetlistGraph;

/// Suspicious structure that does not prevent querying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphWarning {
    /// A register that nothing drives.
    UndrivenRegister(String),
    /// A Verilator `__Vlvbound` variable, which can merge otherwise unrelated
    /// paths.
    LvboundTemporary(String),
    /// An output port or register with no fan-in.
    UnreachableEndpoint(String),
}

impl fmt::Display for GraphWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndrivenRegister(n) => write!(f, "register '{n}' has no drivers"),
            Self::LvboundTemporary(n) => {
                write!(f, "'{n}' is an lvbound temporary and may create false paths")
            }
            Self::UnreachableEndpoint(n) => write!(f, "endpoint '{n}' has no fan-in"),
        }
    }
}

/// Collect every warning for the graph, in vertex order.
#[must_use]
pub fn check_graph(graph: &NetlistGraph) -> Vec<GraphWarning> {
    let mut warnings = Vec::new();
    for vertex in graph.vertices() {
        let undriven = graph.fanin_degree(vertex.id()) == 0;
        if vertex.kind().is_register() && undriven {
            warnings.push(GraphWarning::UndrivenRegister(vertex.name().to_string()));
        } else if vertex.kind().is_endpoint() && undriven {
            warnings.push(GraphWarning::UnreachableEndpoint(vertex.name().to_string()));
        }
        if name::is_lvbound(vertex.name()) {
            warnings.push(GraphWarning::LvboundTemporary(vertex.name().to_string()));
        }
    }
    warnings
}

/// Emits every warning at `warn` level.
pub fn log_warnings(graph: &NetlistGraph) {
    for warning in check_graph(graph) {
        warn!("{}", warning);
    }
}
