//! Graphviz export.

use std::fmt::{self, Write};

use netpath_common::{EdgeKind, VertexKind};

use crate::NetlistGraph;

const fn shape(kind: VertexKind) -> &'static str {
    match kind {
        VertexKind::InputPort => "invhouse",
        VertexKind::OutputPort => "house",
        VertexKind::InoutPort => "hexagon",
        VertexKind::Net => "ellipse",
        VertexKind::Register => "box",
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Write the graph in dot format. Sequential edges are dashed.
pub fn write_dot<W: Write>(graph: &NetlistGraph, out: &mut W) -> fmt::Result {
    writeln!(out, "digraph netlist {{")?;
    for vertex in graph.vertices() {
        writeln!(
            out,
            "  {} [label=\"{}\", shape={}];",
            vertex.id(),
            escape(vertex.name()),
            shape(vertex.kind())
        )?;
    }
    for edge in graph.edges() {
        let style = match edge.kind() {
            EdgeKind::Combinational => "solid",
            EdgeKind::Sequential => "dashed",
        };
        writeln!(out, "  {} -> {} [style={}];", edge.from(), edge.to(), style)?;
    }
    writeln!(out, "}}")
}

impl NetlistGraph {
    /// Render the graph as a Graphviz dot document.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_dot(self, &mut out);
        out
    }
}
