#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use netpath_common::{
    ConnectivityFact, DeclaredEntity, EdgeKind, LoadConfig, NetlistDescription, NetlistError,
    VertexKind,
};
use netpath_graph::{GraphWarning, NetlistGraph, QueryError, check_graph};
use rstest::rstest;

mod common;
use common::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_graph_is_send_sync() {
    assert_send_sync::<NetlistGraph>();
}

#[test]
fn test_build_counts() {
    let graph = graph_from(COUNTER);
    assert_eq!(graph.num_vertices(), 6);
    assert_eq!(graph.num_edges(), 6);
    assert_eq!(graph.vertices_of_kind(VertexKind::InputPort).len(), 2);
    assert_eq!(graph.vertices_of_kind(VertexKind::Register).len(), 1);
    assert_eq!(graph.vertices_of_kind(VertexKind::InoutPort).len(), 0);
    assert_eq!(graph.top_scopes(), ["counter".to_string()]);
}

#[test]
fn test_vertex_attributes_carried() {
    let graph = graph_from(COUNTER);
    let q = graph.resolve_vertex("counter_q").unwrap();
    assert_eq!(q.name(), "counter.counter_q");
    assert_eq!(q.leaf_name(), "counter_q");
    assert_eq!(q.width(), Some(8));
    assert_eq!(q.location(), None);
}

#[test]
fn test_degrees_and_adjacency() {
    let graph = graph_from(COUNTER);
    let q = graph.resolve("counter_q").unwrap();
    let next = graph.resolve("n_next").unwrap();
    assert_eq!(graph.fanin_degree(q), 3);
    assert_eq!(graph.fanout_degree(q), 2);
    assert!(graph.is_connected(q, next));
    assert!(graph.is_connected(next, q));
    let clk = graph.resolve("i_clk").unwrap();
    assert!(!graph.is_connected(q, clk));
    let edge = graph.edge(graph.fanin_edges(q)[0]);
    assert_eq!(edge.kind(), EdgeKind::Sequential);
}

#[test]
fn test_unknown_vertex_rejected() {
    let description = NetlistDescription {
        top_scopes: vec!["top".to_string()],
        entities: vec![DeclaredEntity::new("top.a", VertexKind::InputPort)],
        facts: vec![ConnectivityFact::new(
            "top.a",
            "top.ghost",
            EdgeKind::Combinational,
        )],
    };
    let result = NetlistGraph::build(&description, &LoadConfig::default());
    assert!(matches!(result, Err(NetlistError::UnknownVertex(name)) if name == "top.ghost"));
}

#[rstest]
#[case::net(VertexKind::Net, false)]
#[case::output(VertexKind::OutputPort, false)]
#[case::register(VertexKind::Register, true)]
fn test_self_loop_needs_register(#[case] kind: VertexKind, #[case] accepted: bool) {
    let description = NetlistDescription {
        top_scopes: vec!["top".to_string()],
        entities: vec![
            DeclaredEntity::new("top.i", VertexKind::InputPort),
            DeclaredEntity::new("top.n", kind),
            DeclaredEntity::new("top.o", VertexKind::OutputPort),
        ],
        facts: vec![
            ConnectivityFact::new("top.i", "top.n", EdgeKind::Combinational),
            ConnectivityFact::new("top.n", "top.n", EdgeKind::Combinational),
            ConnectivityFact::new("top.n", "top.o", EdgeKind::Combinational),
        ],
    };
    let result = NetlistGraph::build(&description, &LoadConfig::default());
    if accepted {
        assert!(result.is_ok());
    } else {
        assert!(
            matches!(&result, Err(NetlistError::MalformedInput(msg)) if msg.contains("top.n")),
            "{result:?}"
        );
    }
}

#[test]
fn test_duplicate_entity_rejected() {
    let description = NetlistDescription {
        top_scopes: vec!["top".to_string()],
        entities: vec![
            DeclaredEntity::new("top.a", VertexKind::InputPort),
            DeclaredEntity::new("top.a", VertexKind::Net),
        ],
        facts: Vec::new(),
    };
    assert!(matches!(
        NetlistGraph::build(&description, &LoadConfig::default()),
        Err(NetlistError::MalformedInput(_))
    ));
}

#[test]
fn test_exact_and_leaf_resolution_agree() {
    let graph = graph_from(ADDER);
    for vertex in graph.vertices() {
        assert_eq!(graph.resolve(vertex.name()).unwrap(), vertex.id());
        assert_eq!(graph.resolve(vertex.leaf_name()).unwrap(), vertex.id());
    }
}

#[rstest]
#[case::exact("pipe.u_s0.data_q", true)]
#[case::top_prefix("u_s1.data_q", true)]
#[case::unique_leaf("in_data", true)]
#[case::partial_middle("s0.data_q", false)]
#[case::unknown("nope", false)]
fn test_pipeline_resolution(#[case] name: &str, #[case] found: bool) {
    let graph = graph_from(PIPELINE);
    assert_eq!(graph.resolve(name).is_ok(), found);
}

#[test]
fn test_ambiguous_leaf_lists_candidates() {
    let graph = graph_from(PIPELINE);
    let err = graph.resolve("data_q").unwrap_err();
    assert_eq!(
        err,
        QueryError::AmbiguousName {
            name: "data_q".to_string(),
            candidates: vec![
                "pipe.u_s0.data_q".to_string(),
                "pipe.u_s1.data_q".to_string()
            ],
        }
    );
    assert!(err.is_resolution());
    assert!(err.to_string().contains("pipe.u_s1.data_q"));
}

#[test]
fn test_top_prefix_expansion_can_be_disabled() {
    let config = LoadConfig::builder().expand_top_prefix(false).build();
    let graph = graph_with(PIPELINE, &config);
    assert!(matches!(
        graph.resolve("u_s1.data_q"),
        Err(QueryError::NameNotFound(_))
    ));
    assert!(graph.resolve("pipe.u_s1.data_q").is_ok());
}

#[test]
fn test_top_prefix_needs_single_top() {
    let graph = graph_from(
        r#"<netlist>
             <scope name="a"><scope name="u"><var name="x" kind="input"/></scope></scope>
             <scope name="b"><var name="y" kind="output"/></scope>
           </netlist>"#,
    );
    assert!(graph.resolve("u.x").is_err());
    assert!(graph.resolve("x").is_ok());
}

#[test]
fn test_check_graph_warnings() {
    let graph = graph_with(
        r#"<netlist><scope name="top">
             <var name="i_a" kind="input"/>
             <var name="r_idle" kind="reg"/>
             <var name="o_dead" kind="output"/>
             <var name="__Vlvbound1" kind="net"/>
             <var name="o_live" kind="output"/>
             <edge from="i_a" to="__Vlvbound1"/>
             <edge from="__Vlvbound1" to="o_live"/>
           </scope></netlist>"#,
        &LoadConfig::builder().check_graph(false).build(),
    );
    assert_eq!(
        check_graph(&graph),
        vec![
            GraphWarning::UndrivenRegister("top.r_idle".to_string()),
            GraphWarning::UnreachableEndpoint("top.o_dead".to_string()),
            GraphWarning::LvboundTemporary("top.__Vlvbound1".to_string()),
        ]
    );
}

#[test]
fn test_dot_export() {
    let graph = graph_from(COUNTER);
    let dot = graph.to_dot();
    assert!(dot.starts_with("digraph netlist {"));
    assert!(dot.contains("label=\"counter.counter_q\", shape=box"));
    assert!(dot.contains("style=dashed"));
    assert!(dot.contains("style=solid"));
    assert_eq!(dot.matches("->").count(), graph.num_edges());
    assert!(dot.trim_end().ends_with('}'));
}
