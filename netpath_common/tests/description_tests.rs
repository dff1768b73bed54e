#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::fs;

use netpath_common::{
    ConnectivityFact, EdgeKind, LoadConfig, NetlistError, VertexKind, parse_description_str,
    read_description,
};
use tempfile::tempdir;

mod common;

const COUNTER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<netlist>
  <scope name="counter">
    <var name="i_clk" kind="input" width="1" loc="counter.sv:2"/>
    <var name="i_rst" kind="input" width="1"/>
    <var name="counter_q" kind="var" width="8"/>
    <var name="o_count" kind="output" width="8"/>
    <always>
      <sentree><senitem edge="pos"><varref name="i_clk"/></senitem></sentree>
      <if>
        <varref name="i_rst"/>
        <assigndly><const value="0"/><varref name="counter_q"/></assigndly>
        <assigndly>
          <add><varref name="counter_q"/><const value="1"/></add>
          <varref name="counter_q"/>
        </assigndly>
      </if>
    </always>
    <contassign><varref name="counter_q"/><varref name="o_count"/></contassign>
  </scope>
</netlist>
"#;

#[test]
fn test_read_description_from_file() {
    common::init_test_logger();
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("counter.xml");
    fs::write(&path, COUNTER).unwrap();

    let d = read_description(&path).expect("description should load");
    assert_eq!(d.top_scopes, vec!["counter".to_string()]);

    let counter_q = d
        .entities
        .iter()
        .find(|e| e.name == "counter.counter_q")
        .unwrap();
    assert_eq!(counter_q.kind, VertexKind::Register);
    assert_eq!(counter_q.width, Some(8));

    let expected = [
        ConnectivityFact::new("counter.i_clk", "counter.counter_q", EdgeKind::Sequential),
        ConnectivityFact::new("counter.i_rst", "counter.counter_q", EdgeKind::Sequential),
        ConnectivityFact::new("counter.counter_q", "counter.counter_q", EdgeKind::Sequential),
        ConnectivityFact::new(
            "counter.counter_q",
            "counter.o_count",
            EdgeKind::Combinational,
        ),
    ];
    for fact in &expected {
        assert_with_context!(d.facts.contains(fact), format!("missing {fact:?}"));
    }
    assert_eq!(d.facts.len(), expected.len());
}

#[test]
fn test_read_description_missing_file() {
    let tmp = tempdir().unwrap();
    let result = read_description(tmp.path().join("absent.xml"));
    assert!(matches!(result, Err(NetlistError::Io(_))));
}

#[test]
fn test_truncated_document_is_malformed() {
    let truncated = &COUNTER[..COUNTER.len() / 2];
    assert!(matches!(
        parse_description_str(truncated),
        Err(NetlistError::MalformedInput(_))
    ));
}

#[test]
fn test_parsing_is_deterministic() {
    let a = parse_description_str(COUNTER).unwrap();
    let b = parse_description_str(COUNTER).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_multiple_top_scopes() {
    let d = parse_description_str(
        r#"<netlist>
             <scope name="a"><var name="x" kind="input"/></scope>
             <scope name="b"><var name="x" kind="output"/><edge from="a.x" to="x"/></scope>
           </netlist>"#,
    )
    .unwrap();
    assert_eq!(d.single_top(), None);
    assert_eq!(
        d.facts,
        vec![ConnectivityFact::new("a.x", "b.x", EdgeKind::Combinational)]
    );
}

#[test]
fn test_config_file_roundtrip() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("netpath.json");
    let cfg = LoadConfig::builder().expand_top_prefix(false).build();
    fs::write(&path, cfg.to_json_string()).unwrap();
    assert_eq!(LoadConfig::from_json_file(&path).unwrap(), cfg);
}
