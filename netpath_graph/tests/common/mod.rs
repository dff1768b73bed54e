#![allow(dead_code)]

use std::sync::OnceLock;

use netpath_common::{LoadConfig, parse_description_str};
use netpath_graph::NetlistGraph;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

pub fn init_test_logger() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn graph_from(xml: &str) -> NetlistGraph {
    graph_with(xml, &LoadConfig::default())
}

pub fn graph_with(xml: &str, config: &LoadConfig) -> NetlistGraph {
    init_test_logger();
    let description = parse_description_str(xml).expect("fixture should parse");
    NetlistGraph::build(&description, config).expect("fixture should build")
}

pub const ADDER: &str = r#"<netlist>
  <scope name="adder">
    <var name="a" kind="input"/>
    <var name="b" kind="input"/>
    <var name="ci" kind="input"/>
    <var name="s" kind="output"/>
    <var name="co" kind="output"/>
    <edge from="a" to="s"/> <edge from="b" to="s"/> <edge from="ci" to="s"/>
    <edge from="a" to="co"/> <edge from="b" to="co"/> <edge from="ci" to="co"/>
  </scope>
</netlist>"#;

/// Counter register fed back through a next-state net.
pub const COUNTER: &str = r#"<netlist>
  <scope name="counter">
    <var name="i_clk" kind="input" width="1"/>
    <var name="i_rst" kind="input" width="1"/>
    <var name="counter_q" kind="reg" width="8"/>
    <var name="n_next" kind="net" width="8"/>
    <var name="o_count" kind="output" width="8"/>
    <var name="o_wrap" kind="output" width="1"/>
    <edge from="i_clk" to="counter_q" kind="seq"/>
    <edge from="i_rst" to="counter_q" kind="seq"/>
    <edge from="counter_q" to="n_next"/>
    <edge from="n_next" to="counter_q" kind="seq"/>
    <edge from="counter_q" to="o_count"/>
    <edge from="n_next" to="o_wrap"/>
  </scope>
</netlist>"#;

/// Two pipeline stages that share the leaf name `data_q`.
pub const PIPELINE: &str = r#"<netlist>
  <scope name="pipe">
    <var name="in_data" kind="input"/>
    <var name="out_data" kind="output"/>
    <scope name="u_s0"><var name="data_q" kind="reg"/></scope>
    <scope name="u_s1"><var name="data_q" kind="reg"/></scope>
    <edge from="in_data" to="u_s0.data_q" kind="seq"/>
    <edge from="pipe.u_s0.data_q" to="pipe.u_s1.data_q" kind="seq"/>
    <edge from="pipe.u_s1.data_q" to="out_data"/>
  </scope>
</netlist>"#;

/// `n1` and `n2` form a combinational loop reachable from `i_a` only.
pub const COMB_LOOP: &str = r#"<netlist>
  <scope name="loop">
    <var name="i_a" kind="input"/>
    <var name="i_b" kind="input"/>
    <var name="n1" kind="net"/>
    <var name="n2" kind="net"/>
    <var name="o_y" kind="output"/>
    <var name="o_z" kind="output"/>
    <edge from="i_a" to="n1"/>
    <edge from="n1" to="n2"/>
    <edge from="n2" to="n1"/>
    <edge from="n2" to="o_y"/>
    <edge from="i_b" to="o_z"/>
  </scope>
</netlist>"#;
