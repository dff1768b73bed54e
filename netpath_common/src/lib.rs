//! Common types and the netlist description reader for the netpath workspace.
//!
//! This crate provides vertex and edge kinds, hierarchical name handling, load
//! configuration, load-time errors, and the parser that turns a structural
//! netlist description into declared entities and connectivity facts.

mod config;
pub mod description;
mod error;
mod kind;
pub mod name;

pub use crate::config::*;
pub use crate::description::{
    ConnectivityFact, DeclaredEntity, NetlistDescription, parse_description_str,
    read_description,
};
pub use crate::error::*;
pub use crate::kind::*;
