//! Path queries over elaborated netlists.
//!
//! [`load_netlist`] reads a description file and returns a [`NetlistPaths`]
//! handle; a [`Driver`] keeps loaded handles cached by [`DriverKey`] so they
//! can be shared between threads.

pub mod driver;
mod error;
pub mod key;
pub mod netlist_paths;
pub mod report;
pub mod waypoints;

pub use driver::Driver;
pub use error::DriverError;
pub use key::DriverKey;
pub use netlist_paths::{NetlistPaths, load_netlist};
pub use report::{NameReport, NameRow};
pub use waypoints::Waypoints;

pub use netpath_common::{LoadConfig, NetlistError, VertexKind};
pub use netpath_graph::{QueryError, Vertex};
