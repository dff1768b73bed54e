//! The query facade over one loaded netlist.

use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;
use netpath_common::{LoadConfig, NetlistDescription, name, parse_description_str, read_description};
use netpath_graph::{NetlistGraph, PathQuery, QueryError, Vertex};
use tracing::{debug, info};

use crate::{DriverError, NameReport, Waypoints};

/// Load a description file with the default configuration.
pub fn load_netlist<P: AsRef<Path>>(path: P) -> Result<NetlistPaths, DriverError> {
    NetlistPaths::load(path, &LoadConfig::default())
}

/// A loaded netlist and the queries that can be asked of it.
///
/// The predicate methods (`path_exists`, `reg_exists`, `startpoint_exists`,
/// `endpoint_exists`) answer `false` for names that do not resolve. Use
/// [`NetlistPaths::try_path_exists`] or [`NetlistPaths::resolve`] to see why.
#[derive(Debug, Clone)]
pub struct NetlistPaths {
    graph: NetlistGraph,
}

impl NetlistPaths {
    /// Reads and builds the description at `path`.
    pub fn load<P: AsRef<Path>>(path: P, config: &LoadConfig) -> Result<Self, DriverError> {
        let description = read_description(path)?;
        Self::from_description(&description, config)
    }

    /// Builds from description text.
    pub fn parse_with(text: &str, config: &LoadConfig) -> Result<Self, DriverError> {
        let description = parse_description_str(text)?;
        Self::from_description(&description, config)
    }

    /// Builds from an already parsed description.
    pub fn from_description(
        description: &NetlistDescription,
        config: &LoadConfig,
    ) -> Result<Self, DriverError> {
        let graph = NetlistGraph::build(description, config)?;
        Ok(Self { graph })
    }

    /// The underlying graph.
    #[must_use]
    pub const fn graph(&self) -> &NetlistGraph {
        &self.graph
    }

    fn query(&self) -> PathQuery<'_> {
        PathQuery::new(&self.graph)
    }

    fn to_names(&self, path: &netpath_graph::Path) -> Vec<String> {
        self.graph
            .path_names(path)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Resolves a name, reporting why it failed.
    pub fn resolve(&self, name: &str) -> Result<&Vertex, DriverError> {
        Ok(self.graph.resolve_vertex(name)?)
    }

    /// Like [`Self::path_exists`], but resolution failures are returned.
    pub fn try_path_exists(&self, start: &str, end: &str) -> Result<bool, DriverError> {
        Ok(self.query().path_exists(start, end)?)
    }

    /// True iff a legal start and end are joined by a route.
    #[must_use]
    pub fn path_exists(&self, start: &str, end: &str) -> bool {
        self.try_path_exists(start, end).unwrap_or_else(|e| {
            debug!("path_exists({}, {}) is false: {}", start, end, e);
            false
        })
    }

    /// True iff `name` is a register.
    #[must_use]
    pub fn reg_exists(&self, name: &str) -> bool {
        self.query().reg_exists(name)
    }

    /// True iff `name` is a legal startpoint.
    #[must_use]
    pub fn startpoint_exists(&self, name: &str) -> bool {
        self.query().startpoint_exists(name)
    }

    /// True iff `name` is a legal endpoint.
    #[must_use]
    pub fn endpoint_exists(&self, name: &str) -> bool {
        self.query().endpoint_exists(name)
    }

    /// Lazily yields every simple path between two points as fully-scoped
    /// names.
    pub fn enumerate_paths(
        &self,
        start: &str,
        end: &str,
    ) -> Result<impl Iterator<Item = Vec<String>> + '_, DriverError> {
        let paths = self.query().enumerate_paths(start, end)?;
        Ok(paths.map(move |path| self.to_names(&path)))
    }

    /// Shortest witness path as fully-scoped names.
    pub fn any_path(&self, start: &str, end: &str) -> Result<Option<Vec<String>>, DriverError> {
        let path = self.query().any_path(start, end)?;
        Ok(path.map(|p| self.to_names(&p)))
    }

    /// Witness path visiting every waypoint in order.
    pub fn paths_via(&self, waypoints: &Waypoints) -> Result<Option<Vec<String>>, DriverError> {
        let (start, finish) = waypoints.endpoints()?;
        let path = self
            .query()
            .any_path_via(start, waypoints.through(), finish)?;
        Ok(path.map(|p| self.to_names(&p)))
    }

    /// Names of every endpoint reachable from `start`.
    pub fn fanout(&self, start: &str) -> Result<Vec<String>, DriverError> {
        let cone = self.query().fanout_endpoints(start)?;
        Ok(cone.into_iter().map(|v| v.name().to_string()).collect())
    }

    /// Names of every startpoint that reaches `end`.
    pub fn fanin(&self, end: &str) -> Result<Vec<String>, DriverError> {
        let cone = self.query().fanin_startpoints(end)?;
        Ok(cone.into_iter().map(|v| v.name().to_string()).collect())
    }

    /// Vertices sorted by name. Verilator temporaries are left out when the
    /// netlist was loaded with `hide_temporaries`.
    #[must_use]
    pub fn names(&self) -> Vec<&Vertex> {
        let hide = self.graph.config().hide_temporaries;
        self.graph
            .vertices()
            .iter()
            .filter(|v| !(hide && name::is_temporary(v.name())))
            .sorted_by(|a, b| a.name().cmp(b.name()))
            .collect()
    }

    /// Printable table of [`Self::names`].
    #[must_use]
    pub fn name_report(&self) -> NameReport {
        NameReport::new(self.names())
    }

    /// Graphviz rendering of the graph.
    #[must_use]
    pub fn to_dot(&self) -> String {
        self.graph.to_dot()
    }

    /// Write the graph as a Graphviz dot file.
    pub fn dump_dot<P: AsRef<Path>>(&self, path: P) -> Result<(), DriverError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_dot())?;
        info!("Wrote dot graph to {}", path.display());
        Ok(())
    }

    /// `try_path_exists` over every pair, in parallel with the `parallel`
    /// feature. Results keep the order of `pairs`.
    pub fn path_exists_many<S>(&self, pairs: &[(S, S)]) -> Vec<Result<bool, DriverError>>
    where
        S: AsRef<str> + Sync,
    {
        self.query()
            .path_exists_many(pairs)
            .into_iter()
            .map(|r: Result<bool, QueryError>| r.map_err(DriverError::from))
            .collect()
    }
}

impl FromStr for NetlistPaths {
    type Err = DriverError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_with(text, &LoadConfig::default())
    }
}
