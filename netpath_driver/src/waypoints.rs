//! Ordered points a witness path must visit.

use crate::DriverError;

/// A start point, a finish point and any number of through points in
/// between, in the order they must be visited.
///
/// ```ignore
/// let mut waypoints = Waypoints::new();
/// waypoints.add_start_point("i_clk")?.add_through_point("n_next").add_finish_point("o_count")?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Waypoints {
    start: Option<String>,
    through: Vec<String>,
    finish: Option<String>,
}

impl Waypoints {
    /// Empty waypoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waypoints with only a start and a finish.
    pub fn between(start: impl Into<String>, finish: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            through: Vec::new(),
            finish: Some(finish.into()),
        }
    }

    /// Sets the start point. Fails if one is already set.
    pub fn add_start_point(&mut self, name: impl Into<String>) -> Result<&mut Self, DriverError> {
        if self.start.is_some() {
            return Err(DriverError::waypoint("start point already defined"));
        }
        self.start = Some(name.into());
        Ok(self)
    }

    /// Sets the finish point. Fails if one is already set.
    pub fn add_finish_point(&mut self, name: impl Into<String>) -> Result<&mut Self, DriverError> {
        if self.finish.is_some() {
            return Err(DriverError::waypoint("finish point already defined"));
        }
        self.finish = Some(name.into());
        Ok(self)
    }

    /// Appended after any existing through points.
    pub fn add_through_point(&mut self, name: impl Into<String>) -> &mut Self {
        self.through.push(name.into());
        self
    }

    /// The start point, if set.
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    /// The finish point, if set.
    pub fn finish(&self) -> Option<&str> {
        self.finish.as_deref()
    }

    /// Through points in visiting order.
    pub fn through(&self) -> &[String] {
        &self.through
    }

    /// Number of points, counting start and finish when set.
    pub fn len(&self) -> usize {
        self.through.len() + usize::from(self.start.is_some()) + usize::from(self.finish.is_some())
    }

    /// True when no point is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All points in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.start
            .iter()
            .chain(self.through.iter())
            .chain(self.finish.iter())
            .map(String::as_str)
    }

    /// Start and finish, or an error naming whichever is missing.
    pub(crate) fn endpoints(&self) -> Result<(&str, &str), DriverError> {
        let start = self
            .start()
            .ok_or_else(|| DriverError::waypoint("no start point defined"))?;
        let finish = self
            .finish()
            .ok_or_else(|| DriverError::waypoint("no finish point defined"))?;
        Ok((start, finish))
    }
}
