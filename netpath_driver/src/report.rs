//! Printable listing of netlist names.

use std::fmt;

use netpath_graph::Vertex;

/// One vertex in a [`NameReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRow {
    /// Fully-scoped name
    pub name: String,
    /// Vertex kind as written in descriptions
    pub kind: String,
    /// Declared bit width
    pub width: Option<u32>,
    /// Declared source location
    pub location: Option<String>,
}

impl From<&Vertex> for NameRow {
    fn from(vertex: &Vertex) -> Self {
        Self {
            name: vertex.name().to_string(),
            kind: vertex.kind().to_string(),
            width: vertex.width(),
            location: vertex.location().map(str::to_string),
        }
    }
}

/// Table of vertex names with their kind, width and source location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameReport {
    rows: Vec<NameRow>,
}

impl NameReport {
    const HEADERS: [&'static str; 4] = ["Name", "Kind", "Width", "Location"];

    /// One row per vertex, in the order given.
    pub fn new<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a Vertex>,
    {
        Self {
            rows: vertices.into_iter().map(NameRow::from).collect(),
        }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[NameRow] {
        &self.rows
    }

    /// Number of rows.
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cells(row: &NameRow) -> [String; 4] {
        [
            row.name.clone(),
            row.kind.clone(),
            row.width.map_or_else(|| "-".to_string(), |w| w.to_string()),
            row.location.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl fmt::Display for NameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No names");
        }

        let cells: Vec<[String; 4]> = self.rows.iter().map(Self::cells).collect();
        let mut widths = Self::HEADERS.map(str::len);
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        write!(f, "│")?;
        for (i, header) in Self::HEADERS.iter().enumerate() {
            write!(f, " {:<width$} │", header, width = widths[i])?;
        }
        writeln!(f)?;

        write!(f, "├")?;
        for width in &widths {
            write!(f, "{:─^width$}┼", "─", width = width + 2)?;
        }
        writeln!(f)?;

        for row in &cells {
            write!(f, "│")?;
            for (i, cell) in row.iter().enumerate() {
                write!(f, " {:<width$} │", cell, width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
