//! A visitor that counts what an STP file declares and contains.
//!
//! Only counters and a few strings are kept, never the graph itself.

use serde::Serialize;
use steinlib::{Field, Visitor};

/// Free-text metadata from the `Comment` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// `Name`
    pub name: Option<String>,
    /// `Creator`
    pub creator: Option<String>,
    /// `Problem`
    pub problem: Option<String>,
    /// `Remark`
    pub remark: Option<String>,
}

/// Counts announced by header-like records (`Nodes`, `Edges`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Declared {
    /// `Nodes` in the Graph section.
    pub nodes: Option<u64>,
    /// `Edges` in the Graph section.
    pub edges: Option<u64>,
    /// `Arcs` in the Graph section.
    pub arcs: Option<u64>,
    /// `Terminals` in the Terminals section.
    pub terminals: Option<u64>,
    /// `Obstacles` in the Graph section.
    pub obstacles: Option<u64>,
}

/// Records actually present in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Observed {
    /// `E` records.
    pub edges: usize,
    /// `A` records.
    pub arcs: usize,
    /// `T` and `TP` records.
    pub terminals: usize,
    /// `DD` records.
    pub coordinates: usize,
    /// `RR` records.
    pub obstacles: usize,
    /// `MD` records.
    pub maximum_degrees: usize,
    /// Records of the Presolve section, `END` excluded.
    pub presolve: usize,
}

/// What `stp summary` reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Comment section metadata.
    pub metadata: Metadata,
    /// Declared counts.
    pub declared: Declared,
    /// Observed record counts.
    pub observed: Observed,
    /// Section names in the order they were opened.
    pub sections: Vec<String>,
    /// Number of coordinates per node, from the first `DD` record.
    pub coordinate_dimension: Option<usize>,
}

fn first_text(fields: &[Field]) -> Option<String> {
    fields.first().map(ToString::to_string)
}

fn first_int(fields: &[Field]) -> Option<u64> {
    fields.first().and_then(Field::as_int)
}

impl Visitor for Summary {
    fn section(&mut self, _raw: &str, fields: &[Field]) {
        if let Some(name) = first_text(fields) {
            self.sections.push(name);
        }
    }

    fn comment_name(&mut self, _raw: &str, fields: &[Field]) {
        self.metadata.name = first_text(fields);
    }

    fn comment_creator(&mut self, _raw: &str, fields: &[Field]) {
        self.metadata.creator = first_text(fields);
    }

    fn comment_problem(&mut self, _raw: &str, fields: &[Field]) {
        self.metadata.problem = first_text(fields);
    }

    fn comment_remark(&mut self, _raw: &str, fields: &[Field]) {
        self.metadata.remark = first_text(fields);
    }

    fn graph_nodes(&mut self, _raw: &str, fields: &[Field]) {
        self.declared.nodes = first_int(fields);
    }

    fn graph_edges(&mut self, _raw: &str, fields: &[Field]) {
        self.declared.edges = first_int(fields);
    }

    fn graph_arcs(&mut self, _raw: &str, fields: &[Field]) {
        self.declared.arcs = first_int(fields);
    }

    fn graph_obstacles(&mut self, _raw: &str, fields: &[Field]) {
        self.declared.obstacles = first_int(fields);
    }

    fn graph_e(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.edges += 1;
    }

    fn graph_a(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.arcs += 1;
    }

    fn terminals_terminals(&mut self, _raw: &str, fields: &[Field]) {
        self.declared.terminals = first_int(fields);
    }

    fn terminals_t(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.terminals += 1;
    }

    fn terminals_tp(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.terminals += 1;
    }

    fn coordinates_dd(&mut self, _raw: &str, fields: &[Field]) {
        self.observed.coordinates += 1;
        // The first field is the node id.
        let dimension = fields.len().saturating_sub(1);
        match self.coordinate_dimension {
            None => self.coordinate_dimension = Some(dimension),
            Some(first) if first != dimension => {
                tracing::debug!(first, dimension, "coordinate dimension varies");
            }
            Some(_) => {}
        }
    }

    fn obstacles_rr(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.obstacles += 1;
    }

    fn maximum_degrees_md(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.maximum_degrees += 1;
    }

    fn presolve_fixed(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_lower(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_upper(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_time(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_orgnodes(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_orgedges(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_ea(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_ec(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_ed(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }

    fn presolve_es(&mut self, _raw: &str, _fields: &[Field]) {
        self.observed.presolve += 1;
    }
}
