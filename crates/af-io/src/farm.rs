//! A loaded farm: the graph, the ant count, and the text it came from.

use af_graph::Graph;

#[derive(Debug, Clone)]
pub struct Farm {
    pub graph: Graph,

    /// Number of ants waiting at start.  Always at least 1.
    pub agent_count: usize,

    /// Input lines exactly as read, for echoing back.
    pub source: Vec<String>,
}

impl Farm {
    /// The input text, one source line per line.
    pub fn source_text(&self) -> String {
        self.source.join("\n")
    }
}
