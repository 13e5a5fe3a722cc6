//! Farm description loader.
//!
//! # Rules
//!
//! - The first line that is neither blank nor a comment holds the number of
//!   ants, a positive integer.
//! - `##start` and `##end` each appear once and mark the next room line.
//!   Comments and blank lines may sit between a marker and its room.
//! - Any other line starting with `#` is a comment.
//! - A room line is `name x y`: exactly three whitespace-separated tokens,
//!   integer coordinates of any sign.  Names may not start with `L` or `#`
//!   and may not contain `-`.  No two rooms share a name or a coordinate
//!   pair.
//! - A tunnel line is `a-b` naming two known, distinct rooms.  Each pair is
//!   linked at most once, in either orientation.  Once the first tunnel is
//!   read, no more rooms may follow.
//!
//! Reachability of end is not checked here; the solver reports a
//! disconnected farm.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use af_core::{Coord, NodeId};
use af_graph::{Graph, GraphBuilder};

use crate::{Farm, LoadError, LoadResult};

// ── Marker ────────────────────────────────────────────────────────────────────

/// A `##start` / `##end` command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl Marker {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "##start" => Some(Self::Start),
            "##end" => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("##start"),
            Self::End => f.write_str("##end"),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a farm from a file.
pub fn load_farm_file(path: &Path) -> LoadResult<Farm> {
    let file = File::open(path)?;
    load_farm_reader(file)
}

/// Like [`load_farm_file`] but accepts any `Read` source.
pub fn load_farm_reader<R: Read>(mut reader: R) -> LoadResult<Farm> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_farm_str(&text)
}

/// Parse a farm description held in memory.
pub fn load_farm_str(text: &str) -> LoadResult<Farm> {
    let source: Vec<String> = text.lines().map(str::to_owned).collect();
    let mut lines = source
        .iter()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let agent_count = loop {
        let Some((line, text)) = lines.next() else {
            return Err(LoadError::Empty);
        };
        if text.starts_with('#') && Marker::parse(text).is_none() {
            continue;
        }
        break parse_agent_count(line, text)?;
    };

    let mut parser = Parser::default();
    for (line, text) in lines {
        parser.line(line, text)?;
    }
    let graph = parser.finish()?;

    debug!(
        rooms = graph.node_count(),
        tunnels = graph.edge_count(),
        agents = agent_count,
        "farm loaded"
    );
    Ok(Farm { graph, agent_count, source })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_agent_count(line: usize, text: &str) -> LoadResult<usize> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LoadError::InvalidAgentCount { line, value: text.to_owned() }),
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> LoadError {
    LoadError::Malformed { line, reason: reason.into() }
}

/// Line-by-line state after the ant count.
#[derive(Default)]
struct Parser {
    builder:    GraphBuilder,
    coords:     FxHashMap<Coord, String>,
    tunnels:    FxHashSet<(NodeId, NodeId)>,
    /// Marker waiting for its room, with the marker's line.
    pending:    Option<(Marker, usize)>,
    has_start:  bool,
    has_end:    bool,
    in_tunnels: bool,
}

impl Parser {
    fn line(&mut self, line: usize, text: &str) -> LoadResult<()> {
        if let Some(marker) = Marker::parse(text) {
            return self.marker(line, marker);
        }
        if text.starts_with('#') {
            return Ok(());
        }
        if !text.contains(char::is_whitespace) && text.contains('-') {
            self.tunnel(line, text)
        } else {
            self.room(line, text)
        }
    }

    fn marker(&mut self, line: usize, marker: Marker) -> LoadResult<()> {
        self.no_pending()?;
        let seen = match marker {
            Marker::Start => &mut self.has_start,
            Marker::End => &mut self.has_end,
        };
        if *seen {
            return Err(LoadError::DuplicateMarker { line, marker });
        }
        *seen = true;
        self.pending = Some((marker, line));
        Ok(())
    }

    fn room(&mut self, line: usize, text: &str) -> LoadResult<()> {
        if self.in_tunnels {
            return Err(malformed(line, "room defined after the first tunnel"));
        }
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let [name, x, y] = tokens[..] else {
            return Err(malformed(line, format!("expected `name x y`, found {text:?}")));
        };
        if name.starts_with('L') || name.starts_with('#') {
            return Err(malformed(line, format!("room name {name:?} may not start with 'L' or '#'")));
        }
        if name.contains('-') {
            return Err(malformed(line, format!("room name {name:?} may not contain '-'")));
        }
        let parse = |v: &str| {
            v.parse::<i64>()
                .map_err(|_| malformed(line, format!("coordinate {v:?} is not an integer")))
        };
        let coord = Coord::new(parse(x)?, parse(y)?);

        if self.builder.node_id(name).is_some() {
            return Err(LoadError::DuplicateRoom { line, name: name.to_owned() });
        }
        if let Some(first) = self.coords.get(&coord) {
            return Err(LoadError::DuplicateCoordinates {
                line,
                first: first.clone(),
                second: name.to_owned(),
                coord,
            });
        }
        self.coords.insert(coord, name.to_owned());
        let id = self.builder.add_node(name, Some(coord))?;

        match self.pending.take() {
            Some((Marker::Start, _)) => self.builder.set_start(id),
            Some((Marker::End, _)) => self.builder.set_end(id),
            None => {}
        }
        Ok(())
    }

    fn tunnel(&mut self, line: usize, text: &str) -> LoadResult<()> {
        self.no_pending()?;
        self.in_tunnels = true;

        let Some((a, b)) = text.split_once('-') else {
            return Err(malformed(line, format!("expected `a-b`, found {text:?}")));
        };
        if a.is_empty() || b.is_empty() || b.contains('-') {
            return Err(malformed(line, format!("expected `a-b`, found {text:?}")));
        }
        let lookup = |name: &str| {
            self.builder
                .node_id(name)
                .ok_or_else(|| LoadError::UnknownRoom { line, name: name.to_owned() })
        };
        let (ia, ib) = (lookup(a)?, lookup(b)?);
        if ia == ib {
            return Err(LoadError::SelfLoop { line, name: a.to_owned() });
        }
        if !self.tunnels.insert((ia.min(ib), ia.max(ib))) {
            return Err(LoadError::DuplicateTunnel { line, a: a.to_owned(), b: b.to_owned() });
        }
        self.builder.add_edge(ia, ib);
        Ok(())
    }

    /// A marker whose room never came.
    fn no_pending(&self) -> LoadResult<()> {
        match self.pending {
            Some((marker, line)) => Err(LoadError::DanglingMarker { line, marker }),
            None => Ok(()),
        }
    }

    fn finish(self) -> LoadResult<Graph> {
        self.no_pending()?;
        let rooms = self.builder.node_count();
        if rooms < 2 {
            return Err(LoadError::NotEnoughRooms(rooms));
        }
        if !self.has_start {
            return Err(LoadError::MissingStart);
        }
        if !self.has_end {
            return Err(LoadError::MissingEnd);
        }
        Ok(self.builder.build()?)
    }
}
