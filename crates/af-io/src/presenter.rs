//! The `TracePresenter` trait and the plain-text presenter.

use std::io::Write;

use af_core::Turn;
use af_graph::Graph;
use af_sched::{Schedule, TurnRecord};

use crate::PresentResult;

/// Trait implemented by every turn-trace output format.
pub trait TracePresenter {
    /// Write the moves of one turn.  Room names are looked up in `graph`.
    fn write_turn(&mut self, turn: Turn, record: &TurnRecord, graph: &Graph) -> PresentResult<()>;

    /// Flush the underlying writer.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> PresentResult<()>;
}

/// Write every turn of `schedule`, then finish.
pub fn present<P: TracePresenter>(
    presenter: &mut P,
    graph:     &Graph,
    schedule:  &Schedule,
) -> PresentResult<()> {
    let mut turn = Turn::FIRST;
    for record in schedule.iter() {
        presenter.write_turn(turn, record, graph)?;
        turn = turn.next();
    }
    presenter.finish()
}

// ── TextPresenter ─────────────────────────────────────────────────────────────

/// One line per turn, moves as `L<ant>-<room>` separated by single spaces.
pub struct TextPresenter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TracePresenter for TextPresenter<W> {
    fn write_turn(&mut self, _turn: Turn, record: &TurnRecord, graph: &Graph) -> PresentResult<()> {
        for (i, m) in record.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "L{}-{}", m.agent, graph.name(m.to))?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> PresentResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
