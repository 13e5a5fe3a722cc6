//! CSV presenter: header `turn,ant,room`, one row per move.

use std::io::Write;

use csv::Writer;

use af_core::Turn;
use af_graph::Graph;
use af_sched::TurnRecord;

use crate::{PresentError, PresentResult, TracePresenter};

pub struct CsvPresenter<W: Write> {
    out:      Writer<W>,
    finished: bool,
}

impl<W: Write> CsvPresenter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> PresentResult<Self> {
        let mut out = Writer::from_writer(out);
        out.write_record(["turn", "ant", "room"])?;
        Ok(Self { out, finished: false })
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> PresentResult<W> {
        self.out
            .into_inner()
            .map_err(|e| PresentError::Io(e.into_error()))
    }
}

impl<W: Write> TracePresenter for CsvPresenter<W> {
    fn write_turn(&mut self, turn: Turn, record: &TurnRecord, graph: &Graph) -> PresentResult<()> {
        for m in record {
            self.out.write_record(&[
                turn.0.to_string(),
                m.agent.to_string(),
                graph.name(m.to).to_owned(),
            ])?;
        }
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
