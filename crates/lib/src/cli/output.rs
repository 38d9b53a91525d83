use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// Harness output, written as plain text or JSON lines.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message("info", m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message("error", m)
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(&Line {
                ty: "report",
                data: report,
            }),
            OutputKind::Normal => writeln!(self.out, "{report}"),
        }
    }

    fn message(&mut self, kind: &'static str, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(&Line {
                ty: "message",
                data: Message {
                    kind,
                    output: m.to_string(),
                },
            }),
            OutputKind::Normal => writeln!(self.out, "{kind}: {m}"),
        }
    }

    fn json<T>(&mut self, line: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, line)?;
        writeln!(self.out)
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: &'static str,
    data: T,
}

#[derive(Serialize)]
struct Message {
    kind: &'static str,
    output: String,
}
