use std::io;

use strum_macros::Display;

use crate::{error::ScpError, path_spec::PathSpec};

/// Which end of the copy this process is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransferMode<'a> {
    /// Produce data, reading from the source path spec
    Source,
    /// Consume data, writing to `target`
    Sink { target: &'a str },
}

/// A fully validated copy, ready to be handed to a [`TransferEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest<'a> {
    /// At most one mode is ever active, `None` if neither `-f` nor `-t` was given
    pub mode: Option<TransferMode<'a>>,
    pub port: u16,
    pub source_raw: &'a str,
    pub source: PathSpec<'a>,
    pub destination_raw: &'a str,
    pub destination: PathSpec<'a>,
}

impl<'a> TransferRequest<'a> {
    pub fn new(
        mode: Option<TransferMode<'a>>,
        port: u16,
        source_raw: &'a str,
        destination_raw: &'a str,
    ) -> Self {
        Self {
            mode,
            port,
            source_raw,
            source: PathSpec::parse(source_raw),
            destination_raw,
            destination: PathSpec::parse(destination_raw),
        }
    }
}

/// Carries out a validated request: connection, authentication and streaming the file contents.
pub trait TransferEngine {
    fn transfer(&mut self, request: &TransferRequest<'_>) -> Result<(), ScpError>;
}

/// Engine that only reports what would be transferred.
///
/// There is no SSH backed engine, a request never leaves this process.
pub struct DiagnosticEngine<W: io::Write> {
    out: W,
}

impl<W: io::Write> DiagnosticEngine<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> TransferEngine for DiagnosticEngine<W> {
    fn transfer(&mut self, request: &TransferRequest<'_>) -> Result<(), ScpError> {
        let w = &mut self.out;
        writeln!(w, "SCP demonstration")?;
        writeln!(w, " Using port {}.", request.port)?;
        match request.mode {
            Some(TransferMode::Source) => writeln!(w, " Sourcing a file.")?,
            Some(TransferMode::Sink { target }) => {
                writeln!(w, " Sinking a file to path {target}.")?
            }
            None => (),
        }
        writeln!(w, " Source file path: {}", request.source_raw)?;
        request.source.write_components(w)?;
        writeln!(w, " Destination file path: {}", request.destination_raw)?;
        request.destination.write_components(w)?;
        w.flush()?;
        Ok(())
    }
}
