//! ReadScansUseCase: decodes scans and writes them out one per line.
//!
//! Each decoded line is written followed by `\n` and flushed immediately, so
//! a consumer reading the output line-by-line (a pipe, a systemd journal, a
//! `while read` loop) sees every scan as soon as it completes.
//!
//! The first failure ends the run.  There is no retry of a whole line: a
//! decode error discards the partial scan and is returned to the caller.

use std::io::{self, Write};

use barcode_core::{DecodeError, EventSource, LineDecoder};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::ScanMode;

/// Error type for the read-scans use case.
#[derive(Debug, Error)]
pub enum ReadScansError {
    #[error("failed to decode scan: {0}")]
    Decode(#[from] DecodeError),
    #[error("failed to write scan to output: {0}")]
    Output(#[source] io::Error),
}

/// The Read Scans use case.
///
/// Pulls lines from a [`LineDecoder`] and writes them to `output`.
pub struct ReadScansUseCase<S, W> {
    decoder: LineDecoder<S>,
    output: W,
    mode: ScanMode,
    lines_written: u64,
}

impl<S: EventSource, W: Write> ReadScansUseCase<S, W> {
    /// Creates a new use case.
    pub fn new(decoder: LineDecoder<S>, output: W, mode: ScanMode) -> Self {
        Self {
            decoder,
            output,
            mode,
            lines_written: 0,
        }
    }

    /// Decodes and writes lines until `mode` is satisfied.
    ///
    /// In [`ScanMode::Single`] this returns after the first line; in
    /// [`ScanMode::Follow`] it only returns on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ReadScansError::Decode`] if decoding fails and
    /// [`ReadScansError::Output`] if writing or flushing fails.
    pub fn run(&mut self) -> Result<u64, ReadScansError> {
        loop {
            self.read_one()?;
            if self.mode == ScanMode::Single {
                return Ok(self.lines_written);
            }
        }
    }

    fn read_one(&mut self) -> Result<(), ReadScansError> {
        let line = self.decoder.next_line().map_err(|e| {
            error!("scan decoding stopped: {e}");
            ReadScansError::Decode(e)
        })?;
        self.emit(&line).map_err(|e| {
            error!("failed to write scan: {e}");
            ReadScansError::Output(e)
        })?;
        self.lines_written += 1;
        info!(len = line.len(), lines = self.lines_written, "scan decoded");
        debug!(line = %line, decoded = self.decoder.lines_decoded(), "scan contents");
        Ok(())
    }

    /// Returns the number of lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Consumes the use case and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use barcode_core::source::mock::ScriptedEventSource;
    use barcode_core::{EventSourceError, InputEvent, KeyCode};

    use super::*;

    fn scans(lines: &[&[KeyCode]]) -> ScriptedEventSource {
        let mut source = ScriptedEventSource::new();
        for keys in lines {
            for &key in *keys {
                source.push_keystroke(key);
            }
            source.push_keystroke(KeyCode::Enter);
        }
        source
    }

    /// Writer that records how often it was flushed.
    #[derive(Default)]
    struct FlushCountingWriter {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    /// Writer that always fails.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_single_mode_writes_one_line_and_stops() {
        // Arrange
        let source = scans(&[&[KeyCode::Digit1, KeyCode::Digit2], &[KeyCode::Digit3]]);
        let mut use_case =
            ReadScansUseCase::new(LineDecoder::new(source), Vec::new(), ScanMode::Single);

        // Act
        let written = use_case.run().expect("one scan is available");

        // Assert
        assert_eq!(written, 1);
        assert_eq!(use_case.into_output(), b"12\n");
    }

    #[test]
    fn test_each_line_is_flushed() {
        let source = scans(&[&[KeyCode::KeyA]]);
        let mut use_case = ReadScansUseCase::new(
            LineDecoder::new(source),
            FlushCountingWriter::default(),
            ScanMode::Single,
        );

        use_case.run().expect("run");

        let output = use_case.into_output();
        assert_eq!(output.data, b"a\n");
        assert_eq!(output.flushes, 1);
    }

    #[test]
    fn test_follow_mode_writes_until_the_source_closes() {
        // Arrange
        let source = scans(&[&[KeyCode::KeyO, KeyCode::KeyK], &[KeyCode::Digit7]]);
        let mut use_case =
            ReadScansUseCase::new(LineDecoder::new(source), Vec::new(), ScanMode::Follow);

        // Act
        let result = use_case.run();

        // Assert: both lines made it out before the end of stream surfaced
        assert!(matches!(
            result,
            Err(ReadScansError::Decode(DecodeError::UnexpectedEndOfStream))
        ));
        assert_eq!(use_case.lines_written(), 2);
        assert_eq!(use_case.into_output(), b"ok\n7\n");
    }

    #[test]
    fn test_decode_failure_writes_nothing() {
        let mut source = ScriptedEventSource::new();
        source
            .push_event(InputEvent::release(KeyCode::Digit1))
            .push_error(EventSourceError::Malformed {
                expected: 24,
                actual: 3,
            });
        let mut use_case =
            ReadScansUseCase::new(LineDecoder::new(source), Vec::new(), ScanMode::Single);

        let result = use_case.run();

        assert!(matches!(
            result,
            Err(ReadScansError::Decode(DecodeError::MalformedEvent { .. }))
        ));
        assert!(use_case.into_output().is_empty());
    }

    #[test]
    fn test_output_failure_is_reported() {
        let source = scans(&[&[KeyCode::Digit9]]);
        let mut use_case =
            ReadScansUseCase::new(LineDecoder::new(source), BrokenWriter, ScanMode::Single);

        let result = use_case.run();

        match result {
            Err(ReadScansError::Output(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected output error, got {other:?}"),
        }
        assert_eq!(use_case.lines_written(), 0);
    }

    #[test]
    fn test_truncated_scan_is_written_without_error() {
        let mut source = ScriptedEventSource::new();
        for _ in 0..10 {
            source.push_keystroke(KeyCode::Digit5);
        }
        source.push_keystroke(KeyCode::Enter);
        let decoder = LineDecoder::with_capacity(source, 4).expect("capacity 4 is valid");
        let mut use_case = ReadScansUseCase::new(decoder, Vec::new(), ScanMode::Single);

        use_case.run().expect("truncation is not an error");

        assert_eq!(use_case.into_output(), b"555\n");
    }
}
