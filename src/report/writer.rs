// src/report/writer.rs
// =============================================================================
// The single owner of the report output.
//
// Every line of the report goes to stdout AND to the --output file. Instead
// of letting several tasks write to the file, one background task owns both
// handles and receives lines over a channel:
//
//   reporter --(mpsc)--> writer task --> stdout
//                                    \-> output file (flushed per line)
//
// Lines therefore never interleave, whatever order results arrive in.
// =============================================================================

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::OutputError;

/// Handle used to send lines to the writer task.
pub struct OutputWriter {
    sender: mpsc::UnboundedSender<String>,
    task: JoinHandle<Result<(), OutputError>>,
}

impl OutputWriter {
    /// Opens (truncates) the output file and starts the writer task.
    ///
    /// Fails before anything is written if the file cannot be created.
    pub fn create(path: &Path, echo_stdout: bool) -> Result<Self, OutputError> {
        let file = File::create(path).map_err(|source| OutputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::spawn(Some(file), echo_stdout))
    }

    /// Starts a writer over an already-open file (or stdout only).
    pub fn spawn(file: Option<File>, echo_stdout: bool) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

        let task = tokio::task::spawn_blocking(move || -> Result<(), OutputError> {
            let mut file = file.map(BufWriter::new);
            let stdout = io::stdout();

            while let Some(line) = receiver.blocking_recv() {
                if echo_stdout {
                    let mut out = stdout.lock();
                    writeln!(out, "{}", line)?;
                    out.flush()?;
                }
                if let Some(file) = file.as_mut() {
                    writeln!(file, "{}", line)?;
                    file.flush()?;
                }
            }
            Ok(())
        });

        Self { sender, task }
    }

    /// Queues one line of output.
    pub fn line(&self, line: impl Into<String>) -> Result<(), OutputError> {
        self.sender.send(line.into()).map_err(|_| OutputError::Closed)
    }

    /// Closes the channel and waits until every queued line is written.
    pub async fn finish(self) -> Result<(), OutputError> {
        drop(self.sender);
        match self.task.await {
            Ok(result) => result,
            Err(join_error) => Err(OutputError::Write(io::Error::new(
                io::ErrorKind::Other,
                join_error,
            ))),
        }
    }
}
