//! `find(1)`-backed enumerator.

use super::{sanitize, Enumerator};
use crate::model::EnumerationError;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};

/// Program used when none is configured.
pub const DEFAULT_FIND_PROGRAM: &str = "find";

/// Runs `find <root> ( -type f -o -type d ) -iname *<pattern>*`.
///
/// Arguments go straight to the process, never through a shell. The
/// name match is case-insensitive, unlike the in-list filter.
#[derive(Debug, Clone)]
pub struct FindEnumerator {
    program: PathBuf,
    root: PathBuf,
}

impl FindEnumerator {
    /// Search below `root` with the system `find`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            program: PathBuf::from(DEFAULT_FIND_PROGRAM),
            root: root.into(),
        }
    }

    /// Use a different executable in place of `find`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, pattern: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.root)
            .args(["(", "-type", "f", "-o", "-type", "d", ")", "-iname"])
            .arg(format!("*{pattern}*"))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        cmd
    }
}

impl Enumerator for FindEnumerator {
    fn enumerate(&mut self, pattern: &str) -> Result<Vec<String>, EnumerationError> {
        let mut child =
            self.command(pattern)
                .spawn()
                .map_err(|source| EnumerationError::Spawn {
                    program: self.program.clone(),
                    source,
                })?;

        let Some(stdout) = child.stdout.take() else {
            reap(&mut child);
            return Err(EnumerationError::NoOutput);
        };

        match read_lines(stdout) {
            Ok(lines) => {
                let status = child.wait()?;
                debug!(?status, count = lines.len(), "find finished");
                Ok(lines)
            }
            Err(err) => {
                warn!(error = %err, "reading find output failed");
                reap(&mut child);
                Err(err.into())
            }
        }
    }
}

/// Kill and wait so no zombie is left behind.
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Read newline-separated output, sanitizing each line and dropping empties.
///
/// The reader is consumed and dropped (closing the pipe) before returning.
pub fn read_lines<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut lines = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if let Some(line) = sanitize(&buf) {
            lines.push(line);
        }
    }

    Ok(lines)
}
