use std::fmt;
use std::io::{self, Write};

use reqwest::Method;
use serde_json::Value;
use tracing::warn;

use crate::error::FetchError;

/// Console line for one finished request.
#[derive(Debug)]
pub struct Report {
    method: Method,
    outcome: Result<Value, FetchError>,
}

impl Report {
    pub fn new(method: Method, outcome: Result<Value, FetchError>) -> Self {
        Report { method, outcome }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn outcome(&self) -> &Result<Value, FetchError> {
        &self.outcome
    }

    /// Successes go to stdout, failures to stderr.
    pub fn emit(&self) {
        let written = self.emit_to(&mut io::stdout().lock(), &mut io::stderr().lock());
        if let Err(e) = written {
            warn!(error = %e, "failed to write report");
        }
    }

    /// Writes the line to `out` on success or to `err` on failure.
    pub fn emit_to(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        match self.outcome {
            Ok(_) => writeln!(out, "{self}"),
            Err(_) => writeln!(err, "{self}"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(data) => write!(f, "{} Response: {}", self.method, data),
            Err(e) => write!(f, "{} Error: {}", self.method, e),
        }
    }
}
