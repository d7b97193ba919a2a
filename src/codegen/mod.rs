//! # Test code generation
//!
//! Turns a `TestRequest` into the source of an equivalent test case without
//! executing anything. Method, auth, accept and body are resolved exactly as
//! for execution, so a generated test sends what `run` would have sent.

mod karate;
mod rest_assured;

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{GeneratedCode, TestRequest};
use crate::error::{GenerationError, RequestError};
use crate::http::request::BuiltRequest;
use crate::json::JsonCodec;

/// Target test framework of the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Java + JUnit 5 + REST Assured.
    #[default]
    RestAssured,
    /// Karate `.feature` file.
    Karate,
}

impl Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dialect::RestAssured => "rest-assured",
            Dialect::Karate => "karate",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeEmitter {
    json: JsonCodec,
}

impl CodeEmitter {
    pub fn new(json: JsonCodec) -> Self {
        Self { json }
    }

    pub fn generate(&self, request: &TestRequest, dialect: Dialect) -> Result<GeneratedCode, GenerationError> {
        let built = BuiltRequest::build(request, self.json).map_err(|err| match err {
            RequestError::InvalidRequest => GenerationError::MissingEndpoint,
        })?;

        let mut source = String::new();
        match dialect {
            Dialect::RestAssured => rest_assured::emit(&mut source, &built)?,
            Dialect::Karate => karate::emit(&mut source, &built)?,
        }

        debug!(%dialect, method = %built.method, bytes = source.len(), "generated test source");
        Ok(GeneratedCode { dialect, source })
    }

    /// Like [`generate`](Self::generate) but never fails: errors come back as
    /// a one-line message in place of the source.
    pub fn generate_or_message(&self, request: &TestRequest, dialect: Dialect) -> Result<String, String> {
        self.generate(request, dialect)
            .map(|code| code.source)
            .map_err(|err| {
                warn!(%dialect, "code generation failed: {err}");
                format!("Failed to generate code: {err}")
            })
    }
}

/// Write each clause that applies on its own line, in order.
fn write_clauses(out: &mut String, indent: &str, clauses: &[Option<String>]) -> fmt::Result {
    use std::fmt::Write;

    for clause in clauses.iter().flatten() {
        writeln!(out, "{indent}{clause}")?;
    }
    Ok(())
}
