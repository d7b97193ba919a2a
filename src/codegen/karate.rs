use std::fmt::Write;

use crate::error::GenerationError;
use crate::http::request::BuiltRequest;

use super::write_clauses;

const STEP_INDENT: &str = "    ";
const DOCSTRING: &str = "\"\"\"";

pub(super) fn emit(out: &mut String, request: &BuiltRequest) -> Result<(), GenerationError> {
    if request.body.as_deref().is_some_and(|body| body.contains(DOCSTRING)) {
        return Err(GenerationError::UnembeddableBody(DOCSTRING, "Karate"));
    }

    writeln!(out, "Feature: {} {}", request.method, request.url)?;
    writeln!(out)?;
    writeln!(out, "  Scenario: {} request returns 200", request.method)?;
    writeln!(out, "{STEP_INDENT}* url {}", quoted(&request.url))?;

    let content_type = request
        .content_type
        .mime()
        .map(|mime| format!("* header Content-Type = {}", quoted(mime)));
    write_clauses(
        out,
        STEP_INDENT,
        &[
            request.auth.as_ref().map(|auth| {
                format!(
                    "* header Authorization = call read('classpath:basic-auth.js') {{ username: {}, password: {} }}",
                    quoted(&auth.username),
                    quoted(&auth.password)
                )
            }),
            request.accept.as_deref().map(|accept| format!("* header Accept = {}", quoted(accept))),
            content_type,
        ],
    )?;

    if let Some(body) = &request.body {
        writeln!(out, "{STEP_INDENT}* request")?;
        writeln!(out, "{STEP_INDENT}  {DOCSTRING}")?;
        for line in body.lines() {
            writeln!(out, "{STEP_INDENT}  {line}")?;
        }
        writeln!(out, "{STEP_INDENT}  {DOCSTRING}")?;
    }

    writeln!(out, "{STEP_INDENT}* method {}", request.method.as_lower())?;
    writeln!(out, "{STEP_INDENT}* status 200")?;
    writeln!(out, "{STEP_INDENT}* print response")?;
    Ok(())
}

/// Single-quoted Karate (JavaScript) string.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
