use std::fmt::{self, Write};

use crate::http::request::{BuiltRequest, ContentType};

use super::write_clauses;

const IMPORTS: &str = "\
import io.restassured.RestAssured;
import io.restassured.http.ContentType;
import org.junit.jupiter.api.Test;

import static io.restassured.RestAssured.given;
";

const CHAIN_INDENT: &str = "            ";

pub(super) fn emit(out: &mut String, request: &BuiltRequest) -> fmt::Result {
    out.push_str(IMPORTS);
    writeln!(out)?;
    writeln!(out, "public class ApiTest {{")?;
    writeln!(out)?;
    writeln!(out, "    @Test")?;
    writeln!(out, "    public void test{}Request() {{", request.method.as_str())?;
    writeln!(out, "        RestAssured.baseURI = {};", java_string(&request.url))?;
    writeln!(out)?;
    writeln!(out, "        given()")?;

    let content_type = match request.content_type {
        ContentType::None => None,
        ContentType::Json => Some(".contentType(ContentType.JSON)".to_string()),
        ContentType::Text => Some(".contentType(ContentType.TEXT)".to_string()),
    };
    write_clauses(
        out,
        CHAIN_INDENT,
        &[
            request.auth.as_ref().map(|auth| {
                format!(
                    ".auth().basic({}, {})",
                    java_string(&auth.username),
                    java_string(&auth.password)
                )
            }),
            request.accept.as_deref().map(|accept| format!(".accept({})", java_string(accept))),
            content_type,
            request.body.as_deref().map(|body| format!(".body({})", java_string(body))),
        ],
    )?;

    writeln!(out, "        .when()")?;
    writeln!(out, "{CHAIN_INDENT}.{}()", request.method.as_lower())?;
    writeln!(out, "        .then()")?;
    writeln!(out, "{CHAIN_INDENT}.statusCode(200)")?;
    writeln!(out, "{CHAIN_INDENT}.log().all();")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")
}

/// Quote `value` as a Java string literal.
fn java_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
