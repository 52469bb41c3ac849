use crate::core::transform::TransformResult;
use crate::core::types::Field;
use serde::Serialize;
use std::io::{self, Write};

/// Machine-readable rendering of a transform result.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransformReport<'a> {
    Ok {
        text: &'a str,
    },
    Invalid {
        message: String,
        fields: &'static [Field],
    },
}

impl<'a> From<&'a TransformResult> for TransformReport<'a> {
    fn from(result: &'a TransformResult) -> Self {
        match result {
            Ok(text) => TransformReport::Ok {
                text: text.as_str(),
            },
            Err(error) => TransformReport::Invalid {
                message: error.message(),
                fields: error.fields(),
            },
        }
    }
}

/// Result text on `out`; message and flag hint on `err`.
pub fn write_text(
    result: &TransformResult,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    match result {
        Ok(text) => writeln!(out, "{}", text),
        Err(error) => {
            writeln!(err, "{}", error)?;
            writeln!(err, "hint: check {}", error.flag_hint())
        }
    }
}

/// The whole report as one JSON line on `out`.
pub fn write_json(result: &TransformResult, out: &mut dyn Write) -> io::Result<()> {
    let report = TransformReport::from(result);
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)
}
