use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{RewriteError, RewriteResult};
use crate::payload::{is_truthy, scale_payload};

pub const PAYLOAD_FIELD: &str = "payload";

const INDENT: &[u8] = b"    ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureReport {
    pub path: PathBuf,
    pub records: usize,
    pub scaled: usize,
}

/// Rewrites every record of a parsed fixture in place and returns how many
/// payloads were scaled.
pub fn rewrite_records(document: &mut Value) -> RewriteResult<usize> {
    let records = document.as_array_mut().ok_or(RewriteError::NotAnArray)?;

    let mut scaled = 0;
    for (index, record) in records.iter_mut().enumerate() {
        let record = record.as_object_mut().ok_or(RewriteError::InvalidRecord {
            index,
            reason: "record is not an object",
        })?;
        let Some(payload) = record.get_mut(PAYLOAD_FIELD) else {
            continue;
        };
        if !is_truthy(Some(&*payload)) {
            continue;
        }
        let payload = payload
            .as_object_mut()
            .ok_or(RewriteError::InvalidRecord {
                index,
                reason: "payload is not an object",
            })?;
        if scale_payload(payload, index)? {
            debug!(index, "scaled payload");
            scaled += 1;
        }
    }
    Ok(scaled)
}

pub fn to_pretty_json(document: &Value) -> RewriteResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(out)
}

pub fn rewrite_fixture(path: &Path) -> RewriteResult<FixtureReport> {
    rewrite_fixture_inner(path).map_err(|error| error.in_fixture(path))
}

fn rewrite_fixture_inner(path: &Path) -> RewriteResult<FixtureReport> {
    let bytes = fs::read(path)?;
    let mut document: Value = serde_json::from_slice(&bytes)?;

    let scaled = rewrite_records(&mut document)?;
    let records = document.as_array().map_or(0, Vec::len);

    fs::write(path, to_pretty_json(&document)?)?;
    info!(path = %path.display(), records, scaled, "rewrote fixture");

    Ok(FixtureReport {
        path: path.to_path_buf(),
        records,
        scaled,
    })
}
