//! Minimal typed view of the wrapped CLI's `--json` responses.
//!
//! Only the fields this crate consumes are modelled. Everything else is
//! carried through untouched as a `serde_json::Value`.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::JobHandle;
use crate::domain::error::{DomainError, DomainResult};

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(default)]
    result: Option<CreateResult>,
}

#[derive(Debug, Deserialize)]
struct CreateResult {
    #[serde(rename = "jobId", default)]
    job_id: Option<Value>,
    #[serde(rename = "scratchOrgInfo", default)]
    scratch_org_info: Option<ScratchOrgInfo>,
}

#[derive(Debug, Deserialize)]
struct ScratchOrgInfo {
    #[serde(rename = "Id", default)]
    id: Option<Value>,
}

/// Render a scalar the way `jq -r` would; null stays the null marker.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(crate::domain::entities::NULL_MARKER.to_string()),
        _ => None,
    }
}

/// Locate the JSON object inside stdout that may carry banner lines.
///
/// Tries each `{` in turn and returns the first complete object that parses,
/// so braces in a banner line are skipped.
pub fn embedded_json(raw: &str) -> Option<&str> {
    raw.match_indices('{').find_map(|(start, _)| {
        let tail = &raw[start..];
        let mut stream = serde_json::Deserializer::from_str(tail).into_iter::<Value>();
        match stream.next() {
            Some(Ok(Value::Object(_))) => Some(&tail[..stream.byte_offset()]),
            _ => None,
        }
    })
}

/// Extract the async job identifier from an `org create scratch --async --json` response.
///
/// Reads `result.jobId`, falling back to `result.scratchOrgInfo.Id`.
pub fn extract_job_handle(raw: &str) -> DomainResult<JobHandle> {
    let no_job_id = || DomainError::NoJobId { details: None }.with_details(raw.trim());

    let body = embedded_json(raw).ok_or_else(no_job_id)?;
    let response: CreateResponse = serde_json::from_str(body).map_err(|_| no_job_id())?;

    let result = response.result.ok_or_else(no_job_id)?;
    let id = result
        .job_id
        .as_ref()
        .filter(|v| !v.is_null())
        .or_else(|| result.scratch_org_info.as_ref().and_then(|i| i.id.as_ref()))
        .and_then(scalar_text);

    JobHandle::parse(id.as_deref()).map_err(|_| no_job_id())
}

/// Parse a complete stdout capture as exactly one JSON document.
pub fn parse_document(raw: &str, context: &str) -> DomainResult<Value> {
    serde_json::from_str(raw.trim()).map_err(|_| {
        DomainError::InvalidJson {
            context: context.to_string(),
            details: None,
        }
        .with_details(raw.trim())
    })
}

/// Compact single-line rendering, key order preserved.
pub fn compact(document: &Value) -> String {
    document.to_string()
}
