use crate::record::{OsType, Record, Status, NA};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

// ESC '[' <parameter bytes> <intermediate bytes> <final byte @-~>
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]").expect("ANSI pattern"));

static SECTION_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"={10,}").expect("delimiter pattern"));

static INSTANCE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"INSTANCE\s+#(\d+):\s+(i-[\w\d]+) \((.*?)\)").expect("header pattern")
});

static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\s*([\s\S]+?)\s*```").expect("fenced block pattern"));

/// Remove ANSI terminal escape sequences. Reports captured from colorized
/// terminal output would otherwise break the header match.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Parse a full report into records, sorted and ready to emit.
///
/// Chunks without an instance header (preambles, trailing text) are dropped
/// without comment. Per-section problems never abort the batch.
pub fn parse_report(text: &str) -> Vec<Record> {
    let clean = strip_ansi(text);

    let mut records: Vec<Record> = SECTION_DELIMITER
        .split(&clean)
        .filter_map(parse_section)
        .collect();

    sort_records(&mut records);
    records
}

/// Order by (status, OS type, instance id), ascending string comparison on
/// each position.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

fn parse_section(section: &str) -> Option<Record> {
    let caps = INSTANCE_HEADER.captures(section)?;
    let mut record = Record::new(&caps[1], &caps[2], &caps[3]);

    record.status = classify(section);
    debug!(
        instance = %record.instance_id,
        status = record.status.as_str(),
        "section classified"
    );

    if record.status == Status::Success {
        apply_payload(section, &mut record);
    }

    Some(record)
}

/// Fixed priority: Skipped, then Dry-run, then ERROR, else Success. Plain
/// substring search; the first match wins and the rest are never checked.
fn classify(section: &str) -> Status {
    if section.contains("Skipped") {
        Status::Skipped
    } else if section.contains("Dry-run") {
        Status::DryRun
    } else if section.contains("ERROR") {
        Status::Error
    } else {
        Status::Success
    }
}

/// Look for the first fenced `json` block and fill the OS-specific fields.
/// No block at all leaves a plain Success record with defaults.
fn apply_payload(section: &str, record: &mut Record) {
    let Some(caps) = JSON_BLOCK.captures(section) else {
        return;
    };

    let payload: Value = match serde_json::from_str(&caps[1]) {
        Ok(v) => v,
        Err(err) => {
            warn!(instance = %record.instance_id, "invalid JSON payload: {err}");
            record.status = Status::InvalidJson;
            return;
        }
    };

    if payload.get("hostname").is_some() {
        record.os_type = OsType::Linux;
        record.hostname = string_field(&payload, "hostname");
        record.kernel = string_field(&payload, "kernel");
        record.os_name = string_field(&payload, "os");
    } else if payload.get("Uptime").is_some() {
        record.os_type = OsType::Windows;
        record.uptime = string_field(&payload, "Uptime");
        record.falcon_service = string_field(&payload, "FalconService");
        record.pending_updates = join_updates(&payload);
    }
    // Parsed but matched neither schema: OS type stays Unknown, not an error.
}

fn string_field(payload: &Value, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(NA)
        .to_string()
}

fn join_updates(payload: &Value) -> String {
    match payload.get("PendingUpdates") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| match v.as_str() {
                Some(s) => s.to_string(),
                None => v.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => NA.to_string(),
    }
}
