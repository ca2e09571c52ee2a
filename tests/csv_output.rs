use ssm_report::csv::{write_row, write_table};
use ssm_report::extract::parse_report;
use ssm_report::record::Record;
use std::io::{self, BufWriter, Write};

/// Accepts writes but fails on flush, like a full output device behind a
/// buffered writer.
struct FullDevice;

impl Write for FullDevice {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::StorageFull, "device full"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::StorageFull, "device full"))
    }
}

#[test]
fn empty_report_emits_header_row_only() {
    let records = parse_report("no sections here");
    let mut buf = Vec::new();
    write_table(&mut buf, &records).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "#,Instance ID,Instance Name,OS Type,Status,Uptime,Falcon Service,Pending Updates,Hostname,Kernel,OS\n"
    );
}

#[test]
fn cells_with_commas_and_quotes_are_quoted() {
    let mut buf = Vec::new();
    write_row(&mut buf, &["a", "b,c", "say \"hi\"", "line\nbreak"]).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "a,\"b,c\",\"say \"\"hi\"\"\",\"line\nbreak\"\n");
}

#[test]
fn joined_pending_updates_survive_quoting() {
    let mut rec = Record::new("1", "i-0789aaaa", "dc1");
    rec.pending_updates = "KB5001, KB5002".to_string();

    let mut buf = Vec::new();
    write_table(&mut buf, &[rec]).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\"KB5001, KB5002\""));
}

#[test]
fn unwritable_output_surfaces_an_error() {
    // The table is small enough to sit in BufWriter's buffer, so the failure
    // only shows up at flush time; write_table must not swallow it.
    let rec = Record::new("1", "i-0123abcd", "web1");
    let result = write_table(BufWriter::new(FullDevice), &[rec]);
    assert!(result.is_err());
}

#[test]
fn one_line_per_record_plus_header() {
    let report = "INSTANCE #1: i-0123abcd (web1)\nSkipped\n====================\nINSTANCE #2: i-0456efgh (web2)\nERROR\n";
    let records = parse_report(report);
    let mut buf = Vec::new();
    write_table(&mut buf, &records).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out.lines().count(), 3);
}
