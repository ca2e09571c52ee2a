use crate::record::{Record, HEADERS};
use std::io::{self, Write};

fn needs_quotes(cell: &str) -> bool {
    cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

/// Write one CSV row, quoting cells that contain delimiters or quotes.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Emit the full table: fixed header row, then one row per record.
///
/// Flushes before returning so buffered writers surface output errors here
/// instead of discarding them on drop.
pub fn write_table<W: Write>(mut w: W, records: &[Record]) -> io::Result<()> {
    write_row(&mut w, &HEADERS)?;
    for record in records {
        write_row(&mut w, &record.row())?;
    }
    w.flush()
}
