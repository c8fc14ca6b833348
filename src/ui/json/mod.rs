//! NDJSON output for `--json` mode.
//!
//! One JSON object per line on stdout. Child process output never lands
//! here; it is redirected to stderr while `--json` is active.

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

/// Write a single typed event as one line.
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
