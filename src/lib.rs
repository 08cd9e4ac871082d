pub mod ipv4;
pub mod pool;
pub mod split;

use crate::ipv4::{ParseMode, PARTS};
use crate::pool::Ipv4Pool;
use crate::split::split;
use log::{debug, warn};
use std::io::BufRead;

/// Read one address per line (first `sep`-separated field), sort descending
/// and filter. The returned pool renders the whole output.
pub fn process<R: BufRead>(reader: R, sep: char, mode: ParseMode) -> Result<Ipv4Pool, String> {
    let mut pool = Ipv4Pool::new();
    for (n, line) in reader.split(b'\n').enumerate() {
        let mut line = line.map_err(|e| format!("line {}: {}", n + 1, e))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        // only the first field is parsed, undecodable bytes elsewhere don't matter
        let line = String::from_utf8_lossy(&line);
        let fields = split(&line, sep);
        let parts = split(fields[0], '.');
        if let Some(msg) = part_count_warning(mode, &parts) {
            warn!("line {}: '{}' {}", n + 1, fields[0], msg);
        }
        pool.add_with(&parts, mode)
            .map_err(|e| format!("line {}: '{}': {}", n + 1, fields[0], e))?;
    }
    debug!("read {} addresses", pool.len());
    pool.sort();
    pool.filter();
    debug!(
        "filters matched {} / {} / {}",
        pool.filter_1.len(),
        pool.filter_2.len(),
        pool.filter_3.len()
    );
    Ok(pool)
}

fn part_count_warning(mode: ParseMode, parts: &[&str]) -> Option<String> {
    match mode {
        ParseMode::Lenient if parts.len() != PARTS => {
            Some(format!("has {} parts, expected {}", parts.len(), PARTS))
        }
        _ => None,
    }
}
