// Hop extraction from traceroute text
//   - Hop: one slot of the hop sequence, either an address or a blocked
//     header slot
//   - parse_line / read_hops: classify lines, "*" hops contribute nothing
//   - edge: adjacent-pair emission for graph output

pub mod edge;
pub mod error;

pub use edge::{edges, render};
pub use error::{HopError, HopResult};

use std::io::BufRead;

const HEADER: &str = "traceroute";
const STAR: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hop {
    // header line, keeps its slot but never pairs
    Blocked,
    Address(String),
}

impl Hop {
    pub fn address(&self) -> Option<&str> {
        match self {
            Hop::Address(a) => Some(a),
            Hop::Blocked => None,
        }
    }
}

/// Classifies one line. `n` is the 1-based line number used in errors.
///
/// Fields are split on single spaces after trimming, so runs of spaces
/// produce empty fields. Lines with fewer than three fields are rejected
/// before anything else is looked at, header lines included.
pub fn parse_line(n: usize, line: &str) -> HopResult<Option<Hop>> {
    let f: Vec<&str> = line.trim().split(' ').collect();
    if f.len() < 3 {
        return Err(HopError::MalformedLine {
            line: n,
            tokens: f.len(),
        });
    }
    if f[2] == STAR {
        return Ok(None);
    }
    if f[0] == HEADER {
        return Ok(Some(Hop::Blocked));
    }
    Ok(Some(Hop::Address(f[2].to_string())))
}

/// Reads the whole stream into a hop sequence.
pub fn read_hops<R: BufRead>(reader: R) -> HopResult<Vec<Hop>> {
    let mut hops = Vec::new();
    let mut stars = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(i + 1, &line)? {
            Some(hop) => {
                log::debug!("line {}: {:?}", i + 1, hop);
                hops.push(hop);
            }
            None => {
                log::debug!("line {}: unresolved", i + 1);
                stars += 1;
            }
        }
    }

    log::info!(
        "read {} hops ({} blocked), skipped {} unresolved",
        hops.len(),
        hops.iter().filter(|h| **h == Hop::Blocked).count(),
        stars
    );
    Ok(hops)
}
