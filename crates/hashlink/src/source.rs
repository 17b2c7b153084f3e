//! Payload sources: finite, ordered sequences of byte payloads to append.

use std::io::{self, BufRead};

/// Built-in sample payloads, one record per line.
pub const SAMPLE_PAYLOADS: [&str; 8] = [
    "every record remembers the one before it",
    "and every digest seals the words inside",
    "change a letter in the middle",
    "and the next link no longer fits",
    "the head may still look healthy",
    "but the chain is checked from the start",
    "so one broken record",
    "breaks the whole chain",
];

/// Read payloads from a line-oriented reader.
///
/// Each line becomes one payload, in order. Lines are raw bytes and need not
/// be UTF-8. A trailing `\r` is stripped. Blank lines are kept as empty
/// payloads so the ledger's empty-payload policy decides what happens to them.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<Vec<u8>>> {
    reader
        .split(b'\n')
        .map(|line| {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(line)
        })
        .collect()
}
