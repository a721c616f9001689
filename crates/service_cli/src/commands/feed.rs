//! Feed command implementation
//!
//! Streams raw generator output for external statistical test suites such as
//! Diehard, as big-endian 64-bit words.

use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use maths_random::RandomSource;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

use super::build_generator;

/// Words written per buffered chunk.
const CHUNK_WORDS: usize = 1024;

/// Run the feed command
///
/// Writes to `output`, or stdout when no path is given, until the sink is
/// closed or `words` words have been written.
pub fn run(config: &CliConfig, output: Option<&Path>, words: Option<u64>) -> Result<()> {
    let rng = build_generator(config)?;
    let written = match output {
        Some(path) => {
            info!("Feeding {} output to {}", config.algorithm, path.display());
            feed(&rng, BufWriter::new(File::create(path)?), words)?
        }
        None => {
            info!("Feeding {} output to stdout", config.algorithm);
            feed(&rng, io::stdout().lock(), words)?
        }
    };
    info!(words = written, "Feed complete");
    Ok(())
}

/// Writes big-endian 64-bit words from `rng` into `sink`.
///
/// Returns the number of whole words accepted. A broken pipe is the normal
/// end of a run and is not an error.
pub fn feed<R, W>(rng: &R, mut sink: W, limit: Option<u64>) -> Result<u64>
where
    R: RandomSource + ?Sized,
    W: Write,
{
    let mut chunk = Vec::with_capacity(CHUNK_WORDS * 8);
    let mut written = 0u64;
    loop {
        let remaining = limit.map_or(CHUNK_WORDS as u64, |limit| limit - written);
        let count = remaining.min(CHUNK_WORDS as u64);
        if count == 0 {
            break;
        }

        chunk.clear();
        for _ in 0..count {
            chunk.extend_from_slice(&rng.next_u64().to_be_bytes());
        }
        match sink.write_all(&chunk) {
            Ok(()) => written += count,
            Err(err) if err.kind() == ErrorKind::BrokenPipe => {
                info!("Sink closed");
                return Ok(written);
            }
            Err(err) => return Err(err.into()),
        }
    }
    match sink.flush() {
        Err(err) if err.kind() != ErrorKind::BrokenPipe => Err(err.into()),
        _ => Ok(written),
    }
}
