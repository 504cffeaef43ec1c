//! Concurrent logging example
//!
//! Many threads share one logger, one pre-built entry and the global
//! default logger.
//!
//! Run with: cargo run --example concurrent_logging 2> /dev/null

use rust_structured_logger::{global, prelude::*};
use std::io;
use std::thread;

const THREADS: usize = 100;
const ITERATIONS: usize = 1000;

fn main() -> Result<()> {
    let logger = Logger::builder()
        .level(Level::Info)
        .output(StderrSink)
        .formatter(JsonFormatter::new())
        .build();
    let entry = logger.with_field("sample", "nah");

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = logger.clone();
            let entry = entry.clone();
            thread::spawn(move || {
                for _ in 0..=ITERATIONS {
                    logger.infof(format_args!("Hello {}", "XitoniX"));
                    global::info("A message from the exported functions");
                    entry
                        .as_error()
                        .with_error(io::Error::new(
                            io::ErrorKind::Other,
                            "something wrong happened",
                        ))
                        .writef(format_args!("Hi..."));
                    entry.as_debug().with_field("test", "test").write("Do not log me");
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| LoggerError::other("logging thread panicked"))?;
    }

    let metrics = logger.metrics();
    println!(
        "Done: {} entries written, {} failures",
        metrics.entries_written(),
        metrics.total_failures()
    );
    Ok(())
}
