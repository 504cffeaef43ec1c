//! File logging example
//!
//! Configures a logger from JSON, writes to a file and forwards a
//! writer-based producer through the stream adapter.
//!
//! Run with: cargo run --example file_logging

use rust_structured_logger::prelude::*;
use std::io::Write;

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{ "level": "debug", "format": "json", "timestamp_format": "iso8601" }"#,
    )?;
    let logger = config.build();
    let file = FileSink::new("application.log")?;
    println!("1. Logging to {}", file.path().display());
    logger.set_output(file);

    let app = logger.with_field("component", "startup");
    app.as_info().write("Application started");
    app.as_debug().write("Loading configuration...");
    app.as_warning()
        .with_field("option", "cache_size")
        .write("Using default settings for some options");

    println!("2. Processing items:");
    for i in 1..=5 {
        let item = logger.with_fields(fields! { "item" => i, "of" => 5 });
        item.as_info().write("Processing item");
        if i == 3 {
            item.as_warning().write("Item took longer than expected");
        }
    }

    println!("3. Forwarding a line-oriented producer:");
    let mut producer = logger.with_field("source", "child").writer_level(Level::Info)?;
    writeln!(producer, "child output line 1")?;
    writeln!(producer, "child output line 2")?;
    producer.close()?;

    logger.flush()?;
    println!(
        "\n{} entries written to application.log",
        logger.metrics().entries_written()
    );
    Ok(())
}
