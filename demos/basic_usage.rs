//! Basic logger usage example
//!
//! Logs a walrus-watching session as text, then recovers from a panic-level
//! entry and logs what it carried.
//!
//! Run with: cargo run --example basic_usage

use rust_structured_logger::prelude::*;
use std::panic::{self, AssertUnwindSafe};

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Basic Usage Example ===\n");

    let log = Logger::builder()
        .level(Level::Debug)
        .output(StdoutSink)
        .formatter(TextFormatter::new().with_timestamp(false))
        .build();

    println!("1. Chained fields at different levels:");
    log.as_debug()
        .with_fields(fields! { "animal" => "walrus", "number" => 8 })
        .write("Started observing beach");
    log.as_info()
        .with_fields(fields! { "animal" => "walrus", "size" => 10 })
        .write("A group of walrus emerges from the ocean");
    log.as_warning()
        .with_fields(fields! { "omg" => true, "number" => 122 })
        .write("The group's number increased tremendously!");
    log.as_debug()
        .with_fields(fields! { "temperature" => -4 })
        .write("Temperature changes");

    println!("\n2. Recovering from a panic-level entry:");
    // Keep the default panic message off the console.
    panic::set_hook(Box::new(|_| {}));
    let recovered = panic::catch_unwind(AssertUnwindSafe(|| {
        log.as_panic()
            .with_fields(fields! { "animal" => "orca", "size" => 9009 })
            .write("It's over 9000!");
    }));
    let _ = panic::take_hook();

    if let Err(payload) = recovered {
        if let Some(entry) = payload
            .downcast_ref::<LoggerError>()
            .and_then(LoggerError::panic_entry)
        {
            log.as_error()
                .with_fields(fields! {
                    "omg" => true,
                    "err_animal" => entry.data()["animal"].clone(),
                    "err_size" => entry.data()["size"].clone(),
                    "err_level" => entry.level().to_str(),
                    "err_message" => entry.message(),
                    "number" => 100,
                })
                .write("The ice breaks!");
        }
    }

    println!("\n3. Switching to JSON:");
    log.set_formatter(JsonFormatter::new());
    log.set_level(Level::Info);
    log.debug("hidden at info level");
    log.with_error(std::io::Error::new(std::io::ErrorKind::Other, "wild walrus"))
        .as_error()
        .write("an error field");

    log.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
