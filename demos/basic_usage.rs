//! Basic logger usage example
//!
//! Demonstrates instance and default-logger logging at different levels.
//!
//! Run with: cargo run --example basic_usage

use jagger::prelude::*;
use jagger::{infof, infoln, warning};
use serde::Serialize;

#[derive(Serialize)]
struct StructLog {
    title: &'static str,
    msg: &'static str,
}

fn main() {
    println!("=== Jagger - Basic Usage Example ===\n");

    println!("1. Default logger (stderr, Info and above):");
    jagger::debug("This debug message is hidden");
    jagger::info("This is an info message");
    jagger::warning("This is a warning message");
    jagger::infoj(&StructLog {
        title: "Struct Log",
        msg: "This is Struct Log Message",
    });

    println!("\n2. Named logger with a Warning threshold:");
    let logger = Logger::new("Test");
    logger.set_level(parse_level("Warning"));
    logger.set_flags(Flags::DATE);

    logger.info("info log (hidden)");
    logger.warning("warning log");
    logger.errorf(format_args!("error code {}", 500));

    println!("\n3. Macros:");
    let port = 8080;
    infof!("listening on port {}", port);
    infoln!("accepted", 3, "connections");
    warning!(logger => "disk usage at ", 91, "%");

    println!("\n=== Example completed successfully! ===");

    // Fatal ends the process with exit status 1
    logger.fatal("fatal log");
}
