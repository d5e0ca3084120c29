// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod console_format;
mod json_extract;
mod log_source;
mod report;
mod types;
mod ui;

#[cfg(test)]
mod console_format_test;

use log::{debug, info};
use std::io::{self, IsTerminal};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Pick the log and read it
    let source = match args.log_source() {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };
    let description = source.describe();
    debug!("Reading log from {}", description);

    let text = match source.read_text() {
        Ok(t) => t,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Nothing is printed unless extraction succeeds
    let parsed = match json_extract::extract_last_json_object(&text) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Error parsing JSON from {}: {}", description, e));
            std::process::exit(1);
        }
    };

    let formatted = report::format_report(&parsed);
    if formatted.is_empty() {
        info!("No scored groups in {}", description);
    }

    let stdout = io::stdout();
    let written = if args.json {
        report::export_json_report(&formatted, &description, stdout.lock())
    } else {
        let use_colors = !args.no_color && stdout.is_terminal();
        let mut writer = console_format::ReportWriter::new(stdout, use_colors);
        writer.write_title(&description).and_then(|_| writer.write_report(&formatted.lines))
    };

    if let Err(e) = written {
        ui::print_warning(&format!("Failed to write report: {}", e));
    }
}
