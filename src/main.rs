//! kml-merge CLI entry point.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = kml_merge::run() {
        eprintln!("error: {}", e.report());
        std::process::exit(1);
    }
}
