//! Validates PaintSaveFile documents.
//!
//! Usage: `paint-check [--strict] [--print] <file>...`

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use paint_save::{Document, PaintFileParser, ParserConfig};

fn check(parser: &mut PaintFileParser, path: &str, print: bool) -> bool {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::error!("Failed to open {path}: {err}");
            eprintln!("{path}: {err}");
            return false;
        }
    };

    let mut document = Document::new();
    if !parser.parse(BufReader::new(file), &mut document) {
        eprintln!("{path}: {}", parser.error_message());
        return false;
    }

    if print {
        print!("{}", document.report());
    } else {
        println!("{path}: ok, {} shapes", document.len());
    }
    true
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut config = ParserConfig::default();
    let mut print = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--strict" => config = ParserConfig::strict(),
            "--print" => print = true,
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        eprintln!("usage: paint-check [--strict] [--print] <file>...");
        return ExitCode::from(2);
    }

    let mut parser = PaintFileParser::with_config(config);
    let mut ok = true;
    for path in &paths {
        ok &= check(&mut parser, path, print);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
