#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;
extern crate env_logger;
extern crate id3v1tag;
extern crate serde_json;

use id3v1tag::errors::ParsingError;
use id3v1tag::id3v1::Tag;
use id3v1tag::metadata::Metadata;

use std::{env, process};

#[derive(Serialize)]
struct Report<'a> {
    path: &'a str,
    id3v1: Option<&'a Tag>
}

fn print(path: &str) -> bool {
    let metadata = match Metadata::open(path) {
        Ok(metadata) => Some(metadata),
        Err(ParsingError::BadData(kind)) => {
            debug!("{}: {}", path, kind);
            None
        },
        Err(err) => {
            error!("{}: {}", path, err);
            return false;
        }
    };

    let report = Report {
        path: path,
        id3v1: metadata.as_ref().and_then(|m| m.v1())
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{}", json);
            true
        },
        Err(err) => {
            error!("{}: {}", path, err);
            false
        }
    }
}

fn main() {
    let _ = env_logger::try_init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: id3v1tag <FILE>...");
        process::exit(2);
    }

    let mut ok = true;
    for path in &paths {
        ok = print(path) && ok;
    }

    if !ok {
        process::exit(1);
    }
}
