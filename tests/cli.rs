extern crate serde_json;
extern crate tempdir;

use std::fs::File;
use std::io::Write;
use std::process::Command;

use tempdir::TempDir;

fn id3v1tag() -> Command {
    Command::new(env!("CARGO_BIN_EXE_id3v1tag"))
}

fn tagged() -> Vec<u8> {
    let mut bytes = vec![0xffu8; 64];
    bytes.extend_from_slice(b"TAG");
    let mut title = b"Title".to_vec();
    title.resize(30, 0);
    bytes.extend(title);
    bytes.extend(vec![0u8; 94]);
    bytes.push(15);
    bytes
}

#[test]
fn cli_usage() {
    let output = id3v1tag().output().unwrap();
    assert_eq!(Some(2), output.status.code());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}

#[test]
fn cli_tagged_and_untagged() {
    let dir = TempDir::new("cli_files").unwrap();
    let tagged_path = dir.path().join("v1.mp3");
    File::create(&tagged_path).unwrap().write_all(&tagged()).unwrap();
    let untagged_path = dir.path().join("empty-meta.mp3");
    File::create(&untagged_path).unwrap().write_all(&[0u8; 256]).unwrap();

    let output = id3v1tag().arg(&tagged_path).arg(&untagged_path).output().unwrap();
    assert_eq!(Some(0), output.status.code());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let reports: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&stdout)
        .into_iter::<serde_json::Value>()
        .map(|v| v.unwrap())
        .collect();
    assert_eq!(2, reports.len());
    assert_eq!("Title", reports[0]["id3v1"]["title"]);
    assert_eq!(15, reports[0]["id3v1"]["genre"]);
    assert!(reports[1]["id3v1"].is_null());
}

#[test]
fn cli_missing_file() {
    let dir = TempDir::new("cli_missing").unwrap();
    let tagged_path = dir.path().join("v1.mp3");
    File::create(&tagged_path).unwrap().write_all(&tagged()).unwrap();

    let output = id3v1tag()
        .arg(dir.path().join("nothing.mp3"))
        .arg(&tagged_path)
        .output()
        .unwrap();
    assert_eq!(Some(1), output.status.code());

    // remaining paths are still reported
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"Title\""));
}
