extern crate tempdir;

extern crate id3v1tag;

use std::fs::File;
use std::io::{Cursor, Write};

use id3v1tag::readable::{self, Readable};
use tempdir::TempDir;

#[test]
fn readable_load() {
    let dir = TempDir::new("readable_load").unwrap();
    let path = dir.path().join("file1.txt");
    File::create(&path).unwrap().write_all(b"abcdefghij").unwrap();

    assert_eq!(b"abcdefghij".to_vec(), readable::load(&path).unwrap());

    let mut readable = readable::factory::from_path(&path).unwrap();
    assert_eq!(10, readable.len().unwrap());
    assert_eq!(b"fghij".to_vec(), readable.tail_bytes(5).unwrap());
}

#[test]
fn readable_load_missing() {
    let dir = TempDir::new("readable_missing").unwrap();
    let err = readable::load(dir.path().join("file1.txt")).unwrap_err();
    assert_eq!(std::io::ErrorKind::NotFound, err.kind());
}

#[test]
fn readable_cursor() {
    let mut readable = Readable::new(Cursor::new(vec![1u8, 2, 3]));
    assert_eq!(vec![1u8, 2, 3], readable.tail_bytes(128).unwrap());
    assert_eq!(1, readable.position(1).unwrap());
    assert_eq!(vec![2u8, 3], readable.all_bytes().unwrap());
}
