//!
//! # Usage
//!
//! This can be used by adding `id3v1tag` to your dependencies in your project's `Cargo.toml`.
//!
//! ```toml
//! [dependencies]
//! id3v1tag = "0.1"
//! ```
//!
//! and this to your crate root:
//!
//! ```rust
//! extern crate id3v1tag;
//! ```
//!
//! # Example: decode a tag from bytes
//!
//! The tag is always the last 128 bytes of the input.
//!
//! ```rust
//! use id3v1tag::id3v1::{self, Version};
//!
//! let mut bytes = vec![0u8; 1024];
//! let tag_start = bytes.len() - 128;
//! bytes[tag_start..tag_start + 3].copy_from_slice(b"TAG");
//! bytes[tag_start + 3..tag_start + 8].copy_from_slice(b"Title");
//! bytes[tag_start + 126] = 7;
//!
//! let tag = id3v1::decode_from_suffix(&bytes).unwrap();
//! assert_eq!("Title", tag.title());
//! assert_eq!(7, tag.track());
//! assert_eq!("ID3v1.1", tag.version().to_string());
//! ```
//!
//! # Example: check a file
//!
//! ```rust,no_run
//! use id3v1tag::metadata::Metadata;
//!
//! let metadata = Metadata::open("./song.mp3").unwrap();
//! if let Some(tag) = metadata.v1() {
//!     println!("{} - {}", tag.artist(), tag.title());
//! }
//! ```
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate serde;

pub mod errors;
pub mod id3v1;
pub mod metadata;
pub mod readable;
mod util;
