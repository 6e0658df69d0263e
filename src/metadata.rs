use errors::*;
use id3v1::{self, Tag};
use readable;

use std::io::{Read, Seek};
use std::path::Path;
use std::result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    id3v1: Option<Tag>
}

impl Metadata {

    pub fn open<P: AsRef<Path>>(path: P) -> result::Result<Self, ParsingError> {
        let bytes = readable::load(path)?;
        Self::read(&bytes)
    }

    pub fn read(bytes: &[u8]) -> result::Result<Self, ParsingError> {
        let tag = id3v1::decode_from_suffix(bytes)?;
        Ok(Metadata { id3v1: Some(tag) })
    }

    ///
    /// Same as `read`, but only the trailing tag region is read from `input`.
    ///
    pub fn from_reader<R: Read + Seek>(input: R) -> result::Result<Self, ParsingError> {
        let bytes = readable::Readable::new(input).tail_bytes(id3v1::TAG_LENGTH)?;
        Self::read(&bytes)
    }

    pub fn has_v1_tag(&self) -> bool {
        self.id3v1.is_some()
    }

    pub fn v1(&self) -> Option<&Tag> {
        self.id3v1.as_ref()
    }

    pub fn into_v1(self) -> Option<Tag> {
        self.id3v1
    }
}
