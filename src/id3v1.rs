//MIT License
//
//Copyright (c) [2017] [Mark Han]
//
//Permission is hereby granted, free of charge, to any person obtaining a copy
//of this software and associated documentation files (the "Software"), to deal
//in the Software without restriction, including without limitation the rights
//to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//copies of the Software, and to permit persons to whom the Software is
//furnished to do so, subject to the following conditions:
//
//The above copyright notice and this permission notice shall be included in all
//copies or substantial portions of the Software.
//
//THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//SOFTWARE.

use errors::*;
use util;

use std::fmt;
use std::num::NonZeroU8;
use std::result;

/// id3v1 tag length is 128 bytes.
pub const TAG_LENGTH: usize = 128;
pub const TAG_MARKER: &'static [u8; 3] = b"TAG";

const TITLE: (usize, usize) = (3, 33);
const ARTIST: (usize, usize) = (33, 63);
const ALBUM: (usize, usize) = (63, 93);
const YEAR: (usize, usize) = (93, 97);
const COMMENT: (usize, usize) = (97, 127);
const GENRE: usize = 127;

///
/// Sub-version of a tag.
///
/// `WithTrack` only exists with a non zero track number, so a tag without a track
/// can never claim to be v1.1.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    WithoutTrack,
    WithTrack(NonZeroU8)
}

impl Version {
    pub fn track(&self) -> u8 {
        match *self {
            Version::WithoutTrack => 0,
            Version::WithTrack(track) => track.get()
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Version::WithoutTrack => write!(f, "ID3v1.0"),
            Version::WithTrack(_) => write!(f, "ID3v1.1")
        }
    }
}

// @see http://id3.org/ID3v1
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    title: String,
    artist: String,
    album: String,
    year: String,
    comment: String,
    genre: u8,
    version: Version
}

impl Tag {
    pub fn title(&self) -> &str {
        self.title.as_ref()
    }

    pub fn artist(&self) -> &str {
        self.artist.as_ref()
    }

    pub fn album(&self) -> &str {
        self.album.as_ref()
    }

    pub fn year(&self) -> &str {
        self.year.as_ref()
    }

    pub fn comment(&self) -> &str {
        self.comment.as_ref()
    }

    /// 0 when the tag has no track number.
    pub fn track(&self) -> u8 {
        self.version.track()
    }

    /// Raw genre index, not resolved to a name.
    pub fn genre(&self) -> u8 {
        self.genre
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

///
/// Decode the tag stored in the last 128 bytes of `buffer`.
///
pub fn decode_from_suffix(buffer: &[u8]) -> result::Result<Tag, ParsingError> {
    if buffer.len() < TAG_LENGTH {
        debug!("buffer length {} is less than {}", buffer.len(), TAG_LENGTH);
        return Err(ParsingError::BadData(ParsingErrorKind::InsufficientData));
    }

    let mut region = [0u8; TAG_LENGTH];
    region.copy_from_slice(&buffer[buffer.len() - TAG_LENGTH..]);

    decode_region(&region)
}

pub fn decode_region(region: &[u8; TAG_LENGTH]) -> result::Result<Tag, ParsingError> {
    if &region[..3] != TAG_MARKER {
        debug!("{}", util::to_hex(&region[..3]));
        return Err(ParsingError::BadData(ParsingErrorKind::TagNotFound));
    }

    let title = util::to_trimmed(&region[TITLE.0..TITLE.1]);
    let artist = util::to_trimmed(&region[ARTIST.0..ARTIST.1]);
    let album = util::to_trimmed(&region[ALBUM.0..ALBUM.1]);
    let year = util::to_trimmed(&region[YEAR.0..YEAR.1]);
    let (comment, track) = comment_and_track(&region[COMMENT.0..COMMENT.1]);
    let genre = region[GENRE];

    let version = match NonZeroU8::new(track) {
        Some(track) => Version::WithTrack(track),
        None => Version::WithoutTrack
    };

    trace!("title:'{}', artist:'{}', album:'{}', year:'{}'", title, artist, album, year);
    trace!("comment:'{}', genre:{}, {}", comment, genre, version);

    Ok(Tag {
        title: title,
        artist: artist,
        album: album,
        year: year,
        comment: comment,
        genre: genre,
        version: version
    })
}

// A zero byte at 28 followed by a non zero byte at 29 marks a v1.1 track.
// A genuine 30 byte comment with that shape is read as v1.1 too.
fn comment_and_track(bytes: &[u8]) -> (String, u8) {
    if bytes[28] == util::NULL && bytes[29] != util::NULL {
        (util::to_trimmed(&bytes[..28]), bytes[29])
    } else {
        (util::to_trimmed(&bytes[..30]), 0)
    }
}
