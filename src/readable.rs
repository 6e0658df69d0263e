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

use std::io::Result;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

///
/// Read the whole file into memory.
///
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let mut readable = factory::from_path(path.as_ref())?;
    let bytes = readable.all_bytes()?;
    debug!("loaded {} bytes from {:?}", bytes.len(), path.as_ref());
    Ok(bytes)
}

pub struct Readable<I> where I: Read + Seek {
    input: I
}

impl<I> Readable<I> where I: Read + Seek {
    pub fn new(input: I) -> Self {
        Readable {
            input: input
        }
    }

    pub fn all_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.input.read_to_end(&mut buf)?;
        Ok(buf)
    }

    // The current position is kept.
    pub fn len(&mut self) -> Result<u64> {
        let current = self.input.seek(SeekFrom::Current(0))?;
        let len = self.input.seek(SeekFrom::End(0))?;
        self.input.seek(SeekFrom::Start(current))?;
        Ok(len)
    }

    ///
    /// Last `amount` bytes of the input. A shorter input is returned whole.
    ///
    pub fn tail_bytes(&mut self, amount: usize) -> Result<Vec<u8>> {
        let len = self.len()?;
        let offset = len.saturating_sub(amount as u64);
        trace!("Readable.tail_bytes=> amount:{}, len:{}, offset:{}", amount, len, offset);
        self.position(offset)?;
        self.all_bytes()
    }

    pub fn position(&mut self, offset: u64) -> Result<u64> {
        Ok(self.input.seek(SeekFrom::Start(offset))?)
    }
}

pub mod factory {
    use std::fs;
    use std::io::Result;
    use std::path::Path;

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<super::Readable<fs::File>> {
        Ok(super::Readable::new(fs::File::open(path)?))
    }
}
