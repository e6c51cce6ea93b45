use std::str;

/// Read cursor over a borrowed line.
#[derive(Debug)]
pub(crate) struct Bytes<'buf> {
    buf: &'buf [u8],
    pos: usize,
}

impl<'buf> Bytes<'buf> {
    pub fn new(buf: &'buf [u8]) -> Bytes<'buf> {
        Bytes { buf, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).cloned()
    }

    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    /// Consume `byte` if it is next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            return true;
        }

        false
    }

    /// Consume the longest run of bytes accepted by `accept` and return it.
    pub fn take_while<F>(&mut self, accept: F) -> &'buf [u8]
    where
        F: Fn(u8) -> bool,
    {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if !accept(byte) {
                break;
            }
            self.pos += 1;
        }

        &self.buf[start..self.pos]
    }

    /// Everything not consumed yet.
    pub fn rest(&self) -> &'buf [u8] {
        &self.buf[self.pos.min(self.len())..]
    }
}

/// Lossless conversion for slices that already passed an ASCII grammar check.
pub(crate) fn ascii_str(bytes: &[u8]) -> Result<&str, str::Utf8Error> {
    str::from_utf8(bytes)
}
