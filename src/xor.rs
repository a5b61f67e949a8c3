use std::io::{self, ErrorKind, Read, Write};

use log::debug;

const BUFFER_SIZE: usize = 1024;

/// Repeating-key XOR keystream. The key position carries over between calls,
/// so a stream may be fed in chunks of any size.
#[derive(Debug, Clone)]
pub struct XorCipher {
    key: Vec<u8>,
    position: usize,
}

impl XorCipher {
    /// Returns `None` for an empty key
    pub fn new(key: impl Into<Vec<u8>>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() {
            return None;
        }
        Some(XorCipher { key, position: 0 })
    }

    /// XORs `data` in place, byte `i` of the stream with `key[i % key.len()]`
    pub fn apply(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.key[self.position];
            self.position = (self.position + 1) % self.key.len();
        }
    }

    /// Copies `input` to `output` through the cipher until end of stream.
    /// Returns the number of bytes processed.
    pub fn transform<R: Read, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<u64> {
        let mut buffer = [0u8; BUFFER_SIZE];
        let mut total = 0u64;
        loop {
            let n = match input.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.apply(&mut buffer[..n]);
            output.write_all(&buffer[..n])?;
            total += n as u64;
        }
        output.flush()?;
        debug!("xor processed {total} bytes");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most `chunk` bytes per read
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(XorCipher::new("").is_none());
        assert!(XorCipher::new(Vec::new()).is_none());
    }

    #[test]
    fn key_repeats_over_input() {
        let mut cipher = XorCipher::new("ab").unwrap();
        let mut data = *b"\x00\x00\x00\xff";
        cipher.apply(&mut data);
        assert_eq!(data, [b'a', b'b', b'a', b'b' ^ 0xff]);
    }

    #[test]
    fn applying_twice_restores_input() {
        let plain = b"attack at dawn".to_vec();
        let mut data = plain.clone();
        XorCipher::new("secret").unwrap().apply(&mut data);
        assert_ne!(data, plain);
        XorCipher::new("secret").unwrap().apply(&mut data);
        assert_eq!(data, plain);
    }

    #[test]
    fn key_position_spans_read_chunks() {
        let plain: Vec<u8> = (0..=255u8).cycle().take(3000).collect();

        let mut expected = plain.clone();
        XorCipher::new("k3y").unwrap().apply(&mut expected);

        let mut input = Trickle { data: &plain, chunk: 7 };
        let mut output = Vec::new();
        let total = XorCipher::new("k3y")
            .unwrap()
            .transform(&mut input, &mut output)
            .unwrap();

        assert_eq!(total, 3000);
        assert_eq!(output, expected);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut output = Vec::new();
        let total = XorCipher::new("k")
            .unwrap()
            .transform(&mut io::empty(), &mut output)
            .unwrap();
        assert_eq!(total, 0);
        assert!(output.is_empty());
    }
}
