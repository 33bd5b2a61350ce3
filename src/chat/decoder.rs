// Incremental UTF-8 decoder for chunked response bodies. A multi-byte
// character can be split across chunk boundaries, so the undecoded tail of
// each chunk is carried into the next call instead of being decoded fresh.
pub struct StreamDecoder {
    pending: Vec<u8>,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut decoded = String::new();
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(valid) => {
                    decoded.push_str(valid);
                    self.pending.clear();
                    break;
                }
                Err(err) => {
                    let valid_up_to = err.valid_up_to();
                    decoded.push_str(
                        std::str::from_utf8(&self.pending[..valid_up_to]).unwrap_or_default(),
                    );
                    match err.error_len() {
                        // Incomplete trailing sequence: keep it for the next chunk
                        None => {
                            self.pending.drain(..valid_up_to);
                            break;
                        }
                        // Invalid bytes mid-stream: replace and keep going
                        Some(len) => {
                            decoded.push('\u{FFFD}');
                            self.pending.drain(..valid_up_to + len);
                        }
                    }
                }
            }
        }

        decoded
    }

    // A dangling partial sequence at end-of-stream can never complete, so
    // it becomes a single replacement character.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            "\u{FFFD}".to_string()
        }
    }
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_chunks_concatenate() {
        let mut decoder = StreamDecoder::new();
        let mut output = String::new();

        for chunk in [b"Hel".as_slice(), b"lo, ", b"world"] {
            output.push_str(&decoder.decode(chunk));
        }
        output.push_str(&decoder.finish());

        assert_eq!(output, "Hello, world");
    }

    #[test]
    fn test_multibyte_character_split_across_chunks() {
        // "日" is E6 97 A5; split it between two chunks
        let mut decoder = StreamDecoder::new();

        let first = decoder.decode(&[0xE6, 0x97]);
        assert_eq!(first, "");

        let second = decoder.decode(&[0xA5, b'!']);
        assert_eq!(second, "日!");

        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_split_inside_four_byte_sequence() {
        // "🚀" is F0 9F 9A 80
        let mut decoder = StreamDecoder::new();
        let mut output = String::new();

        output.push_str(&decoder.decode(&[b'a', 0xF0]));
        output.push_str(&decoder.decode(&[0x9F, 0x9A]));
        output.push_str(&decoder.decode(&[0x80, b'b']));
        output.push_str(&decoder.finish());

        assert_eq!(output, "a🚀b");
    }

    #[test]
    fn test_invalid_byte_becomes_replacement() {
        let mut decoder = StreamDecoder::new();

        let output = decoder.decode(&[b'o', b'k', 0xFF, b'!']);

        assert_eq!(output, "ok\u{FFFD}!");
    }

    #[test]
    fn test_dangling_partial_sequence_at_end_of_stream() {
        let mut decoder = StreamDecoder::new();

        assert_eq!(decoder.decode(&[b'x', 0xE6]), "x");
        assert_eq!(decoder.finish(), "\u{FFFD}");
    }
}
