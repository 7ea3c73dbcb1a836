//! Frame decoder
//!
//! Splits a raw byte buffer into a lazy sequence of frames. The decoder
//! knows nothing about command semantics: it does not stop at END and owns
//! no screen state. It is restartable from the source buffer but not
//! resumable mid-parse; after yielding an error it fuses and yields nothing
//! further.

use crate::error::ProtocolError;

use super::frame::Frame;

/// Lazy iterator over the frames of a binary stream
#[derive(Debug, Clone)]
pub struct FrameDecoder<'a> {
    input: &'a [u8],
    pos: usize,
    index: usize,
    failed: bool,
}

impl<'a> FrameDecoder<'a> {
    /// Create a decoder over a complete in-memory stream
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            index: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread position
    pub fn position(&self) -> usize {
        self.pos
    }

    fn fail(&mut self, err: ProtocolError) -> Option<Result<Frame<'a>, ProtocolError>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for FrameDecoder<'a> {
    type Item = Result<Frame<'a>, ProtocolError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        // Exhausted exactly at a frame boundary is a clean end of stream.
        if self.pos >= self.input.len() {
            return None;
        }

        let offset = self.pos;
        let command_id = self.input[offset];

        // A command id with no length byte is a truncated frame, not a
        // clean end.
        let Some(&length) = self.input.get(offset + 1) else {
            return self.fail(ProtocolError::TruncatedFrame {
                offset,
                needed: 1,
                available: 0,
            });
        };

        let needed = length as usize;
        let start = offset + 2;
        let available = self.input.len() - start;
        if needed > available {
            return self.fail(ProtocolError::TruncatedFrame {
                offset,
                needed,
                available,
            });
        }

        let payload = &self.input[start..start + needed];
        let frame = Frame {
            command_id,
            payload,
            offset,
            index: self.index,
        };

        self.pos = start + needed;
        self.index += 1;
        Some(Ok(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::command;

    #[test]
    fn test_empty_stream() {
        let mut decoder = FrameDecoder::new(&[]);
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_single_frame() {
        let bytes = [0x02, 4, 5, 5, 2, b'A'];
        let mut decoder = FrameDecoder::new(&bytes);

        let frame = decoder.next().unwrap().unwrap();
        assert_eq!(frame.command_id, 0x02);
        assert_eq!(frame.payload, &[5, 5, 2, b'A']);
        assert_eq!(frame.offset, 0);
        assert_eq!(frame.index, 0);
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_multiple_frames_track_offsets() {
        let bytes = [0x01, 3, 30, 20, 1, 0x07, 0, 0xFF, 0];
        let frames: Vec<_> = FrameDecoder::new(&bytes)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].command_id, 0x01);
        assert_eq!(frames[0].offset, 0);
        assert_eq!(frames[1].command_id, 0x07);
        assert_eq!(frames[1].offset, 5);
        assert_eq!(frames[1].payload, &[] as &[u8]);
        assert_eq!(frames[2].command_id, 0xFF);
        assert_eq!(frames[2].offset, 7);
        assert_eq!(frames[2].index, 2);
    }

    #[test]
    fn test_missing_length_byte() {
        let bytes = [0x01, 3, 30, 20, 1, 0x02];
        let mut decoder = FrameDecoder::new(&bytes);

        assert!(decoder.next().unwrap().is_ok());
        let err = decoder.next().unwrap().unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TruncatedFrame {
                offset: 5,
                needed: 1,
                available: 0,
            }
        );
        // Fused after an error
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_short_payload() {
        let bytes = [0x03, 6, 0, 0, 4];
        let mut decoder = FrameDecoder::new(&bytes);

        let err = decoder.next().unwrap().unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TruncatedFrame {
                offset: 0,
                needed: 6,
                available: 3,
            }
        );
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_decoder_yields_past_end_marker() {
        // The decoder is agnostic to command semantics; stopping at END is
        // the session's job.
        let bytes = [0xFF, 0, 0x02, 4, 1, 1, 2, b'X'];
        let frames: Vec<_> = FrameDecoder::new(&bytes)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].command_id, command::END);
        assert_eq!(frames[1].command_id, command::DRAW_CHAR);
    }

    #[test]
    fn test_round_trip() {
        let bytes = [
            0x01, 3, 10, 10, 1, 0x04, 6, 3, 3, 2, b'H', b'i', b'!', 0xFF, 0,
        ];
        let mut rebuilt = Vec::new();
        for frame in FrameDecoder::new(&bytes) {
            rebuilt.extend_from_slice(&frame.unwrap().encode());
        }
        assert_eq!(rebuilt, bytes);
    }
}
