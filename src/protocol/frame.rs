//! Wire frames
//!
//! A frame is one `[command_id][length][payload]` unit of the binary stream.
//! Frames are ephemeral: the decoder produces them one at a time borrowing
//! from the input buffer, and the session consumes them immediately.

/// One decoded frame from the binary stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// The command identifier byte
    pub command_id: u8,
    /// Payload bytes, exactly as declared by the length byte
    pub payload: &'a [u8],
    /// Byte offset of this frame's command id within the stream
    pub offset: usize,
    /// Zero-based position of this frame in the stream
    pub index: usize,
}

impl Frame<'_> {
    /// Total encoded size of this frame in bytes
    pub fn encoded_len(&self) -> usize {
        2 + self.payload.len()
    }

    /// Re-encode this frame to its exact wire representation
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.push(self.command_id);
        bytes.push(self.payload.len() as u8);
        bytes.extend_from_slice(self.payload);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_encode() {
        let frame = Frame {
            command_id: 0x02,
            payload: &[5, 5, 2, b'A'],
            offset: 0,
            index: 0,
        };
        assert_eq!(frame.encode(), vec![0x02, 4, 5, 5, 2, b'A']);
        assert_eq!(frame.encoded_len(), 6);
    }

    #[test]
    fn test_frame_encode_empty_payload() {
        let frame = Frame {
            command_id: 0xFF,
            payload: &[],
            offset: 10,
            index: 3,
        };
        assert_eq!(frame.encode(), vec![0xFF, 0]);
    }
}
