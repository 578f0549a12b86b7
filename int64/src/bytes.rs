//! Fixed 8-byte wire encoding.
//!
//! Big-endian puts `high` first, each limb most significant byte first.
//! Little-endian puts `low` first, each limb least significant byte first,
//! which is exactly the little-endian layout of the full 64-bit value.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::DecodeError;
use crate::Int64;

/// Encoded size of one `Int64`.
pub const ENCODED_LEN: usize = 8;

/// Byte-order selector for the 8-byte codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    #[default]
    Big,
    Little,
}

fn read_limbs<B: ByteOrder, R: Read>(reader: &mut R) -> io::Result<(u32, u32)> {
    let first = reader.read_u32::<B>()?;
    let second = reader.read_u32::<B>()?;
    Ok((first, second))
}

fn write_limbs<B: ByteOrder, W: Write>(writer: &mut W, first: u32, second: u32) -> io::Result<()> {
    writer.write_u32::<B>(first)?;
    writer.write_u32::<B>(second)
}

impl Int64 {
    /// The 8 bytes of the value, always big-endian: `high` then `low`.
    pub fn to_byte_values(self) -> [u8; ENCODED_LEN] {
        self.to_bytes(Endianness::Big)
    }

    /// Encode into a fixed 8-byte array in the given byte order.
    ///
    /// ```
    /// use int64::{Endianness, Int64};
    ///
    /// let v = Int64::from_limbs(0x0102_0304, 0x0506_0708);
    /// assert_eq!(v.to_bytes(Endianness::Big), [1, 2, 3, 4, 5, 6, 7, 8]);
    /// assert_eq!(v.to_bytes(Endianness::Little), [8, 7, 6, 5, 4, 3, 2, 1]);
    /// ```
    pub fn to_bytes(self, order: Endianness) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        let (first, second) = buf.split_at_mut(4);
        match order {
            Endianness::Big => {
                BigEndian::write_u32(first, self.high);
                BigEndian::write_u32(second, self.low);
            }
            Endianness::Little => {
                LittleEndian::write_u32(first, self.low);
                LittleEndian::write_u32(second, self.high);
            }
        }
        buf
    }

    /// Decode the first 8 bytes of `bytes`. Extra trailing bytes are ignored.
    pub fn from_bytes(order: Endianness, bytes: &[u8]) -> Result<Int64, DecodeError> {
        let mut field = bytes;
        Int64::decode(order, &mut field)
    }

    /// Write the 8-byte encoding to `writer`.
    pub fn encode<W: Write>(self, order: Endianness, writer: &mut W) -> io::Result<()> {
        match order {
            Endianness::Big => write_limbs::<BigEndian, _>(writer, self.high, self.low),
            Endianness::Little => write_limbs::<LittleEndian, _>(writer, self.low, self.high),
        }
    }

    /// Read one 8-byte encoded value from `reader`, consuming at most 8 bytes.
    ///
    /// Input that ends before a full field is a `DecodeError::Truncated`
    /// carrying the number of bytes that were available.
    pub fn decode<R: Read>(order: Endianness, reader: &mut R) -> Result<Int64, DecodeError> {
        let mut field = Vec::with_capacity(ENCODED_LEN);
        if let Err(err) = reader.by_ref().take(ENCODED_LEN as u64).read_to_end(&mut field) {
            tracing::debug!(?order, %err, "Int64 decode failed");
            return Err(DecodeError::Io(err));
        }
        if field.len() < ENCODED_LEN {
            tracing::debug!(?order, available = field.len(), "truncated Int64 field");
            return Err(DecodeError::Truncated {
                available: field.len(),
            });
        }
        let mut field = field.as_slice();
        let (high, low) = match order {
            Endianness::Big => read_limbs::<BigEndian, _>(&mut field)?,
            Endianness::Little => {
                let (low, high) = read_limbs::<LittleEndian, _>(&mut field)?;
                (high, low)
            }
        };
        Ok(Int64::from_limbs(high, low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Int64 = Int64::from_limbs(0x0123_4567, 0x89AB_CDEF);

    #[test]
    fn test_byte_values_always_big_endian() {
        assert_eq!(
            SAMPLE.to_byte_values(),
            [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]
        );
    }

    #[test]
    fn test_little_endian_swaps_limbs_and_bytes() {
        let bytes = SAMPLE.to_bytes(Endianness::Little);
        assert_eq!(bytes, [0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01]);
        assert_eq!(bytes, u64::from(SAMPLE).to_le_bytes());
    }

    #[test]
    fn test_big_endian_matches_native() {
        assert_eq!(SAMPLE.to_bytes(Endianness::Big), u64::from(SAMPLE).to_be_bytes());
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        for order in [Endianness::Big, Endianness::Little] {
            let bytes = SAMPLE.to_bytes(order);
            assert_eq!(Int64::from_bytes(order, &bytes).unwrap(), SAMPLE);
        }
    }

    #[test]
    fn test_from_bytes_ignores_trailing() {
        let mut bytes = SAMPLE.to_bytes(Endianness::Big).to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFF]);
        assert_eq!(Int64::from_bytes(Endianness::Big, &bytes).unwrap(), SAMPLE);
    }

    #[test]
    fn test_from_bytes_truncated() {
        let err = Int64::from_bytes(Endianness::Little, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { available: 3 }));
    }

    #[test]
    fn test_stream_encode_decode() {
        let mut buf = Vec::new();
        SAMPLE.encode(Endianness::Little, &mut buf).unwrap();
        Int64::MAX_SIGNED.encode(Endianness::Little, &mut buf).unwrap();
        assert_eq!(buf.len(), 2 * ENCODED_LEN);

        let mut reader = buf.as_slice();
        assert_eq!(Int64::decode(Endianness::Little, &mut reader).unwrap(), SAMPLE);
        assert_eq!(
            Int64::decode(Endianness::Little, &mut reader).unwrap(),
            Int64::MAX_SIGNED
        );
        assert!(matches!(
            Int64::decode(Endianness::Little, &mut reader),
            Err(DecodeError::Truncated { available: 0 })
        ));
    }

    #[test]
    fn test_stream_decode_partial_field() {
        let mut reader: &[u8] = &[0, 0, 0, 1, 0, 0];
        assert!(matches!(
            Int64::decode(Endianness::Big, &mut reader),
            Err(DecodeError::Truncated { available: 6 })
        ));
    }

    #[test]
    fn test_stream_decode_short_reader_counts_bytes() {
        let mut reader: &[u8] = &[1, 2, 3];
        let err = Int64::decode(Endianness::Big, &mut reader).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { available: 3 }));
    }

    #[test]
    fn test_stream_decode_consumes_one_field() {
        let mut bytes = SAMPLE.to_bytes(Endianness::Big).to_vec();
        bytes.push(0xAA);
        let mut reader = bytes.as_slice();
        assert_eq!(Int64::decode(Endianness::Big, &mut reader).unwrap(), SAMPLE);
        assert_eq!(reader, &[0xAA]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
        }
    }

    #[test]
    fn test_stream_decode_surfaces_io_error() {
        let err = Int64::decode(Endianness::Little, &mut FailingReader).unwrap_err();
        match err {
            DecodeError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::Other),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_matches_to_bytes() {
        for order in [Endianness::Big, Endianness::Little] {
            let mut buf = Vec::new();
            SAMPLE.encode(order, &mut buf).unwrap();
            assert_eq!(buf, SAMPLE.to_bytes(order));
        }
    }
}
