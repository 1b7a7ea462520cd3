use borsh::io;
use borsh::{BorshDeserialize, BorshSerialize};

use crate::Decimal128;

/// Writes the 16 byte little-endian layout: the low word first, then the high word.
impl BorshSerialize for Decimal128 {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_le_bytes())
    }
}

impl BorshDeserialize for Decimal128 {
    /// Every 16 byte pattern is a valid value, so only a short read can fail.
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let mut bytes = [0u8; 16];
        reader.read_exact(&mut bytes)?;
        Ok(Decimal128::from_le_bytes(bytes))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_uses_the_little_endian_layout() {
        let value = Decimal128::from_parts(-2, 0x0102_0304_0506_0708);
        let bytes = borsh::to_vec(&value).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(&bytes[8..], &(-2i64).to_le_bytes());
        assert_eq!(borsh::from_slice::<Decimal128>(&bytes).unwrap(), value);
    }

    #[test]
    fn it_rejects_short_input() {
        assert!(borsh::from_slice::<Decimal128>(&[0u8; 15]).is_err());
        assert!(borsh::from_slice::<Decimal128>(&[0u8; 17]).is_err());
    }
}
