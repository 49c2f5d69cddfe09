use crate::error::SequenceError;
use crate::utils::codec::SymbolCodec;

/// Writes the code of position `i` into a zeroed buffer.
///
/// Positions are packed from the most significant bit of each byte. A code
/// whose bits do not fit in the remaining room of its byte is split: the high
/// part fills the current byte and the low part starts the next one.
#[inline(always)]
pub fn write_code<C: SymbolCodec>(buffer: &mut [u8], i: usize, code: u8) {
    if 8 % C::BITS == 0 {
        let per_byte = 8 / C::BITS;
        let shift = C::BITS * (per_byte - 1 - i % per_byte);
        buffer[i / per_byte] |= code << shift;
        return;
    }

    let bit = i * C::BITS;
    let byte = bit / 8;
    let room = 8 - bit % 8;

    if room >= C::BITS {
        buffer[byte] |= code << (room - C::BITS);
    } else {
        // astride: `room` high bits here, `spill` low bits in the next byte
        let spill = C::BITS - room;
        buffer[byte] |= code >> spill;
        buffer[byte + 1] |= (code & (C::MASK >> room)) << (8 - spill);
    }
}

/// Packs `seq` into `buffer`, which must be zeroed and hold exactly
/// `ceil(seq.len() * C::BITS / 8)` bytes.
///
/// `offset` is the logical position of `seq[0]` and only used for error
/// reporting.
pub fn pack_into<C: SymbolCodec>(
    seq: &[u8],
    buffer: &mut [u8],
    offset: usize,
) -> Result<(), SequenceError> {
    for (i, &symbol) in seq.iter().enumerate() {
        let code = C::encode(symbol).ok_or(SequenceError::InvalidSymbol {
            symbol,
            position: offset + i,
        })?;
        write_code::<C>(buffer, i, code);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::codec::{FiveBit, FourBit, ThreeBit, TwoBit};

    fn pack<C: SymbolCodec>(seq: &[u8]) -> Vec<u8> {
        let mut buffer = vec![0u8; (seq.len() * C::BITS).div_ceil(8)];
        pack_into::<C>(seq, &mut buffer, 0).unwrap();
        buffer
    }

    #[test]
    fn test_two_bit_layout() {
        assert_eq!(pack::<TwoBit>(b"ACGT"), vec![0b00_01_10_11]);
        assert_eq!(pack::<TwoBit>(b"TTTTA"), vec![0b11111111, 0b00_000000]);
        assert_eq!(pack::<TwoBit>(b"TTTTT"), vec![0b11111111, 0b11_000000]);
    }

    #[test]
    fn test_two_bit_padding_is_zero() {
        // 10 symbols -> 20 bits -> 3 bytes, 4 pad bits
        let buffer = pack::<TwoBit>(b"TTTTTTTTTT");
        assert_eq!(buffer, vec![0xFF, 0xFF, 0b1111_0000]);
    }

    #[test]
    fn test_three_bit_astride() {
        // T T T -> 111 111 11|1 : third code straddles bytes 0 and 1
        assert_eq!(pack::<ThreeBit>(b"TTT"), vec![0b111_111_11, 0b1_0000000]);
        // A C N - G T A C -> 24 bits, exactly 3 bytes
        assert_eq!(
            pack::<ThreeBit>(b"ACN-GTAC"),
            vec![0b000_001_01, 0b0_011_110_1, 0b11_000_001]
        );
    }

    #[test]
    fn test_four_bit_layout() {
        assert_eq!(pack::<FourBit>(b"AT"), vec![0b0000_1111]);
        assert_eq!(pack::<FourBit>(b"S-N"), vec![0b0110_1000, 0b0111_0000]);
    }

    #[test]
    fn test_five_bit_astride() {
        // E=00011 K=01000 *=11010
        assert_eq!(
            pack::<FiveBit>(b"EK*"),
            vec![0b00011_010, 0b00_11010_0]
        );
    }

    #[test]
    fn test_invalid_symbol_position() {
        let mut buffer = vec![0u8; 1];
        assert_eq!(
            pack_into::<TwoBit>(b"ACN", &mut buffer, 10),
            Err(SequenceError::InvalidSymbol {
                symbol: b'N',
                position: 12
            })
        );
    }
}
