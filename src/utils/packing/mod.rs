#[cfg(feature = "parallel")]
mod parallel;
mod naive;

use crate::error::SequenceError;
use crate::utils::alphabet::EncodingWidth;
use crate::utils::codec::{FiveBit, FourBit, SymbolCodec, ThreeBit, TwoBit};

/// Packs `seq` at the given width into a freshly allocated buffer.
///
/// The buffer holds `width.byte_count(seq.len())` bytes. Trailing pad bits of
/// the final byte are zero.
///
/// # Errors
///
/// Returns `SequenceError::InvalidSymbol` for the first symbol the width's
/// table cannot represent.
pub fn pack(seq: &[u8], width: EncodingWidth) -> Result<Vec<u8>, SequenceError> {
    let mut buffer = vec![0u8; width.byte_count(seq.len())];
    match width {
        EncodingWidth::Nuc2 => pack_with::<TwoBit>(seq, &mut buffer)?,
        EncodingWidth::Nuc3 => pack_with::<ThreeBit>(seq, &mut buffer)?,
        EncodingWidth::Nuc4 => pack_with::<FourBit>(seq, &mut buffer)?,
        EncodingWidth::Pro5 => pack_with::<FiveBit>(seq, &mut buffer)?,
        EncodingWidth::Undefined => {
            if let Some(&symbol) = seq.first() {
                return Err(SequenceError::InvalidSymbol {
                    symbol,
                    position: 0,
                });
            }
        }
    }
    Ok(buffer)
}

fn pack_with<C: SymbolCodec>(seq: &[u8], buffer: &mut [u8]) -> Result<(), SequenceError> {
    #[cfg(feature = "parallel")]
    if seq.len() >= super::PARALLEL_MIN_ELEMENTS {
        return parallel::pack_into::<C>(seq, buffer);
    }

    naive::pack_into::<C>(seq, buffer, 0)
}

/// Complements a packed buffer in place: every byte is inverted, then the pad
/// bits of the final byte are cleared again.
pub fn invert(buffer: &mut [u8], element_count: usize, width: EncodingWidth) {
    #[cfg(feature = "parallel")]
    if element_count >= super::PARALLEL_MIN_ELEMENTS {
        parallel::invert(buffer);
    } else {
        buffer.iter_mut().for_each(|byte| *byte = !*byte);
    }

    #[cfg(not(feature = "parallel"))]
    buffer.iter_mut().for_each(|byte| *byte = !*byte);

    let pad = (8 - (element_count * width.bits()) % 8) % 8;
    if let Some(last) = buffer.last_mut() {
        *last &= 0xFFu8 << pad;
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_pack_byte_counts() {
        let tests = vec![
            (b"AAAATTTCCG".as_slice(), EncodingWidth::Nuc2, 3),
            (b"AAAANTTT-CCG".as_slice(), EncodingWidth::Nuc3, 5),
            (b"C-KBDRSTANWHMYGV".as_slice(), EncodingWidth::Nuc4, 8),
            (b"MEK".as_slice(), EncodingWidth::Pro5, 2),
            (b"".as_slice(), EncodingWidth::Undefined, 0),
        ];

        for (seq, width, expected) in tests {
            assert_eq!(pack(seq, width).unwrap().len(), expected);
        }
    }

    #[test]
    fn test_pack_undefined_width_rejects_symbols() {
        assert_eq!(
            pack(b"A", EncodingWidth::Undefined),
            Err(SequenceError::InvalidSymbol {
                symbol: b'A',
                position: 0
            })
        );
    }

    #[test]
    fn test_pack_unrepresentable_symbol() {
        assert!(matches!(
            pack(b"ACGR", EncodingWidth::Nuc3),
            Err(SequenceError::InvalidSymbol { symbol: b'R', position: 3 })
        ));
        assert!(matches!(
            pack(b"DE", EncodingWidth::Pro5),
            Err(SequenceError::InvalidSymbol { symbol: b'D', position: 0 })
        ));
    }

    #[test]
    fn test_invert_clears_padding() {
        // 10 x 2 bits = 20 bits, 4 pad bits
        let mut buffer = pack(b"AAAATTTCCG", EncodingWidth::Nuc2).unwrap();
        assert_eq!(buffer, vec![0b00000000, 0b11111101, 0b0110_0000]);
        invert(&mut buffer, 10, EncodingWidth::Nuc2);
        assert_eq!(buffer, vec![0b11111111, 0b00000010, 0b1001_0000]);
        invert(&mut buffer, 10, EncodingWidth::Nuc2);
        assert_eq!(buffer, pack(b"AAAATTTCCG", EncodingWidth::Nuc2).unwrap());
    }

    #[test]
    fn test_invert_full_bytes() {
        let mut buffer = pack(b"ACGT", EncodingWidth::Nuc2).unwrap();
        invert(&mut buffer, 4, EncodingWidth::Nuc2);
        assert_eq!(buffer, pack(b"TGCA", EncodingWidth::Nuc2).unwrap());
    }

    #[test]
    fn test_invert_empty() {
        let mut buffer = Vec::new();
        invert(&mut buffer, 0, EncodingWidth::Undefined);
        assert!(buffer.is_empty());
    }
}
