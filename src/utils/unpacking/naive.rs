use crate::utils::codec::SymbolCodec;

use super::DecodeView;

/// Extracts the code at physical position `i`. Inverse of the packer's
/// `write_code`.
#[inline(always)]
pub fn read_code<C: SymbolCodec>(buffer: &[u8], i: usize) -> u8 {
    if 8 % C::BITS == 0 {
        let per_byte = 8 / C::BITS;
        let shift = C::BITS * (per_byte - 1 - i % per_byte);
        return (buffer[i / per_byte] >> shift) & C::MASK;
    }

    let bit = i * C::BITS;
    let byte = bit / 8;
    let room = 8 - bit % 8;

    if room >= C::BITS {
        (buffer[byte] >> (room - C::BITS)) & C::MASK
    } else {
        let spill = C::BITS - room;
        let high = (buffer[byte] & (C::MASK >> spill)) << spill;
        let low = buffer[byte + 1] >> (8 - spill);
        high | low
    }
}

/// Decodes the symbol at physical position `i`.
///
/// # Panics
///
/// Panics if the stored code has no symbol, which means the buffer was not
/// produced by the packer.
#[inline(always)]
pub fn symbol_at<C: SymbolCodec>(buffer: &[u8], i: usize, view: &DecodeView) -> u8 {
    let code = read_code::<C>(buffer, i);
    match C::decode(code, &view.correction) {
        Some(b'T') if view.rna => b'U',
        Some(symbol) => symbol,
        None => unreachable!("code {:#b} has no {}-bit symbol", code, C::BITS),
    }
}

/// Appends `count` decoded symbols to `out`, last position first when
/// `reversed`.
pub fn unpack_into<C: SymbolCodec>(
    buffer: &[u8],
    count: usize,
    view: &DecodeView,
    reversed: bool,
    out: &mut Vec<u8>,
) {
    out.reserve(count);
    if reversed {
        out.extend((0..count).rev().map(|i| symbol_at::<C>(buffer, i, view)));
    } else {
        out.extend((0..count).map(|i| symbol_at::<C>(buffer, i, view)));
    }
}
