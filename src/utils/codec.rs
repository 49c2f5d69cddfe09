//! Per-width symbol tables.
//!
//! Codes are laid out so that the bitwise NOT of a 2- or 3-bit code is the code
//! of the complementary base. Complementing a packed buffer is therefore a NOT
//! over its bytes. The 4-bit layout keeps that property for every code except
//! `S`/`W` and `N`/`-`, which [`AmbiguityCorrection`] remaps at decode time.
//!
//! - 2-bit: `A=00 C=01 G=10 T=11`
//! - 3-bit: `A=000 C=001 N=010 -=011 G=110 T=111`; `100` and `101` are the
//!   complemented gap and `N` and decode to the same symbols
//! - 4-bit: `A C R K B D S N - W H V M Y G T` for `0000..=1111`
//! - 5-bit: amino acids, see [`FiveBit`]

/// Decode-time remapping of the four 4-bit codes whose bitwise complement is
/// not their biological complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmbiguityCorrection {
    /// Code `0110`
    s: u8,
    /// Code `0111`
    n: u8,
    /// Code `1000`
    gap: u8,
    /// Code `1001`
    w: u8,
}

impl AmbiguityCorrection {
    pub const STRAIGHT: Self = Self {
        s: b'S',
        n: b'N',
        gap: b'-',
        w: b'W',
    };

    pub const COMPLEMENTED: Self = Self {
        s: b'W',
        n: b'-',
        gap: b'N',
        w: b'S',
    };

    pub const fn for_state(complemented: bool) -> Self {
        if complemented {
            Self::COMPLEMENTED
        } else {
            Self::STRAIGHT
        }
    }
}

impl Default for AmbiguityCorrection {
    fn default() -> Self {
        Self::STRAIGHT
    }
}

/// Fixed-width mapping between symbols and codes.
///
/// `encode` accepts any ASCII case; `decode` returns uppercase. Nucleotide
/// codecs map `U` onto the `T` code and always decode it as `T`.
pub trait SymbolCodec {
    const BITS: usize;

    /// Mask selecting the low `BITS` bits.
    const MASK: u8 = ((1u16 << Self::BITS) - 1) as u8;

    fn encode(symbol: u8) -> Option<u8>;

    fn decode(code: u8, correction: &AmbiguityCorrection) -> Option<u8>;
}

pub struct TwoBit;
pub struct ThreeBit;
pub struct FourBit;
pub struct FiveBit;

impl SymbolCodec for TwoBit {
    const BITS: usize = 2;

    #[inline(always)]
    fn encode(symbol: u8) -> Option<u8> {
        match symbol {
            b'A' | b'a' => Some(0b00),
            b'C' | b'c' => Some(0b01),
            b'G' | b'g' => Some(0b10),
            b'T' | b't' | b'U' | b'u' => Some(0b11),
            _ => None,
        }
    }

    #[inline(always)]
    fn decode(code: u8, _correction: &AmbiguityCorrection) -> Option<u8> {
        match code {
            0b00 => Some(b'A'),
            0b01 => Some(b'C'),
            0b10 => Some(b'G'),
            0b11 => Some(b'T'),
            _ => None,
        }
    }
}

impl SymbolCodec for ThreeBit {
    const BITS: usize = 3;

    #[inline(always)]
    fn encode(symbol: u8) -> Option<u8> {
        match symbol {
            b'A' | b'a' => Some(0b000),
            b'C' | b'c' => Some(0b001),
            b'N' | b'n' => Some(0b010),
            b'-' => Some(0b011),
            b'G' | b'g' => Some(0b110),
            b'T' | b't' | b'U' | b'u' => Some(0b111),
            _ => None,
        }
    }

    #[inline(always)]
    fn decode(code: u8, _correction: &AmbiguityCorrection) -> Option<u8> {
        match code {
            0b000 => Some(b'A'),
            0b001 => Some(b'C'),
            0b010 | 0b101 => Some(b'N'),
            0b011 | 0b100 => Some(b'-'),
            0b110 => Some(b'G'),
            0b111 => Some(b'T'),
            _ => None,
        }
    }
}

impl SymbolCodec for FourBit {
    const BITS: usize = 4;

    #[inline(always)]
    fn encode(symbol: u8) -> Option<u8> {
        match symbol.to_ascii_uppercase() {
            b'A' => Some(0b0000),
            b'C' => Some(0b0001),
            b'R' => Some(0b0010),
            b'K' => Some(0b0011),
            b'B' => Some(0b0100),
            b'D' => Some(0b0101),
            b'S' => Some(0b0110),
            b'N' => Some(0b0111),
            b'-' => Some(0b1000),
            b'W' => Some(0b1001),
            b'H' => Some(0b1010),
            b'V' => Some(0b1011),
            b'M' => Some(0b1100),
            b'Y' => Some(0b1101),
            b'G' => Some(0b1110),
            b'T' | b'U' => Some(0b1111),
            _ => None,
        }
    }

    #[inline(always)]
    fn decode(code: u8, correction: &AmbiguityCorrection) -> Option<u8> {
        match code {
            0b0000 => Some(b'A'),
            0b0001 => Some(b'C'),
            0b0010 => Some(b'R'),
            0b0011 => Some(b'K'),
            0b0100 => Some(b'B'),
            0b0101 => Some(b'D'),
            0b0110 => Some(correction.s),
            0b0111 => Some(correction.n),
            0b1000 => Some(correction.gap),
            0b1001 => Some(correction.w),
            0b1010 => Some(b'H'),
            0b1011 => Some(b'V'),
            0b1100 => Some(b'M'),
            0b1101 => Some(b'Y'),
            0b1110 => Some(b'G'),
            0b1111 => Some(b'T'),
            _ => None,
        }
    }
}

/// Amino-acid alphabet. `!` is a one-base frameshift and `*` a stop; code
/// `11001` (two-base frameshift) and `11011..=11111` carry no symbol.
const PROTEIN_SYMBOLS: &[u8; 27] = b"ABCEFGHIKLMNPQRSTUVWXYZ-!?*";
const NO_SYMBOL: u8 = b'?';

impl SymbolCodec for FiveBit {
    const BITS: usize = 5;

    #[inline(always)]
    fn encode(symbol: u8) -> Option<u8> {
        let symbol = symbol.to_ascii_uppercase();
        if symbol == NO_SYMBOL {
            return None;
        }
        PROTEIN_SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|code| code as u8)
    }

    #[inline(always)]
    fn decode(code: u8, _correction: &AmbiguityCorrection) -> Option<u8> {
        PROTEIN_SYMBOLS
            .get(code as usize)
            .copied()
            .filter(|&s| s != NO_SYMBOL)
    }
}
