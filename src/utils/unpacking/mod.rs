#[cfg(feature = "parallel")]
mod parallel;
mod naive;

use crate::utils::alphabet::{EncodingWidth, MoleculeKind};
use crate::utils::codec::{AmbiguityCorrection, FiveBit, FourBit, SymbolCodec, ThreeBit, TwoBit};

/// State that changes how codes read from the buffer map back to symbols.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeView {
    /// Remapping of the 4-bit `S`/`W`/`N`/`-` codes.
    pub correction: AmbiguityCorrection,
    /// Render the `T` code of nucleotide tables as `U`.
    pub rna: bool,
}

impl DecodeView {
    pub fn new(molecule: MoleculeKind, complemented: bool) -> Self {
        Self {
            correction: AmbiguityCorrection::for_state(complemented),
            rna: molecule == MoleculeKind::Rna,
        }
    }
}

/// Decodes the symbol stored at physical position `i`.
pub fn symbol_at(buffer: &[u8], width: EncodingWidth, i: usize, view: &DecodeView) -> u8 {
    match width {
        EncodingWidth::Nuc2 => naive::symbol_at::<TwoBit>(buffer, i, view),
        EncodingWidth::Nuc3 => naive::symbol_at::<ThreeBit>(buffer, i, view),
        EncodingWidth::Nuc4 => naive::symbol_at::<FourBit>(buffer, i, view),
        EncodingWidth::Pro5 => naive::symbol_at::<FiveBit>(buffer, i, view),
        EncodingWidth::Undefined => unreachable!("no symbols are stored without an encoding"),
    }
}

/// Appends `count` decoded symbols to `out`, in reverse physical order when
/// `reversed` is set.
///
/// The width is matched once; the per-symbol loop runs on a single codec.
pub fn unpack(
    buffer: &[u8],
    width: EncodingWidth,
    count: usize,
    view: &DecodeView,
    reversed: bool,
    out: &mut Vec<u8>,
) {
    match width {
        EncodingWidth::Nuc2 => unpack_with::<TwoBit>(buffer, count, view, reversed, out),
        EncodingWidth::Nuc3 => unpack_with::<ThreeBit>(buffer, count, view, reversed, out),
        EncodingWidth::Nuc4 => unpack_with::<FourBit>(buffer, count, view, reversed, out),
        EncodingWidth::Pro5 => unpack_with::<FiveBit>(buffer, count, view, reversed, out),
        EncodingWidth::Undefined => {}
    }
}

fn unpack_with<C: SymbolCodec>(
    buffer: &[u8],
    count: usize,
    view: &DecodeView,
    reversed: bool,
    out: &mut Vec<u8>,
) {
    #[cfg(feature = "parallel")]
    if count >= super::PARALLEL_MIN_ELEMENTS {
        parallel::unpack_into::<C>(buffer, count, view, reversed, out);
        return;
    }

    naive::unpack_into::<C>(buffer, count, view, reversed, out)
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::utils::packing::pack;

    fn roundtrip(seq: &[u8], width: EncodingWidth) -> Vec<u8> {
        let buffer = pack(seq, width).unwrap();
        let mut out = Vec::new();
        unpack(&buffer, width, seq.len(), &DecodeView::default(), false, &mut out);
        out
    }

    #[test]
    fn test_pack_unpack_roundtrip() {
        let test_cases = [
            (b"A".as_slice(), EncodingWidth::Nuc2),
            (b"ACGT".as_slice(), EncodingWidth::Nuc2),
            (b"AAAATTTCCG".as_slice(), EncodingWidth::Nuc2),
            (b"N".as_slice(), EncodingWidth::Nuc3),
            (b"AAAANTTT-CCG".as_slice(), EncodingWidth::Nuc3),
            (b"ACGTN-ACGTN-ACG".as_slice(), EncodingWidth::Nuc3),
            (b"C-KBDRSTANWHMYGV".as_slice(), EncodingWidth::Nuc4),
            (b"RYS".as_slice(), EncodingWidth::Nuc4),
            (b"ABCEFGHIKLMNPQRSTUVWXYZ-!*".as_slice(), EncodingWidth::Pro5),
            (b"MEK".as_slice(), EncodingWidth::Pro5),
        ];

        for (seq, width) in test_cases {
            assert_eq!(roundtrip(seq, width), seq, "width {:?}", width);
        }
    }

    #[test]
    fn test_lowercase_decodes_uppercase() {
        assert_eq!(roundtrip(b"acgtn", EncodingWidth::Nuc3), b"ACGTN");
    }

    #[test]
    fn test_narrow_symbols_in_wider_encodings() {
        assert_eq!(roundtrip(b"ACGT", EncodingWidth::Nuc3), b"ACGT");
        assert_eq!(roundtrip(b"ACGT", EncodingWidth::Nuc4), b"ACGT");
        assert_eq!(roundtrip(b"ACGT", EncodingWidth::Pro5), b"ACGT");
    }

    #[test]
    fn test_unpack_appends() {
        let buffer = pack(b"ACGT", EncodingWidth::Nuc2).unwrap();
        let mut out = b">".to_vec();
        unpack(&buffer, EncodingWidth::Nuc2, 4, &DecodeView::default(), true, &mut out);
        assert_eq!(out, b">TGCA");
    }

    #[test]
    fn test_symbol_at() {
        let buffer = pack(b"AAAANTTT-CCG", EncodingWidth::Nuc3).unwrap();
        let view = DecodeView::default();
        assert_eq!(symbol_at(&buffer, EncodingWidth::Nuc3, 4, &view), b'N');
        assert_eq!(symbol_at(&buffer, EncodingWidth::Nuc3, 8, &view), b'-');
        assert_eq!(symbol_at(&buffer, EncodingWidth::Nuc3, 11, &view), b'G');
    }

    #[test]
    fn test_decode_view() {
        let view = DecodeView::new(MoleculeKind::Rna, true);
        assert!(view.rna);
        assert_eq!(view.correction, AmbiguityCorrection::COMPLEMENTED);
        assert_eq!(DecodeView::new(MoleculeKind::Dna, false), DecodeView::default());
    }
}
