use thiserror::Error;

use crate::utils::alphabet::{EncodingWidth, MoleculeKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// A symbol not accepted by the alphabet in force at `position`.
    #[error("Unexpected symbol '{}' (0x{symbol:02X}) at position {position}", symbol_char(.symbol))]
    InvalidSymbol { symbol: u8, position: usize },

    /// `D` is an ambiguity code in nucleotide context and has no protein code.
    #[error("Unexpected symbol '{}' at position {position} in a protein sequence", symbol_char(.symbol))]
    InvalidProteinSymbol { symbol: u8, position: usize },

    #[error("Protein sequences cannot be complemented")]
    ComplementProtein,

    #[error("Encoding {width:?} cannot represent a {molecule:?} molecule")]
    IncompatibleEncoding {
        width: EncodingWidth,
        molecule: MoleculeKind,
    },

    #[error("Index {index} out of bounds for sequence of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    #[error("Invalid range {start}..{end} for sequence of length {length}")]
    InvalidRange {
        start: usize,
        end: usize,
        length: usize,
    },
}

fn symbol_char(symbol: &u8) -> char {
    char::from(*symbol)
}
