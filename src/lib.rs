//! A library for compact fixed-width bit packing of biological sequences
//!
//! Each symbol is stored with the fewest bits the richest alphabet in the
//! sequence needs: 2 bits for `ACGT`, 3 bits once `N` or `-` appear, 4 bits for
//! the IUPAC ambiguity codes and 5 bits for amino acids. Sequences can be
//! reversed without touching the packed bytes and complemented in place.
//!
//! ```rust
//! use bitseq::{EncodingWidth, MoleculeKind, Sequence};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut seq = Sequence::new(b"AAAATTTCCG")?;
//! assert_eq!(seq.encoding_width(), EncodingWidth::Nuc2);
//! assert_eq!(seq.molecule_kind(), MoleculeKind::Dna);
//! assert_eq!(seq.byte_count(), 3);
//!
//! seq.reverse_complement()?;
//! assert_eq!(seq.get_string(), "CGGAAATTTT");
//! # Ok(())
//! # }
//! ```

mod error;
mod sequence;
mod utils;

pub use error::SequenceError;
pub use sequence::{Sequence, Symbols};
pub use utils::{
    analysis::{GCContent, SymbolCount},
    classify, Classification, EncodingWidth, MoleculeKind,
};

#[cfg(feature = "parallel")]
pub use utils::PARALLEL_MIN_ELEMENTS;
