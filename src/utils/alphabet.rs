//! Alphabet classification.
//!
//! A single scan over the input resolves the narrowest [`EncodingWidth`] able to
//! hold every symbol, and the [`MoleculeKind`] implied by the symbols seen. The
//! width only ever widens during a scan: `Nuc2 -> Nuc3 -> Nuc4 -> Pro5`.

use log::trace;

use crate::error::SequenceError;

/// Fixed code width selected for a sequence.
///
/// Variants are ordered by width, so promotion is a `max`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EncodingWidth {
    #[default]
    Undefined,
    /// `A C G T/U`
    Nuc2,
    /// `A C G T/U N -`
    Nuc3,
    /// Full IUPAC nucleotide alphabet with gap
    Nuc4,
    /// Amino acids, gap, stop and frameshift
    Pro5,
}

impl EncodingWidth {
    /// Bits used by one symbol.
    pub const fn bits(self) -> usize {
        match self {
            EncodingWidth::Undefined => 0,
            EncodingWidth::Nuc2 => 2,
            EncodingWidth::Nuc3 => 3,
            EncodingWidth::Nuc4 => 4,
            EncodingWidth::Pro5 => 5,
        }
    }

    /// The molecule a width implies when none is given explicitly.
    pub const fn default_molecule(self) -> MoleculeKind {
        match self {
            EncodingWidth::Undefined => MoleculeKind::Undefined,
            EncodingWidth::Nuc2 | EncodingWidth::Nuc3 | EncodingWidth::Nuc4 => MoleculeKind::Dna,
            EncodingWidth::Pro5 => MoleculeKind::Protein,
        }
    }

    /// Whether a molecule kind can be stored with this width.
    pub const fn supports(self, molecule: MoleculeKind) -> bool {
        match (self, molecule) {
            (_, MoleculeKind::Undefined) => true,
            (EncodingWidth::Undefined, _) => false,
            (EncodingWidth::Pro5, MoleculeKind::Protein) => true,
            (EncodingWidth::Pro5, _) => false,
            (_, MoleculeKind::Protein) => false,
            _ => true,
        }
    }

    /// Bytes needed to hold `element_count` symbols, including trailing padding.
    pub const fn byte_count(self, element_count: usize) -> usize {
        (element_count * self.bits()).div_ceil(8)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoleculeKind {
    #[default]
    Undefined,
    Dna,
    Rna,
    Protein,
}

impl MoleculeKind {
    pub const fn is_nucleotide(self) -> bool {
        matches!(self, MoleculeKind::Dna | MoleculeKind::Rna)
    }
}

/// The symbol groups the classifier distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolClass {
    /// `A C G T`
    Base,
    /// `U`
    Uracil,
    /// `N -`
    Placeholder,
    /// `R K B S W H V M Y`
    Ambiguity,
    /// `D`: ambiguity in nucleotide context, invalid in protein context
    AmbiguityD,
    /// `E F I L P Q X Z * !`
    ProteinOnly,
}

impl SymbolClass {
    fn of(symbol: u8) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            b'A' | b'T' | b'C' | b'G' => Some(SymbolClass::Base),
            b'U' => Some(SymbolClass::Uracil),
            b'N' | b'-' => Some(SymbolClass::Placeholder),
            b'R' | b'K' | b'B' | b'S' | b'W' | b'H' | b'V' | b'M' | b'Y' => {
                Some(SymbolClass::Ambiguity)
            }
            b'D' => Some(SymbolClass::AmbiguityD),
            b'E' | b'F' | b'I' | b'L' | b'P' | b'Q' | b'X' | b'Z' | b'*' | b'!' => {
                Some(SymbolClass::ProteinOnly)
            }
            _ => None,
        }
    }

    /// Narrowest width able to hold a symbol of this class.
    fn min_width(self) -> EncodingWidth {
        match self {
            SymbolClass::Base | SymbolClass::Uracil => EncodingWidth::Nuc2,
            SymbolClass::Placeholder => EncodingWidth::Nuc3,
            SymbolClass::Ambiguity | SymbolClass::AmbiguityD => EncodingWidth::Nuc4,
            SymbolClass::ProteinOnly => EncodingWidth::Pro5,
        }
    }
}

/// Result of a classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub width: EncodingWidth,
    pub molecule: MoleculeKind,
    pub element_count: usize,
}

/// Incremental classifier state.
#[derive(Debug, Default, Clone, Copy)]
struct Classifier {
    width: EncodingWidth,
    molecule: MoleculeKind,
    count: usize,
}

impl Classifier {
    fn push(&mut self, symbol: u8) -> Result<(), SequenceError> {
        let position = self.count;
        let class =
            SymbolClass::of(symbol).ok_or(SequenceError::InvalidSymbol { symbol, position })?;

        if self.width == EncodingWidth::Pro5 && class == SymbolClass::AmbiguityD {
            return Err(SequenceError::InvalidProteinSymbol { symbol, position });
        }

        let width = self.width.max(class.min_width());
        if width != self.width {
            trace!(
                "Promoting encoding {:?} -> {:?} on '{}' at {}",
                self.width,
                width,
                symbol as char,
                position
            );
            self.width = width;
        }

        let molecule = match (self.width, self.molecule, class) {
            (EncodingWidth::Pro5, _, _) => MoleculeKind::Protein,
            (_, MoleculeKind::Undefined | MoleculeKind::Dna, SymbolClass::Uracil) => {
                MoleculeKind::Rna
            }
            (_, MoleculeKind::Undefined, _) => MoleculeKind::Dna,
            (_, current, _) => current,
        };
        if molecule != self.molecule {
            trace!("Molecule {:?} -> {:?} at {}", self.molecule, molecule, position);
            self.molecule = molecule;
        }

        self.count += 1;
        Ok(())
    }

    fn finish(self) -> Classification {
        Classification {
            width: self.width,
            molecule: self.molecule,
            element_count: self.count,
        }
    }
}

/// Scans `seq` once and resolves its encoding width and molecule kind.
///
/// Symbols are matched case-insensitively. An empty input classifies as
/// `Undefined` for both width and molecule.
///
/// # Errors
///
/// Returns `SequenceError::InvalidSymbol` for a symbol outside every supported
/// alphabet, and `SequenceError::InvalidProteinSymbol` for a `D` seen after the
/// sequence was promoted to protein.
///
/// # Examples
///
/// ```rust
/// use bitseq::{classify, EncodingWidth, MoleculeKind};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let class = classify(b"ACGUN")?;
/// assert_eq!(class.width, EncodingWidth::Nuc3);
/// assert_eq!(class.molecule, MoleculeKind::Rna);
/// assert_eq!(class.element_count, 5);
/// # Ok(())
/// # }
/// ```
pub fn classify(seq: &[u8]) -> Result<Classification, SequenceError> {
    let mut classifier = Classifier::default();
    for &symbol in seq {
        classifier.push(symbol)?;
    }
    Ok(classifier.finish())
}
