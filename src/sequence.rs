use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;
use std::str::FromStr;

use log::debug;

use crate::error::SequenceError;
use crate::utils::alphabet::{classify, Classification, EncodingWidth, MoleculeKind};
use crate::utils::packing::{invert, pack};
use crate::utils::unpacking::{symbol_at, unpack, DecodeView};

/// A nucleotide or protein sequence packed at the narrowest fixed width able
/// to hold every symbol.
///
/// Reversal only flips the iteration order. Complementing inverts the packed
/// bytes in place; the code layouts make the inverted codes decode to the
/// complementary bases.
///
/// Equality and hashing are structural: they compare the packed bytes and
/// the view flags, not the decoded string. `"ACGT"` reversed is not equal to
/// a freshly built `"TGCA"`; compare [`Sequence::to_vec`] for that.
///
/// # Examples
///
/// ```rust
/// use bitseq::{EncodingWidth, Sequence};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut seq = Sequence::new(b"AAAANTTT-CCG")?;
/// assert_eq!(seq.encoding_width(), EncodingWidth::Nuc3);
///
/// seq.reverse_complement()?;
/// assert_eq!(seq.get_string(), "CGG-AAANTTTT");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    buffer: Vec<u8>,
    element_count: usize,
    width: EncodingWidth,
    molecule: MoleculeKind,
    reversed: bool,
    complemented: bool,
}

impl Sequence {
    /// Classifies and packs `seq`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidSymbol` or
    /// `SequenceError::InvalidProteinSymbol` if `seq` holds a symbol outside
    /// the supported alphabets.
    pub fn new(seq: &[u8]) -> Result<Self, SequenceError> {
        let class = classify(seq)?;
        debug!(
            "Sequence::new: {} symbols classified as {:?}/{:?}",
            class.element_count, class.width, class.molecule
        );
        Self::encode(seq, class)
    }

    /// Packs `seq` with an explicit encoding instead of classifying it.
    ///
    /// An `Undefined` width falls back to [`Sequence::new`]. An `Undefined`
    /// molecule takes the width's default molecule.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::IncompatibleEncoding` when the molecule cannot be
    /// stored at `width`, and `SequenceError::InvalidSymbol` for a symbol the
    /// width cannot represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitseq::{EncodingWidth, MoleculeKind, Sequence, SequenceError};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let seq = Sequence::with_encoding(b"ACGT", EncodingWidth::Nuc4, MoleculeKind::Undefined)?;
    /// assert_eq!(seq.byte_count(), 2);
    /// assert_eq!(seq.molecule_kind(), MoleculeKind::Dna);
    ///
    /// assert!(matches!(
    ///     Sequence::with_encoding(b"ACGN", EncodingWidth::Nuc2, MoleculeKind::Dna),
    ///     Err(SequenceError::InvalidSymbol { symbol: b'N', position: 3 })
    /// ));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_encoding(
        seq: &[u8],
        width: EncodingWidth,
        molecule: MoleculeKind,
    ) -> Result<Self, SequenceError> {
        if width == EncodingWidth::Undefined {
            return Self::new(seq);
        }
        if !width.supports(molecule) {
            return Err(SequenceError::IncompatibleEncoding { width, molecule });
        }

        let molecule = match molecule {
            MoleculeKind::Undefined => width.default_molecule(),
            molecule => molecule,
        };
        debug!(
            "Sequence::with_encoding: {} symbols forced to {:?}/{:?}",
            seq.len(),
            width,
            molecule
        );
        Self::encode(
            seq,
            Classification {
                width,
                molecule,
                element_count: seq.len(),
            },
        )
    }

    fn encode(seq: &[u8], class: Classification) -> Result<Self, SequenceError> {
        let buffer = pack(seq, class.width)?;
        Ok(Self {
            buffer,
            element_count: class.element_count,
            width: class.width,
            molecule: class.molecule,
            reversed: false,
            complemented: false,
        })
    }

    /// Replaces the content with a newly classified `seq`.
    ///
    /// The view flags are reset. On error the previous content is kept.
    pub fn assign(&mut self, seq: &[u8]) -> Result<(), SequenceError> {
        debug!("Sequence::assign: replacing {} symbols", self.element_count);
        *self = Self::new(seq)?;
        Ok(())
    }

    /// Toggles the iteration order. The buffer is untouched.
    pub fn reverse(&mut self) {
        self.reversed = !self.reversed;
        debug!("Sequence::reverse: reversed is now {}", self.reversed);
    }

    /// Complements the sequence in place.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::ComplementProtein` for protein sequences, which
    /// are left unchanged.
    pub fn complement(&mut self) -> Result<(), SequenceError> {
        if self.molecule == MoleculeKind::Protein {
            return Err(SequenceError::ComplementProtein);
        }
        invert(&mut self.buffer, self.element_count, self.width);
        self.complemented = !self.complemented;
        debug!(
            "Sequence::complement: complemented is now {}",
            self.complemented
        );
        Ok(())
    }

    /// Reverses and complements the sequence.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::ComplementProtein` for protein sequences, which
    /// are left unchanged (the order is not reversed either).
    pub fn reverse_complement(&mut self) -> Result<(), SequenceError> {
        debug!("Sequence::reverse_complement");
        if self.molecule == MoleculeKind::Protein {
            return Err(SequenceError::ComplementProtein);
        }
        self.reverse();
        self.complement()
    }

    /// Decodes the sequence as currently viewed.
    pub fn get_string(&self) -> String {
        debug!(
            "Sequence::get_string: {} symbols, reversed={}, complemented={}",
            self.element_count, self.reversed, self.complemented
        );
        self.to_vec().into_iter().map(char::from).collect()
    }

    /// Decodes the sequence as currently viewed into a byte vector.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.element_count);
        unpack(
            &self.buffer,
            self.width,
            self.element_count,
            &self.view(),
            self.reversed,
            &mut out,
        );
        out
    }

    pub fn len(&self) -> usize {
        self.element_count
    }

    pub fn is_empty(&self) -> bool {
        self.element_count == 0
    }

    /// Returns the symbol at `index` of the current view.
    pub fn get(&self, index: usize) -> Result<u8, SequenceError> {
        if index >= self.element_count {
            return Err(SequenceError::IndexOutOfBounds {
                index,
                length: self.element_count,
            });
        }
        Ok(self.symbol(index, &self.view()))
    }

    /// Returns the symbols in `range` of the current view.
    pub fn slice(&self, range: Range<usize>) -> Result<Vec<u8>, SequenceError> {
        if range.start > range.end || range.end > self.element_count {
            return Err(SequenceError::InvalidRange {
                start: range.start,
                end: range.end,
                length: self.element_count,
            });
        }

        let view = self.view();
        Ok(range.map(|i| self.symbol(i, &view)).collect())
    }

    /// Iterates over the symbols of the current view.
    pub fn iter(&self) -> Symbols<'_> {
        Symbols {
            seq: self,
            view: self.view(),
            front: 0,
            back: self.element_count,
        }
    }

    pub fn encoding_width(&self) -> EncodingWidth {
        self.width
    }

    pub fn molecule_kind(&self) -> MoleculeKind {
        self.molecule
    }

    pub fn bits_per_element(&self) -> usize {
        self.width.bits()
    }

    pub fn byte_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn is_complemented(&self) -> bool {
        self.complemented
    }

    fn view(&self) -> DecodeView {
        DecodeView::new(self.molecule, self.complemented)
    }

    /// Symbol at a logical position, which maps onto the buffer through the
    /// reverse flag.
    fn symbol(&self, index: usize, view: &DecodeView) -> u8 {
        let physical = if self.reversed {
            self.element_count - 1 - index
        } else {
            index
        };
        symbol_at(&self.buffer, self.width, physical, view)
    }
}

/// Iterator over the decoded symbols of a [`Sequence`].
#[derive(Debug, Clone)]
pub struct Symbols<'a> {
    seq: &'a Sequence,
    view: DecodeView,
    front: usize,
    back: usize,
}

impl Iterator for Symbols<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        let symbol = self.seq.symbol(self.front, &self.view);
        self.front += 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<u8> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Symbols<'_> {
    fn next_back(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.seq.symbol(self.back, &self.view))
    }
}

impl ExactSizeIterator for Symbols<'_> {}

impl FusedIterator for Symbols<'_> {}

impl<'a> IntoIterator for &'a Sequence {
    type Item = u8;
    type IntoIter = Symbols<'a>;

    fn into_iter(self) -> Symbols<'a> {
        self.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_string())
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<&str> for Sequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Sequence {
    type Error = SequenceError;

    fn try_from(seq: &[u8]) -> Result<Self, Self::Error> {
        Self::new(seq)
    }
}
