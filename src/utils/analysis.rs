use std::collections::BTreeMap;

use crate::sequence::Sequence;

pub trait GCContent {
    fn gc_content(&self) -> f64;
}

impl GCContent for Sequence {
    /// Percentage of `G`, `C` and `S` among the symbols of a nucleotide
    /// sequence. Protein and empty sequences report 0.
    fn gc_content(&self) -> f64 {
        if self.is_empty() || !self.molecule_kind().is_nucleotide() {
            return 0.0;
        }
        let gc_count = self
            .iter()
            .filter(|&b| matches!(b, b'G' | b'C' | b'S'))
            .count();
        (gc_count as f64 / self.len() as f64) * 100.0
    }
}

pub trait SymbolCount {
    fn symbol_counts(&self) -> BTreeMap<u8, usize>;
}

impl SymbolCount for Sequence {
    fn symbol_counts(&self) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for symbol in self.to_vec() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}
