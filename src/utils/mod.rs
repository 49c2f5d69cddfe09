pub mod alphabet;
pub mod analysis;
pub mod codec;
pub mod packing;
pub mod unpacking;

pub use alphabet::{classify, Classification, EncodingWidth, MoleculeKind};

/// Sequences with at least this many symbols are packed, complemented and
/// decoded on the rayon thread pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_MIN_ELEMENTS: usize = 1 << 16;

/// Groups of eight symbols handed to one parallel task. A group always spans
/// a whole number of bytes.
#[cfg(feature = "parallel")]
pub(crate) const GROUPS_PER_TASK: usize = 4096;
