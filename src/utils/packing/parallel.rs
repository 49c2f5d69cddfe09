use rayon::prelude::*;

use crate::error::SequenceError;
use crate::utils::codec::SymbolCodec;
use crate::utils::GROUPS_PER_TASK;

use super::naive;

/// Packs on the rayon pool.
///
/// Eight symbols always fill exactly `C::BITS` bytes, so each task owns a run
/// of whole bytes and no two tasks write to the same byte.
pub fn pack_into<C: SymbolCodec>(seq: &[u8], buffer: &mut [u8]) -> Result<(), SequenceError> {
    let symbols_per_task = 8 * GROUPS_PER_TASK;
    let bytes_per_task = C::BITS * GROUPS_PER_TASK;

    buffer
        .par_chunks_mut(bytes_per_task)
        .zip(seq.par_chunks(symbols_per_task))
        .enumerate()
        .filter_map(|(task, (bytes, symbols))| {
            naive::pack_into::<C>(symbols, bytes, task * symbols_per_task).err()
        })
        .min_by_key(error_position)
        .map_or(Ok(()), Err)
}

/// Tasks fail independently; the lowest position is reported, as the serial
/// packer would.
fn error_position(err: &SequenceError) -> usize {
    match err {
        SequenceError::InvalidSymbol { position, .. } => *position,
        _ => usize::MAX,
    }
}

pub fn invert(buffer: &mut [u8]) {
    buffer.par_iter_mut().for_each(|byte| *byte = !*byte);
}
