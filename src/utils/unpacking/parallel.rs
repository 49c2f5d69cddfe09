use rayon::prelude::*;

use crate::utils::codec::SymbolCodec;
use crate::utils::GROUPS_PER_TASK;

use super::naive;
use super::DecodeView;

/// Decodes on the rayon pool, one run of whole bytes per task.
pub fn unpack_into<C: SymbolCodec>(
    buffer: &[u8],
    count: usize,
    view: &DecodeView,
    reversed: bool,
    out: &mut Vec<u8>,
) {
    let start = out.len();
    let symbols_per_task = 8 * GROUPS_PER_TASK;
    out.resize(start + count, 0);

    out[start..]
        .par_chunks_mut(symbols_per_task)
        .enumerate()
        .for_each(|(task, slots)| {
            let offset = task * symbols_per_task;
            for (j, slot) in slots.iter_mut().enumerate() {
                *slot = naive::symbol_at::<C>(buffer, offset + j, view);
            }
        });

    if reversed {
        out[start..].reverse();
    }
}
