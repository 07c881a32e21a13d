//! Packs `u64`s into [ChainHash]es, so integer metadata can live wherever hashes do.
//!
//! Each hash holds four little-endian `u64`s. If the number of integers isn't a multiple of
//! four, the unused slots of the last hash are set to [PACKED_SENTINEL], which is how
//! [unpack_u64s] knows where the data ends.
//!
//! A real value of `u64::MAX` can't survive this: it's read back as the end marker, and
//! everything after it is dropped. [pack_u64s] logs a warning when that happens but still packs
//! the data as asked.
use tracing::warn;

use super::chain_hash::ChainHash;
use super::chain_hash::HASH_SIZE;

/// Marks an unused slot in the last packed hash.
pub const PACKED_SENTINEL: u64 = u64::MAX;

/// How many `u64`s fit into one hash.
pub const U64S_PER_HASH: usize = HASH_SIZE / 8;

/// Packs `ints` into `ceil(ints.len() / 4)` hashes. Slot `i % 4` of hash `i / 4` holds
/// `ints[i]` in little-endian, leftover slots in the last hash hold [PACKED_SENTINEL].
/// # Example
/// ```
/// use chainhash::chainhash::packed::pack_u64s;
///
/// assert!(pack_u64s(&[]).is_empty());
/// let packed = pack_u64s(&[1, 2, 3, 4, 5]);
/// assert_eq!(packed.len(), 2);
/// assert_eq!(&packed[1][..8], &5u64.to_le_bytes());
/// assert_eq!(&packed[1][8..], &[0xff; 24]);
/// ```
pub fn pack_u64s(ints: &[u64]) -> Vec<ChainHash> {
    if ints.contains(&PACKED_SENTINEL) {
        warn!(
            len = ints.len(),
            "packing u64::MAX, it will be read back as the end of the data"
        );
    }

    ints.chunks(U64S_PER_HASH)
        .map(|chunk| {
            let mut hash = [0xff; HASH_SIZE];
            for (slot, int) in hash.chunks_exact_mut(8).zip(chunk) {
                slot.copy_from_slice(&int.to_le_bytes());
            }
            ChainHash::new(hash)
        })
        .collect()
}

/// Reads back the `u64`s packed by [pack_u64s]. Reading stops at the first [PACKED_SENTINEL],
/// nothing after it is returned.
/// # Example
/// ```
/// use chainhash::chainhash::packed::{pack_u64s, unpack_u64s};
///
/// let ints = vec![10, 20, 30, 40, 50, 60];
/// assert_eq!(unpack_u64s(&pack_u64s(&ints)), ints);
/// ```
pub fn unpack_u64s(hashes: &[ChainHash]) -> Vec<u64> {
    let mut ints = Vec::with_capacity(hashes.len() * U64S_PER_HASH);
    for hash in hashes {
        for slot in hash.chunks_exact(8) {
            let mut bytes = [0; 8];
            bytes.copy_from_slice(slot);
            let read = u64::from_le_bytes(bytes);

            // Padding, we are done
            if read == PACKED_SENTINEL {
                return ints;
            }

            ints.push(read);
        }
    }

    ints
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    use super::pack_u64s;
    use super::unpack_u64s;
    use super::PACKED_SENTINEL;
    use crate::chainhash::chain_hash::ChainHash;

    fn block(ints: [u64; 4]) -> ChainHash {
        let mut bytes = Vec::new();
        for int in ints {
            bytes.extend_from_slice(&int.to_le_bytes());
        }
        ChainHash::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_pack_empty() {
        assert!(pack_u64s(&[]).is_empty());
        assert!(unpack_u64s(&[]).is_empty());
    }
    #[test]
    fn test_pack_full_block() {
        let packed = pack_u64s(&[1, 2, 3, 4]);
        assert_eq!(packed, vec![block([1, 2, 3, 4])]);
        assert_eq!(unpack_u64s(&packed), vec![1, 2, 3, 4]);
    }
    #[test]
    fn test_pack_partial_block() {
        let packed = pack_u64s(&[1, 2, 3, 4, 5]);
        let max = PACKED_SENTINEL;
        assert_eq!(packed, vec![block([1, 2, 3, 4]), block([5, max, max, max])]);
        assert_eq!(unpack_u64s(&packed), vec![1, 2, 3, 4, 5]);

        let packed = pack_u64s(&[7, 8, 9]);
        assert_eq!(packed, vec![block([7, 8, 9, max])]);

        let packed = pack_u64s(&[0]);
        assert_eq!(packed, vec![block([0, max, max, max])]);
        assert_eq!(unpack_u64s(&packed), vec![0]);
    }
    #[test]
    fn test_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 0..=17 {
            let ints: Vec<u64> = (0..len)
                .map(|_| rng.gen_range(0..PACKED_SENTINEL))
                .collect();
            let packed = pack_u64s(&ints);
            assert_eq!(packed.len(), (len + 3) / 4);
            assert_eq!(unpack_u64s(&packed), ints);
        }
    }
    #[test]
    fn test_sentinel_collision_is_lossy() {
        let ints = vec![1, PACKED_SENTINEL, 3, 4, 5];
        let packed = pack_u64s(&ints);
        assert_eq!(packed.len(), 2);
        assert_eq!(unpack_u64s(&packed), vec![1]);
    }
    #[test]
    fn test_unpack_stops_at_first_sentinel() {
        let max = PACKED_SENTINEL;
        let hashes = vec![block([1, max, 2, 3]), block([4, 5, 6, 7])];
        assert_eq!(unpack_u64s(&hashes), vec![1]);
    }
}
