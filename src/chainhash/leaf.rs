//! Leaf data is what gets hashed when a utxo is added to the utreexo state. Besides the output
//! itself it commits to the block that created it and its height, making it harder to attack
//! an utreexo-only node with made up outputs.
//!
//! The serialization is streamed straight into the leaf hash engine, see
//! [streaming_leaf_hash](super::tagged::streaming_leaf_hash).
use super::chain_hash::ChainHash;
use super::tagged::streaming_leaf_hash;
use super::tagged::LeafSink;
use super::tags::TAG_UTREEXO_V1;

/// Points to an output: the txid of the transaction that created it, and its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutPoint {
    pub txid: ChainHash,
    pub vout: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafData {
    /// A commitment to the block creating this utxo
    pub block_hash: ChainHash,
    /// The utxo's outpoint
    pub prevout: OutPoint,
    /// Header code is a compact commitment to the block height and whether or not this
    /// transaction is coinbase. It's defined as
    ///
    /// ```!
    /// header_code: u32 = if transaction.is_coinbase() {
    ///     (block_height << 1 ) | 1
    /// } else {
    ///     block_height << 1
    /// };
    /// ```
    pub header_code: u32,
    /// Value of the output, in satoshis
    pub amount: u64,
    pub script_pubkey: Vec<u8>,
}

impl LeafData {
    pub fn new(
        block_hash: ChainHash,
        prevout: OutPoint,
        height: u32,
        is_coinbase: bool,
        amount: u64,
        script_pubkey: Vec<u8>,
    ) -> Self {
        LeafData {
            block_hash,
            prevout,
            header_code: (height << 1) | is_coinbase as u32,
            amount,
            script_pubkey,
        }
    }

    pub fn height(&self) -> u32 {
        self.header_code >> 1
    }

    pub fn is_coinbase(&self) -> bool {
        self.header_code & 1 == 1
    }

    /// Writes the leaf as
    /// `block_hash || txid || vout || header_code || amount || compact_size(len(spk)) || spk`,
    /// integers in little-endian and hashes in internal order.
    pub fn serialize<S>(&self, sink: &mut S)
    where
        S: LeafSink,
    {
        sink.input(self.block_hash.as_bytes());
        sink.input(self.prevout.txid.as_bytes());
        sink.input(&self.prevout.vout.to_le_bytes());
        sink.input(&self.header_code.to_le_bytes());
        sink.input(&self.amount.to_le_bytes());
        write_compact_size(sink, self.script_pubkey.len() as u64);
        sink.input(&self.script_pubkey);
    }

    /// The commitment for this leaf, `sha512_256(sha512("UtreexoV1") x 2 || leafdata)`.
    /// # Example
    /// ```
    /// use chainhash::chainhash::leaf::{LeafData, OutPoint};
    /// use chainhash::chainhash::ChainHash;
    ///
    /// let prevout = OutPoint { txid: ChainHash::new([2; 32]), vout: 3 };
    /// let leaf = LeafData::new(ChainHash::new([1; 32]), prevout, 100, true, 5_000_000_000, vec![]);
    /// assert_eq!(leaf.height(), 100);
    /// assert!(leaf.is_coinbase());
    /// assert_ne!(leaf.leaf_hash(), ChainHash::all_zeros());
    /// ```
    pub fn leaf_hash(&self) -> ChainHash {
        streaming_leaf_hash(TAG_UTREEXO_V1, |writer| self.serialize(writer))
    }
}

/// Bitcoin's variable length integer: one byte below 0xfd, otherwise a marker byte followed by
/// a little-endian u16, u32 or u64.
fn write_compact_size<S>(sink: &mut S, n: u64)
where
    S: LeafSink,
{
    match n {
        0..=0xfc => sink.input(&[n as u8]),
        0xfd..=0xffff => {
            sink.input(&[0xfd]);
            sink.input(&(n as u16).to_le_bytes());
        }
        0x10000..=0xffff_ffff => {
            sink.input(&[0xfe]);
            sink.input(&(n as u32).to_le_bytes());
        }
        _ => {
            sink.input(&[0xff]);
            sink.input(&n.to_le_bytes());
        }
    }
}
