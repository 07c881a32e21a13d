//! Domain separated hashes.
//!
//! [tagged_hash] implements the BIP-340 tagged hash,
//! `sha256(sha256(tag) || sha256(tag) || msg)`, over any number of message fragments.
//!
//! [streaming_leaf_hash] is what the utreexo accumulator uses for its leaves,
//! `sha512_256(sha512(tag) || sha512(tag) || leafdata)`. Leaves can be big and are usually
//! serialized field by field, so instead of a buffer the caller gets a [LeafWriter] and writes
//! straight into the hash engine.
//!
//! Both functions look the tag up in the global [TagTable] first. The table is only a shortcut,
//! the result is the same for tags that aren't in there.
use bitcoin_hashes::sha256;
use bitcoin_hashes::sha512_256;
use bitcoin_hashes::Hash;
use bitcoin_hashes::HashEngine;

use super::chain_hash::ChainHash;
use super::tags::TagTable;

/// Anything leaf data can be serialized into, one field at a time.
pub trait LeafSink {
    fn input(&mut self, bytes: &[u8]);
}

impl LeafSink for Vec<u8> {
    fn input(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// A sink for leaf data, feeding everything written into a SHA-512/256 engine. Writing can't
/// fail, the [std::io::Write] impl is only there so existing encoders can write into it.
pub struct LeafWriter {
    engine: sha512_256::HashEngine,
}

impl LeafWriter {
    fn new(tag_digest: &[u8; 64]) -> Self {
        let mut engine = sha512_256::Hash::engine();
        engine.input(tag_digest);
        engine.input(tag_digest);
        LeafWriter { engine }
    }

    /// Bytes written so far, including the doubled tag digest.
    pub fn n_bytes_hashed(&self) -> usize {
        self.engine.n_bytes_hashed()
    }

    fn finalize(self) -> ChainHash {
        sha512_256::Hash::from_engine(self.engine).into()
    }
}

impl LeafSink for LeafWriter {
    fn input(&mut self, bytes: &[u8]) {
        self.engine.input(bytes);
    }
}

impl std::io::Write for LeafWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.input(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl TagTable {
    /// BIP-340 tagged hash of `msgs` concatenated in order, using this table's digests.
    pub fn tagged_hash<M>(&self, tag: &[u8], msgs: &[M]) -> ChainHash
    where
        M: AsRef<[u8]>,
    {
        let tag_digest = self.narrow_digest(tag);

        let mut engine = sha256::Hash::engine();
        engine.input(&tag_digest);
        engine.input(&tag_digest);
        for msg in msgs {
            engine.input(msg.as_ref());
        }

        // Internal order, the digest is not reversed
        sha256::Hash::from_engine(engine).into()
    }

    /// Tagged SHA-512/256 hash of whatever `serialize` writes, using this table's digests.
    /// `serialize` is called exactly once, before the hash is finalized.
    pub fn streaming_leaf_hash<F>(&self, tag: &[u8], serialize: F) -> ChainHash
    where
        F: FnOnce(&mut LeafWriter),
    {
        let tag_digest = self.wide_digest(tag);

        let mut writer = LeafWriter::new(&tag_digest);
        serialize(&mut writer);
        writer.finalize()
    }
}

/// Implements the tagged hash scheme described in BIP-340, binding `msgs` to the context
/// named by `tag`: `sha256(sha256(tag) || sha256(tag) || msgs[0] || msgs[1] || ...)`.
///
/// The result is in internal byte order.
/// # Example
/// ```
/// use chainhash::chainhash::tagged::tagged_hash;
/// use chainhash::chainhash::tags::TAG_BIP0340_CHALLENGE;
///
/// // Fragments are simply concatenated
/// let one = tagged_hash(TAG_BIP0340_CHALLENGE, &[&b"abc"[..]]);
/// let two = tagged_hash(TAG_BIP0340_CHALLENGE, &[&b"a"[..], &b"bc"[..]]);
/// assert_eq!(one, two);
/// ```
pub fn tagged_hash<M>(tag: &[u8], msgs: &[M]) -> ChainHash
where
    M: AsRef<[u8]>,
{
    TagTable::global().tagged_hash(tag, msgs)
}

/// Tagged hash for utreexo leaves, `sha512_256(sha512(tag) || sha512(tag) || leafdata)`, where
/// `leafdata` is whatever `serialize` writes into the [LeafWriter] it's given.
/// # Example
/// ```
/// use std::io::Write;
///
/// use chainhash::chainhash::tagged::streaming_leaf_hash;
/// use chainhash::chainhash::tagged::LeafSink;
/// use chainhash::chainhash::tags::TAG_UTREEXO_V1;
///
/// let streamed = streaming_leaf_hash(TAG_UTREEXO_V1, |writer| {
///     writer.input(b"a");
///     writer.input(b"bc");
/// });
/// let written = streaming_leaf_hash(TAG_UTREEXO_V1, |writer| {
///     writer.write_all(b"abc").unwrap();
/// });
/// assert_eq!(streamed, written);
/// ```
pub fn streaming_leaf_hash<F>(tag: &[u8], serialize: F) -> ChainHash
where
    F: FnOnce(&mut LeafWriter),
{
    TagTable::global().streaming_leaf_hash(tag, serialize)
}
