//! Well known hashing domains and the [TagTable] holding their precomputed digests.
//!
//! Tagged hashes start with the digest of the tag written twice, so hashing the same constant
//! string over and over on every call is a waste. The table keeps those digests around: SHA-256
//! digests for the BIP-340/341 tags, SHA-512 digests for the utreexo leaf tags.
//!
//! The process-wide table is built on first use by [TagTable::global] and never written again,
//! so any number of threads may read it without locking. Unknown tags are hashed on demand and
//! never inserted.
use std::collections::HashMap;
use std::sync::OnceLock;

use bitcoin_hashes::sha256;
use bitcoin_hashes::sha512;
use bitcoin_hashes::Hash;
use tracing::debug;
use tracing::trace;

/// BIP-340 tag for challenges.
pub const TAG_BIP0340_CHALLENGE: &[u8] = b"BIP0340/challenge";

/// BIP-340 tag for aux data.
pub const TAG_BIP0340_AUX: &[u8] = b"BIP0340/aux";

/// BIP-340 tag for nonces.
pub const TAG_BIP0340_NONCE: &[u8] = b"BIP0340/nonce";

/// Tag used by BIP-341 to build the signature hash.
pub const TAG_TAP_SIGHASH: &[u8] = b"TapSighash";

/// Tag prefix for the digest of a tapscript leaf.
pub const TAG_TAP_LEAF: &[u8] = b"TapLeaf";

/// Tag prefix for hashing two tap leaves into a taproot branch node.
pub const TAG_TAP_BRANCH: &[u8] = b"TapBranch";

/// Tag prefix for the tweak that commits a public key to a taproot branch root.
pub const TAG_TAP_TWEAK: &[u8] = b"TapTweak";

/// Tag used to build the utreexo v1 leaf hashes committed into the accumulator.
pub const TAG_UTREEXO_V1: &[u8] = b"UtreexoV1";

/// Tags whose SHA-256 digest is precomputed in the global table.
pub const KNOWN_TAGS: [&[u8]; 7] = [
    TAG_BIP0340_CHALLENGE,
    TAG_BIP0340_AUX,
    TAG_BIP0340_NONCE,
    TAG_TAP_SIGHASH,
    TAG_TAP_LEAF,
    TAG_TAP_BRANCH,
    TAG_TAP_TWEAK,
];

/// Tags whose SHA-512 digest is precomputed in the global table.
pub const KNOWN_LEAF_TAGS: [&[u8]; 1] = [TAG_UTREEXO_V1];

/// SHA-512 of `UtreexoV1` (`5574726565786f5631` in hex).
pub const UTREEXO_TAG_V1: [u8; 64] = [
    0x5b, 0x83, 0x2d, 0xb8, 0xca, 0x26, 0xc2, 0x5b, 0xe1, 0xc5, 0x42, 0xd6, 0xcc, 0xed, 0xdd, 0xa8,
    0xc1, 0x45, 0x61, 0x5c, 0xff, 0x5c, 0x35, 0x72, 0x7f, 0xb3, 0x46, 0x26, 0x10, 0x80, 0x7e, 0x20,
    0xae, 0x53, 0x4d, 0xc3, 0xf6, 0x42, 0x99, 0x19, 0x99, 0x31, 0x77, 0x2e, 0x03, 0x78, 0x7d, 0x18,
    0x15, 0x6e, 0xb3, 0x15, 0x1e, 0x0e, 0xd1, 0xb3, 0x09, 0x8b, 0xdc, 0x84, 0x45, 0x86, 0x18, 0x85,
];

/// [UTREEXO_TAG_V1] twice, ready to be fed to a leaf hash engine in one go.
pub const UTREEXO_TAG_V1_APPEND: [u8; 128] = {
    let mut doubled = [0; 128];
    let mut i = 0;
    while i < 64 {
        doubled[i] = UTREEXO_TAG_V1[i];
        doubled[i + 64] = UTREEXO_TAG_V1[i];
        i += 1;
    }
    doubled
};

static GLOBAL_TAG_TABLE: OnceLock<TagTable> = OnceLock::new();

/// Immutable map from tag to its digest, one map per hash width.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    narrow: HashMap<Vec<u8>, [u8; 32]>,
    wide: HashMap<Vec<u8>, [u8; 64]>,
}

impl TagTable {
    /// Builds a table holding the SHA-256 digest of every tag in `narrow_tags` and the
    /// SHA-512 digest of every tag in `wide_tags`.
    /// # Example
    /// ```
    /// use chainhash::chainhash::tags::{TagTable, TAG_TAP_LEAF};
    /// let table = TagTable::new(&[TAG_TAP_LEAF], &[]);
    /// assert!(table.narrow_digest_cached(TAG_TAP_LEAF).is_some());
    /// assert!(table.wide_digest_cached(TAG_TAP_LEAF).is_none());
    /// ```
    pub fn new(narrow_tags: &[&[u8]], wide_tags: &[&[u8]]) -> Self {
        let narrow = narrow_tags
            .iter()
            .map(|tag| (tag.to_vec(), sha256::Hash::hash(tag).to_byte_array()))
            .collect();
        let wide = wide_tags
            .iter()
            .map(|tag| (tag.to_vec(), sha512::Hash::hash(tag).to_byte_array()))
            .collect();

        TagTable { narrow, wide }
    }

    /// The process-wide table of [KNOWN_TAGS] and [KNOWN_LEAF_TAGS]. Built the first time it's
    /// asked for, shared by reference afterwards.
    pub fn global() -> &'static TagTable {
        GLOBAL_TAG_TABLE.get_or_init(|| {
            let table = TagTable::new(&KNOWN_TAGS, &KNOWN_LEAF_TAGS);
            debug!(
                narrow = table.narrow.len(),
                wide = table.wide.len(),
                "built global tag table"
            );
            table
        })
    }

    pub fn narrow_digest_cached(&self, tag: &[u8]) -> Option<&[u8; 32]> {
        self.narrow.get(tag)
    }

    pub fn wide_digest_cached(&self, tag: &[u8]) -> Option<&[u8; 64]> {
        self.wide.get(tag)
    }

    /// SHA-256 of `tag`, from the table if we have it.
    pub fn narrow_digest(&self, tag: &[u8]) -> [u8; 32] {
        match self.narrow.get(tag) {
            Some(digest) => *digest,
            None => {
                trace!(tag = %String::from_utf8_lossy(tag), "tag not in table, hashing it");
                sha256::Hash::hash(tag).to_byte_array()
            }
        }
    }

    /// SHA-512 of `tag`, from the table if we have it.
    pub fn wide_digest(&self, tag: &[u8]) -> [u8; 64] {
        match self.wide.get(tag) {
            Some(digest) => *digest,
            None => {
                trace!(tag = %String::from_utf8_lossy(tag), "leaf tag not in table, hashing it");
                sha512::Hash::hash(tag).to_byte_array()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use bitcoin_hashes::sha256;
    use bitcoin_hashes::sha512;
    use bitcoin_hashes::Hash;

    use super::TagTable;
    use super::KNOWN_LEAF_TAGS;
    use super::KNOWN_TAGS;
    use super::TAG_UTREEXO_V1;
    use super::UTREEXO_TAG_V1;
    use super::UTREEXO_TAG_V1_APPEND;

    #[test]
    fn test_utreexo_tag_constant() {
        assert_eq!(sha512::Hash::hash(TAG_UTREEXO_V1).to_byte_array(), UTREEXO_TAG_V1);
        assert_eq!(
            TagTable::global().wide_digest_cached(TAG_UTREEXO_V1),
            Some(&UTREEXO_TAG_V1)
        );
        assert_eq!(&UTREEXO_TAG_V1_APPEND[..64], &UTREEXO_TAG_V1[..]);
        assert_eq!(&UTREEXO_TAG_V1_APPEND[64..], &UTREEXO_TAG_V1[..]);
    }
    #[test]
    fn test_global_table_contents() {
        let table = TagTable::global();
        for tag in KNOWN_TAGS {
            assert_eq!(
                table.narrow_digest_cached(tag),
                Some(&sha256::Hash::hash(tag).to_byte_array())
            );
            assert!(table.wide_digest_cached(tag).is_none());
        }
        for tag in KNOWN_LEAF_TAGS {
            assert!(table.wide_digest_cached(tag).is_some());
        }
        assert!(std::ptr::eq(table, TagTable::global()));
    }
    #[test]
    fn test_unknown_tags_are_not_inserted() {
        let table = TagTable::global();
        let tag = b"NotAKnownTag";

        assert_eq!(
            table.narrow_digest(tag),
            sha256::Hash::hash(tag).to_byte_array()
        );
        assert_eq!(
            table.wide_digest(tag),
            sha512::Hash::hash(tag).to_byte_array()
        );
        assert!(table.narrow_digest_cached(tag).is_none());
        assert!(table.wide_digest_cached(tag).is_none());
    }
    #[test]
    fn test_concurrent_reads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| TagTable::global().narrow_digest(KNOWN_TAGS[0]))
            })
            .collect();
        let expected = sha256::Hash::hash(KNOWN_TAGS[0]).to_byte_array();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
