//! This module contains the hash type and every hashing rule built on top of it. None of the
//! functions here keep state, the only shared value is the process-wide [TagTable], built once
//! and only ever read afterwards.
//!
//! # [ChainHash]
//! A 32 byte hash. Internally (and on the wire) bytes are kept in the order the hash function
//! produced them, but text and JSON use the byte-reversed hex form.
//!
//! ## Example
//! ```
//!   use chainhash::chainhash::chain_hash::ChainHash;
//!   use std::str::FromStr;
//!
//!   let hash = ChainHash::from_str("01").unwrap();
//!   // The display string is byte-reversed, so the 0x01 lands in the last internal byte
//!   assert_eq!(hash.as_bytes()[0], 0x01);
//!   assert_eq!(
//!       hash.to_string(),
//!       "0000000000000000000000000000000000000000000000000000000000000001"
//!   );
//! ```
//!
//! # Tagged hashes
//! [tagged_hash] binds a message to a context, as described in BIP-340:
//! `sha256(sha256(tag) || sha256(tag) || msg)`. [streaming_leaf_hash] does the same with
//! SHA-512 tag digests and a SHA-512/256 engine, letting the caller stream the leaf data.
//! ## Example
//! ```
//!   use chainhash::chainhash::{tagged_hash, streaming_leaf_hash, tags, LeafSink};
//!
//!   let challenge = tagged_hash(tags::TAG_BIP0340_CHALLENGE, &[b"abc"]);
//!   assert_eq!(
//!       challenge.as_bytes().to_vec(),
//!       hex::decode("770a5b7e7c304bbcc3ea107343ff951dd404312ef418db0c3b94e2ebfbb50087").unwrap()
//!   );
//!
//!   let leaf = streaming_leaf_hash(tags::TAG_UTREEXO_V1, |writer| writer.input(b"abc"));
//!   assert_eq!(
//!       leaf.as_bytes().to_vec(),
//!       hex::decode("265be0d0f97c24121c6970af9db93a2008c8f8374b74ab94e46624cc6faf2824").unwrap()
//!   );
//! ```
//!
//! # Packed integers
//! [pack_u64s] and [unpack_u64s] store four little-endian `u64`s per hash, padding the last hash
//! with `u64::MAX`.
//! ## Example
//! ```
//!   use chainhash::chainhash::{pack_u64s, unpack_u64s};
//!
//!   let packed = pack_u64s(&[1, 2, 3, 4, 5]);
//!   assert_eq!(packed.len(), 2);
//!   assert_eq!(unpack_u64s(&packed), vec![1, 2, 3, 4, 5]);
//! ```
pub mod chain_hash;
pub mod error;
pub mod leaf;
pub mod packed;
pub mod tagged;
pub mod tags;

pub use chain_hash::ChainHash;
pub use error::Error;
pub use packed::pack_u64s;
pub use packed::unpack_u64s;
pub use tagged::streaming_leaf_hash;
pub use tagged::tagged_hash;
pub use tagged::LeafSink;
pub use tagged::LeafWriter;
pub use tags::TagTable;
