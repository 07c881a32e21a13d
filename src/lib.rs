//! # Chainhash
//!
//! Chainhash holds the hash primitives shared by every component of a utreexo-enabled node:
//! the 32 byte [ChainHash](chainhash::chain_hash::ChainHash) identifier, BIP-340 style tagged
//! hashes, the SHA-512/256 tagged hash used to commit leaves into the
//! [Utreexo](https://eprint.iacr.org/2019/611.pdf) accumulator, and a codec that packs `u64`s
//! into hash sized blocks.
//!
//! Everything here has to be reproduced bit for bit by wallets, validators and the accumulator
//! itself, so byte order, padding and domain separation are fixed and tested against known
//! vectors.
//!
//! For more information, check each module's documentation.

pub mod chainhash;
