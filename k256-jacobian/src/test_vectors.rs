//! secp256k1 test vectors.

pub mod group;
