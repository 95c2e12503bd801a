//! Fixed DSA domain-parameter groups.
//!
//! Only two groups exist, selected by a nominal keysize label. Both come from
//! the FIPS 186-3 example sets generated under A.2.3 (verifiable canonical
//! generation of `g`), and each is paired with a digest whose output length
//! equals the bit length of its `q`:
//!
//! | label | `p` bits | `q` bits | digest  |
//! |-------|----------|----------|---------|
//! | 128   | 1024     | 160      | SHA-1   |
//! | 256   | 2048     | 256      | SHA-256 |
//!
//! The 128 group is for tests and interop with legacy assertions only.
//! No code path synthesizes parameters at runtime.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use num_bigint_dig::BigUint;
use num_traits::Zero;
use ring::digest;

use crate::error::CryptoError;

/// A decoded `p` may be up to this many bits shorter than the canonical one
/// and still select its group. Leading zero nibbles are dropped by the hex
/// encoding, and a 30-bit shortfall has probability around 2^-30.
const P_BIT_LENGTH_TOLERANCE: usize = 30;

// ---------------------------------------------------------------------------
// Group constants
// ---------------------------------------------------------------------------

const DS128_P: &str = "ff600483db6abfc5b45eab78594b3533d550d9f1bf2a992a7a8daa6dc34f8045ad4e6e0c429d334eeeaaefd7e23d4810be00e4cc1492cba325ba81ff2d5a5b305a8d17eb3bf4a06a349d392e00d329744a5179380344e82a18c47933438f891e22aeef812d69c8f75e326cb70ea000c3f776dfdbd604638c2ef717fc26d02e17";
const DS128_Q: &str = "e21e04f911d1ed7991008ecaab3bf775984309c3";
const DS128_G: &str = "c52a4a0ff3b7e61fdf1867ce84138369a6154f4afa92966e3c827e25cfa6cf508b90e5de419e1337e07a2e9e2a3cd5dea704d175f8ebf6af397d69e110b96afb17c7a03259329e4829b0d03bbc7896b15b4ade53e130858cc34d96269aa89041f409136c7242a38895c9d5bccad4f389af1d7a4bd1398bd072dffa896233397a";

const DS256_P: &str = "d6c4e5045697756c7a312d02c2289c25d40f9954261f7b5876214b6df109c738b76226b199bb7e33f8fc7ac1dcc316e1e7c78973951bfc6ff2e00cc987cd76fcfb0b8c0096b0b460fffac960ca4136c28f4bfb580de47cf7e7934c3985e3b3d943b77f06ef2af3ac3494fc3c6fc49810a63853862a02bb1c824a01b7fc688e4028527a58ad58c9d512922660db5d505bc263af293bc93bcd6d885a157579d7f52952236dd9d06a4fc3bc2247d21f1a70f5848eb0176513537c983f5a36737f01f82b44546e8e7f0fabc457e3de1d9c5dba96965b10a2a0580b0ad0f88179e10066107fb74314a07e6745863bc797b7002ebec0b000a98eb697414709ac17b401";
const DS256_Q: &str = "b1e370f6472c8754ccd75e99666ec8ef1fd748b748bbbc08503d82ce8055ab3b";
const DS256_G: &str = "9a8269ab2e3b733a5242179d8f8ddb17ff93297d9eab00376db211a22b19c854dfa80166df2132cbc51fb224b0904abb22da2c7b7850f782124cb575b116f41ea7c4fc75b1d77525204cd7c23a15999004c23cdeb72359ee74e886a1dde7855ae05fe847447d0a68059002c3819a75dc7dcbb30e39efac36e07e2c404b7ca98b263b25fa314ba93c0625718bd489cea6d04ba4b0b7f156eeb4c56c44b50e4fb5bce9d7ae0d55b379225feb0214a04bed72f33e0664d290e7c840df3e2abb5e48189fa4e90646f1867db289c6560476799f7be8420a6dc01d078de437f280fff2d7ddf1248d56e1a54b933a41629d6c252983c58795105802d30d7bcd819cf6ef";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Digest bound to a parameter group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-1 (160-bit output), 128 group only.
    Sha1,
    /// SHA-256 (256-bit output).
    Sha256,
}

impl HashAlgorithm {
    /// Map to the corresponding `ring::digest::Algorithm`.
    pub(crate) fn to_ring_algorithm(self) -> &'static digest::Algorithm {
        match self {
            Self::Sha1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => &digest::SHA256,
        }
    }

    /// Lowercase identifier (`"sha1"`, `"sha256"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// Digest output length in bits.
    #[must_use]
    pub const fn output_bits(self) -> usize {
        match self {
            Self::Sha1 => 160,
            Self::Sha256 => 256,
        }
    }
}

/// Nominal keysize label selecting one parameter group.
///
/// The label is not a bit count of any key component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 1024/160 group with SHA-1. Test and legacy use.
    Ds128,
    /// 2048/256 group with SHA-256.
    Ds256,
}

impl KeySize {
    /// Every supported keysize, in registry order.
    pub const ALL: [Self; 2] = [Self::Ds128, Self::Ds256];

    /// Numeric label (`128` or `256`).
    #[must_use]
    pub const fn label(self) -> u32 {
        match self {
            Self::Ds128 => 128,
            Self::Ds256 => 256,
        }
    }

    /// Canonical domain parameters for this keysize.
    #[must_use]
    pub fn params(self) -> &'static DomainParameters {
        let table = registry();
        match self {
            Self::Ds128 => &table[0],
            Self::Ds256 => &table[1],
        }
    }
}

impl TryFrom<u32> for KeySize {
    type Error = CryptoError;

    fn try_from(label: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|k| k.label() == label)
            .ok_or_else(|| CryptoError::KeySizeNotSupported(label.to_string()))
    }
}

impl FromStr for KeySize {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label: u32 = s
            .trim()
            .parse()
            .map_err(|_| CryptoError::KeySizeNotSupported(s.to_owned()))?;
        Self::try_from(label)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An immutable DSA domain-parameter group.
///
/// Exactly one instance exists per [`KeySize`]; all keys of that keysize
/// borrow it.
#[derive(Debug)]
pub struct DomainParameters {
    keysize: KeySize,
    p: BigUint,
    q: BigUint,
    g: BigUint,
    hash: HashAlgorithm,
    p_bit_length: usize,
    q_bit_length: usize,
}

impl DomainParameters {
    fn new(keysize: KeySize, p: &str, q: &str, g: &str, hash: HashAlgorithm) -> Self {
        let p = parse_constant(p);
        let q = parse_constant(q);
        let g = parse_constant(g);
        let p_bit_length = p.bits();
        let q_bit_length = q.bits();
        Self {
            keysize,
            p,
            q,
            g,
            hash,
            p_bit_length,
            q_bit_length,
        }
    }

    /// Keysize this group is registered under.
    #[must_use]
    pub const fn keysize(&self) -> KeySize {
        self.keysize
    }

    /// Prime modulus `p`.
    #[must_use]
    pub const fn p(&self) -> &BigUint {
        &self.p
    }

    /// Subgroup order `q`.
    #[must_use]
    pub const fn q(&self) -> &BigUint {
        &self.q
    }

    /// Generator `g` of the order-`q` subgroup.
    #[must_use]
    pub const fn g(&self) -> &BigUint {
        &self.g
    }

    /// Digest used for message representatives.
    #[must_use]
    pub const fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash
    }

    /// Bit length of `p`.
    #[must_use]
    pub const fn p_bit_length(&self) -> usize {
        self.p_bit_length
    }

    /// Bit length of `q`.
    #[must_use]
    pub const fn q_bit_length(&self) -> usize {
        self.q_bit_length
    }

    /// Hex width of one signature half (`r` or `s`).
    #[must_use]
    pub const fn signature_half_hex_len(&self) -> usize {
        self.q_bit_length / 4
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Decode a built-in hex constant. The group tests below pin every decoded
/// value, so this never has to fail at runtime.
fn parse_constant(hex: &str) -> BigUint {
    let digits: Vec<u8> = hex
        .chars()
        .filter_map(|c| c.to_digit(16))
        .filter_map(|d| u8::try_from(d).ok())
        .collect();
    BigUint::from_radix_be(&digits, 16).unwrap_or_else(BigUint::zero)
}

fn registry() -> &'static [DomainParameters; 2] {
    static TABLE: OnceLock<[DomainParameters; 2]> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            DomainParameters::new(KeySize::Ds128, DS128_P, DS128_Q, DS128_G, HashAlgorithm::Sha1),
            DomainParameters::new(
                KeySize::Ds256,
                DS256_P,
                DS256_Q,
                DS256_G,
                HashAlgorithm::Sha256,
            ),
        ]
    })
}

/// Look up the parameter group for a numeric keysize label.
#[must_use]
pub fn lookup(label: u32) -> Option<&'static DomainParameters> {
    KeySize::try_from(label).ok().map(KeySize::params)
}

/// Infer a keysize from the bit length of an externally supplied `p`.
///
/// Matches the group whose canonical `p` is at least `bits` long and at most
/// [`P_BIT_LENGTH_TOLERANCE`] bits longer. The match only selects a candidate;
/// the caller still has to compare the full values.
#[must_use]
pub fn keysize_from_p_bit_length(bits: usize) -> Option<KeySize> {
    registry().iter().find_map(|params| {
        params
            .p_bit_length
            .checked_sub(bits)
            .filter(|diff| *diff < P_BIT_LENGTH_TOLERANCE)
            .map(|_| params.keysize)
    })
}
