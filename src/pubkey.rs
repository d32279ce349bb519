//! Account addresses.

use {
    serde_derive::{Deserialize, Serialize},
    std::{convert::TryFrom, fmt, mem, str::FromStr},
    thiserror::Error,
};

/// Number of bytes in a pubkey
pub const PUBKEY_BYTES: usize = 32;
/// Maximum length of a seed used to derive an address
pub const MAX_SEED_LEN: usize = 32;
/// Maximum string length of a base58 encoded pubkey
const MAX_BASE58_LEN: usize = 44;

#[repr(transparent)]
#[derive(
    Serialize, Deserialize, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
pub struct Pubkey([u8; PUBKEY_BYTES]);

#[derive(Error, Debug, Serialize, Clone, PartialEq, Eq)]
pub enum ParsePubkeyError {
    #[error("String is the wrong size")]
    WrongSize,
    #[error("Invalid Base58 string")]
    Invalid,
}

impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_BASE58_LEN {
            return Err(ParsePubkeyError::WrongSize);
        }
        let pubkey_vec = bs58::decode(s)
            .into_vec()
            .map_err(|_| ParsePubkeyError::Invalid)?;
        if pubkey_vec.len() != mem::size_of::<Pubkey>() {
            Err(ParsePubkeyError::WrongSize)
        } else {
            Pubkey::try_from(pubkey_vec.as_slice())
        }
    }
}

impl TryFrom<&str> for Pubkey {
    type Error = ParsePubkeyError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Pubkey::from_str(s)
    }
}

impl TryFrom<&[u8]> for Pubkey {
    type Error = ParsePubkeyError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; PUBKEY_BYTES]>::try_from(bytes)
            .map(Self::new_from_array)
            .map_err(|_| ParsePubkeyError::WrongSize)
    }
}

impl From<[u8; PUBKEY_BYTES]> for Pubkey {
    fn from(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

/// Builds a pubkey from a numeric seed, stored little-endian in the leading
/// eight bytes. `Pubkey::from(0)` is the system program id.
impl From<u64> for Pubkey {
    fn from(seed: u64) -> Self {
        let mut b = [0u8; PUBKEY_BYTES];
        b[0..8].copy_from_slice(&seed.to_le_bytes());
        Self(b)
    }
}

impl Pubkey {
    pub const fn new_from_array(pubkey_array: [u8; PUBKEY_BYTES]) -> Self {
        Self(pubkey_array)
    }

    /// New random Pubkey for tests and benchmarks.
    pub fn new_rand() -> Self {
        Self(rand::random::<[u8; PUBKEY_BYTES]>())
    }

    /// unique Pubkey for tests and benchmarks.
    pub fn new_unique() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static I: AtomicU64 = AtomicU64::new(1);

        Self::from(I.fetch_add(1, Ordering::Relaxed))
    }

    pub fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unique() {
        assert!(Pubkey::new_unique() != Pubkey::new_unique());
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(Pubkey::from(0), Pubkey::default());
        let one = Pubkey::from(1);
        assert_eq!(one.to_bytes()[0], 1);
        assert!(one.to_bytes()[1..].iter().all(|b| *b == 0));
        assert_eq!(Pubkey::from(1), Pubkey::from(1));
        assert_ne!(Pubkey::from(1), Pubkey::from(2));
    }

    #[test]
    fn pubkey_fromstr() {
        let pubkey = Pubkey::new_unique();
        let mut pubkey_base58_str = bs58::encode(pubkey.0).into_string();

        assert_eq!(pubkey_base58_str.parse::<Pubkey>(), Ok(pubkey));

        pubkey_base58_str.push_str(&bs58::encode(pubkey.0).into_string());
        assert_eq!(
            pubkey_base58_str.parse::<Pubkey>(),
            Err(ParsePubkeyError::WrongSize)
        );

        let mut pubkey_base58_str = bs58::encode(pubkey.0).into_string();
        // throw some non-base58 stuff in there
        pubkey_base58_str.replace_range(..1, "I");
        assert_eq!(
            pubkey_base58_str.parse::<Pubkey>(),
            Err(ParsePubkeyError::Invalid)
        );

        // longest valid encoding, and one to grow on
        let mut too_long = bs58::encode(&[255u8; PUBKEY_BYTES]).into_string();
        too_long.push('1');
        assert_eq!(too_long.parse::<Pubkey>(), Err(ParsePubkeyError::WrongSize));
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = [7u8; PUBKEY_BYTES];
        assert_eq!(
            Pubkey::try_from(&bytes[..]),
            Ok(Pubkey::new_from_array(bytes))
        );
        assert_eq!(
            Pubkey::try_from(&bytes[1..]),
            Err(ParsePubkeyError::WrongSize)
        );
    }

    #[test]
    fn test_display_system_program_id() {
        assert_eq!(
            Pubkey::default().to_string(),
            "11111111111111111111111111111111"
        );
    }
}
