// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! BIP-39 mnemonic backups: entropy, phrase and seed conversions.

use core::fmt;

use hmac::Hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::{WalletError, WalletResult};

mod english;

/// PBKDF2 rounds for seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Default seed length in bytes.
pub const SEED_SIZE: usize = 64;

const BITS_PER_WORD: usize = 11;
const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];
const ENTROPY_SIZES: [usize; 5] = [16, 20, 24, 28, 32];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    Spanish,
}

impl Language {
    pub fn word_list(self) -> WalletResult<&'static [&'static str; 2048]> {
        match self {
            Language::English => Ok(&english::WORDS),
            other => Err(WalletError::NotSupported(format!(
                "no word list for language {other:?}"
            ))),
        }
    }

    fn index_of(words: &[&str; 2048], word: &str) -> WalletResult<usize> {
        words
            .binary_search(&word)
            .map_err(|_| WalletError::InvalidArgument(format!("unknown word '{word}'")))
    }
}

/// Random mnemonic of `strength` bits: one of 128, 160, 192, 224 or 256.
pub fn generate(strength: usize, language: Language) -> WalletResult<Mnemonic> {
    if strength % 8 != 0 || !ENTROPY_SIZES.contains(&(strength / 8)) {
        return Err(WalletError::InvalidArgument(format!(
            "invalid mnemonic strength {strength}"
        )));
    }
    language.word_list()?;

    let mut entropy = Zeroizing::new(vec![0u8; strength / 8]);
    OsRng.fill_bytes(entropy.as_mut_slice());
    entropy_to_mnemonic(&entropy, language)
}

pub fn entropy_to_mnemonic(entropy: &[u8], language: Language) -> WalletResult<Mnemonic> {
    if !ENTROPY_SIZES.contains(&entropy.len()) {
        return Err(WalletError::InvalidArgument(format!(
            "invalid entropy length {}",
            entropy.len()
        )));
    }
    let words = language.word_list()?;

    // checksum is at most 8 bits, so the first hash byte covers it
    let checksum = Sha256::digest(entropy)[0];
    let mut bits = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
    bits.extend_from_slice(entropy);
    bits.push(checksum);

    let word_count = (entropy.len() * 8 + entropy.len() / 4) / BITS_PER_WORD;
    let mut phrase = Zeroizing::new(String::with_capacity(word_count * 9));
    for i in 0..word_count {
        let index = (0..BITS_PER_WORD).fold(0usize, |index, j| {
            let bit = i * BITS_PER_WORD + j;
            let set = (bits[bit / 8] >> (7 - bit % 8)) & 1;
            (index << 1) | set as usize
        });
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(words[index]);
    }

    Ok(Mnemonic { phrase, language })
}

/// Recovers the entropy, verifying the embedded checksum.
///
/// Words are split on any whitespace and lowercased before lookup.
pub fn mnemonic_to_entropy(phrase: &str, language: Language) -> WalletResult<Zeroizing<Vec<u8>>> {
    let words = language.word_list()?;
    let normalized = normalize(phrase);
    let input: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();
    if !WORD_COUNTS.contains(&input.len()) {
        return Err(WalletError::InvalidArgument(format!(
            "invalid mnemonic word count {}",
            input.len()
        )));
    }

    let total_bits = input.len() * BITS_PER_WORD;
    let checksum_bits = total_bits / 33;
    let entropy_size = (total_bits - checksum_bits) / 8;

    let mut bits = Zeroizing::new(vec![0u8; (total_bits + 7) / 8]);
    for (i, word) in input.iter().enumerate() {
        let index = Language::index_of(words, word)?;
        for j in 0..BITS_PER_WORD {
            if (index >> (BITS_PER_WORD - 1 - j)) & 1 == 1 {
                let bit = i * BITS_PER_WORD + j;
                bits[bit / 8] |= 1 << (7 - bit % 8);
            }
        }
    }

    let entropy = Zeroizing::new(bits[..entropy_size].to_vec());
    let expected = Sha256::digest(entropy.as_slice())[0] >> (8 - checksum_bits);
    let actual = bits[entropy_size] >> (8 - checksum_bits);
    if expected != actual {
        return Err(WalletError::ChecksumMismatch("mnemonic checksum"));
    }
    Ok(entropy)
}

/// PBKDF2-HMAC-SHA512 over the normalised phrase, salted with "mnemonic" + passphrase.
///
/// The phrase itself is not validated here. `len` must be at least 64.
pub fn mnemonic_to_seed(
    phrase: &str,
    passphrase: &str,
    len: usize,
) -> WalletResult<Zeroizing<Vec<u8>>> {
    if len < SEED_SIZE {
        return Err(WalletError::InvalidArgument(format!(
            "seed length {len} is shorter than {SEED_SIZE}"
        )));
    }

    let normalized = normalize(phrase);
    let salt = Zeroizing::new(format!("mnemonic{passphrase}"));
    let mut seed = Zeroizing::new(vec![0u8; len]);
    pbkdf2::pbkdf2::<Hmac<Sha512>>(
        normalized.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        seed.as_mut_slice(),
    )
    .map_err(|err| WalletError::CryptoFailure(format!("pbkdf2: {err}")))?;
    Ok(seed)
}

/// True when `phrase` is a well-formed English mnemonic with a valid checksum.
pub fn validate(phrase: &str) -> bool {
    mnemonic_to_entropy(phrase, Language::English).is_ok()
}

fn normalize(phrase: &str) -> Zeroizing<String> {
    // lowercasing can grow a character's UTF-8 length; keep the buffer from reallocating
    let mut out = Zeroizing::new(String::with_capacity(phrase.len() * 2));
    for word in phrase.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for c in word.chars() {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// A validated mnemonic phrase. The text is wiped on drop.
#[derive(Clone)]
pub struct Mnemonic {
    phrase: Zeroizing<String>,
    language: Language,
}

impl Mnemonic {
    pub fn parse(phrase: &str) -> WalletResult<Self> {
        Self::parse_in(phrase, Language::English)
    }

    pub fn parse_in(phrase: &str, language: Language) -> WalletResult<Self> {
        mnemonic_to_entropy(phrase, language)?;
        Ok(Self {
            phrase: normalize(phrase),
            language,
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.phrase.split(' ')
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    pub fn entropy(&self) -> WalletResult<Zeroizing<Vec<u8>>> {
        mnemonic_to_entropy(&self.phrase, self.language)
    }

    pub fn to_seed(&self, passphrase: &str) -> WalletResult<Zeroizing<Vec<u8>>> {
        mnemonic_to_seed(&self.phrase, passphrase, SEED_SIZE)
    }
}

impl PartialEq for Mnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && *self.phrase == *other.phrase
    }
}

impl Eq for Mnemonic {}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic({} words)", self.word_count())
    }
}
