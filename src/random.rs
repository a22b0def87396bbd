use rand::Rng;

use crate::error::Error;

/// 生成する文字列に使用する文字（英大文字・英小文字・数字）。
pub const CHARACTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// 長さ `length` のランダムな英数字列を生成します。
///
/// `length` が 0 の場合は [`Error::InvalidLength`] を返します。
///
/// ```
/// # use sokuchi::random_string;
/// let s = random_string(10).unwrap();
/// assert_eq!(s.len(), 10);
/// assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn random_string(length: usize) -> Result<String, Error> {
    let mut rng = rand::rng();
    random_string_using(&mut rng, length)
}

/// 外部の乱数生成器を使用してランダムな英数字列を生成します。
pub fn random_string_using<R: Rng>(rng: &mut R, length: usize) -> Result<String, Error> {
    if length == 0 {
        tracing::debug!(length, "random string length must be positive");
        return Err(Error::InvalidLength { length });
    }

    Ok((0..length)
        .map(|_| CHARACTERS[rng.random_range(0..CHARACTERS.len())] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(random_string(0), Err(Error::InvalidLength { length: 0 }));
    }

    ///シードを固定すれば同じ文字列になる
    #[test]
    fn seeded_rng_is_deterministic() {
        let a = random_string_using(&mut ChaCha8Rng::seed_from_u64(12345), 32).unwrap();
        let b = random_string_using(&mut ChaCha8Rng::seed_from_u64(12345), 32).unwrap();
        let c = random_string_using(&mut ChaCha8Rng::seed_from_u64(67890), 32).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    proptest! {
        #[test]
        fn length_and_alphabet(length in 1usize..=256, seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let s = random_string_using(&mut rng, length).unwrap();
            prop_assert_eq!(s.len(), length);
            prop_assert!(s.bytes().all(|b| CHARACTERS.contains(&b)));
        }
    }
}
