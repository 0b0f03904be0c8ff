//! Character sets used for random sampling.

use rand::Rng;

/// An immutable, index-addressable ASCII alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static [u8]);

pub const LETTERS: Charset = Charset(b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ");
pub const DIGITS: Charset = Charset(b"0123456789");
pub const PUNCTUATION: Charset = Charset(br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##);

/// Letters, digits and punctuation: the pool for random generation.
pub const STANDARD: Charset = Charset(
    br##"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##,
);

impl Charset {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.0
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.0.contains(&(c as u8))
    }

    /// Draw one character uniformly at random.
    #[inline]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        char::from(self.0[rng.random_range(0..self.0.len())])
    }

    /// Number of distinct strings of `length` characters, or `None` if that
    /// exceeds `usize`.
    pub fn capacity(&self, length: usize) -> Option<usize> {
        let exp = u32::try_from(length).ok()?;
        self.0.len().checked_pow(exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_is_letters_digits_punctuation() {
        let mut joined = LETTERS.as_bytes().to_vec();
        joined.extend_from_slice(DIGITS.as_bytes());
        joined.extend_from_slice(PUNCTUATION.as_bytes());
        assert_eq!(STANDARD.as_bytes(), joined.as_slice());
        assert_eq!(STANDARD.len(), 94);
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn pick_stays_in_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(DIGITS.pick(&mut rng).is_ascii_digit());
            assert!(LETTERS.pick(&mut rng).is_ascii_alphabetic());
            assert!(PUNCTUATION.pick(&mut rng).is_ascii_punctuation());
        }
    }

    #[test]
    fn capacity_grows_and_saturates() {
        assert_eq!(DIGITS.capacity(0), Some(1));
        assert_eq!(DIGITS.capacity(3), Some(1000));
        assert_eq!(STANDARD.capacity(2), Some(94 * 94));
        assert_eq!(STANDARD.capacity(128), None);
    }
}
