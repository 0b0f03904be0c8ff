//! Template expansion.
//!
//! A pattern is literal text with placeholder tokens:
//!
//! - `{n}` the decimal sequence index
//! - `{a}` a random letter
//! - `{d}` a random digit
//! - `{s}` a random punctuation character
//!
//! Tokens are replaced in that order, each as a blanket replace over the
//! running string. One draw is made per token kind and reused for every
//! occurrence of that token, so `{d}{d}` always yields a doubled digit.
//! There is no escape for literal braces.

use rand::Rng;

use super::charset::{Charset, DIGITS, LETTERS, PUNCTUATION};

pub const INDEX_TOKEN: &str = "{n}";

const RANDOM_TOKENS: [(&str, Charset); 3] = [("{a}", LETTERS), ("{d}", DIGITS), ("{s}", PUNCTUATION)];

/// Expand `pattern` for position `seed_index`.
///
/// The result length is whatever the substitutions produce; no bounds apply here.
pub fn expand<R: Rng + ?Sized>(pattern: &str, seed_index: usize, rng: &mut R) -> String {
    let mut result = pattern.replace(INDEX_TOKEN, &seed_index.to_string());

    for (token, charset) in RANDOM_TOKENS {
        // Draw only when needed so seeded runs stay stable across patterns.
        if result.contains(token) {
            let c = charset.pick(rng);
            result = result.replace(token, c.encode_utf8(&mut [0; 4]));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn index_is_substituted_verbatim() {
        let mut rng = rng();
        assert_eq!(expand("user{n}", 5, &mut rng), "user5");
        assert_eq!(expand("{n}-{n}", 120, &mut rng), "120-120");
    }

    #[test]
    fn index_survives_random_tokens() {
        let mut rng = rng();
        for _ in 0..100 {
            let out = expand("user{n}{a}{d}{s}", 5, &mut rng);
            assert!(out.starts_with("user5"));
            assert_eq!(out.chars().count(), 8);
        }
    }

    #[test]
    fn random_tokens_draw_from_their_class() {
        let mut rng = rng();
        for _ in 0..200 {
            let out: Vec<char> = expand("{a}{d}{s}", 0, &mut rng).chars().collect();
            assert_eq!(out.len(), 3);
            assert!(out[0].is_ascii_alphabetic());
            assert!(out[1].is_ascii_digit());
            assert!(PUNCTUATION.contains(out[2]));
        }
    }

    #[test]
    fn repeated_token_shares_one_draw() {
        let mut rng = rng();
        for _ in 0..100 {
            let out: Vec<char> = expand("{a}x{a}x{a}", 0, &mut rng).chars().collect();
            assert_eq!(out[0], out[2]);
            assert_eq!(out[2], out[4]);
        }
    }

    #[test]
    fn literals_and_unknown_tokens_pass_through() {
        let mut rng = rng();
        assert_eq!(expand("plain", 3, &mut rng), "plain");
        assert_eq!(expand("{x}{N}{}", 3, &mut rng), "{x}{N}{}");
    }

    #[test]
    fn substitution_output_feeds_later_tokens() {
        // A drawn 'd' or 's' turns "{{a}}" into "{d}" or "{s}", which the
        // later passes then replace.
        let mut rng = rng();
        for _ in 0..500 {
            let out = expand("{{a}}", 0, &mut rng);
            if out.len() == 1 {
                assert!(out.chars().all(|c| c.is_ascii_digit() || PUNCTUATION.contains(c)));
            } else {
                assert_eq!(out.len(), 3);
                assert!(out.starts_with('{') && out.ends_with('}'));
            }
        }
    }
}
