//! Validated generation parameters.

use rand::Rng;

use super::charset::{Charset, STANDARD};
use crate::error::Error;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;

/// Everything the coordinator needs for one run. Only constructible through
/// [`GenerationRequest::new`], so a value in hand has passed validation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    count: usize,
    min_length: usize,
    max_length: usize,
    fixed_length: Option<usize>,
    pattern: Option<String>,
    charset: Charset,
}

impl GenerationRequest {
    /// Validate and bundle the parameters. An empty pattern counts as none.
    pub fn new(
        count: usize,
        min_length: usize,
        max_length: usize,
        fixed_length: Option<usize>,
        pattern: Option<String>,
    ) -> Result<Self, Error> {
        if min_length < MIN_LENGTH || max_length > MAX_LENGTH {
            return Err(Error::LengthOutOfRange {
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        if min_length > max_length {
            return Err(Error::MinAboveMax {
                min: min_length,
                max: max_length,
            });
        }
        if count < 1 {
            return Err(Error::CountTooSmall);
        }
        if let Some(len) = fixed_length
            && !(MIN_LENGTH..=MAX_LENGTH).contains(&len)
        {
            return Err(Error::FixedLengthOutOfRange(len));
        }

        Ok(Self {
            count,
            min_length,
            max_length,
            fixed_length,
            pattern: pattern.filter(|p| !p.is_empty()),
            charset: STANDARD,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn fixed_length(&self) -> Option<usize> {
        self.fixed_length
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Length for a random run: the fixed length, or one uniform pick from
    /// `[min, max]` shared by every entry of the run.
    pub fn resolve_length<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self.fixed_length {
            Some(len) => len,
            None => rng.random_range(self.min_length..=self.max_length),
        }
    }

    /// Whether `pass` falls within `[min, max]`, counted in characters.
    pub fn accepts(&self, pass: &str) -> bool {
        (self.min_length..=self.max_length).contains(&pass.chars().count())
    }
}
