//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
pub mod pattern;
pub mod progress;
mod request;

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;
use zeroize::Zeroize;

use crate::error::Error;

pub use generate::{PROGRESS_INTERVAL, generate_random};
pub use progress::{Progress, Silent};
pub use request::{GenerationRequest, MAX_LENGTH};

/// The generated entries of one run. Contents are zeroized on drop.
#[derive(Debug)]
pub enum PasswordSet {
    /// Random mode: distinct entries, no meaningful order.
    Unique(HashSet<String>),
    /// Pattern mode: ascending seed-index order, duplicates allowed.
    Ordered(Vec<String>),
}

impl PasswordSet {
    pub fn len(&self) -> usize {
        match self {
            PasswordSet::Unique(set) => set.len(),
            PasswordSet::Ordered(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let (unique, ordered) = match self {
            PasswordSet::Unique(set) => (Some(set.iter()), None),
            PasswordSet::Ordered(list) => (None, Some(list.iter())),
        };
        unique
            .into_iter()
            .flatten()
            .chain(ordered.into_iter().flatten())
            .map(String::as_str)
    }
}

impl Drop for PasswordSet {
    fn drop(&mut self) {
        match self {
            PasswordSet::Unique(set) => set.drain().for_each(|mut pass| pass.zeroize()),
            PasswordSet::Ordered(list) => list.zeroize(),
        }
    }
}

/// Run one generation request to completion.
///
/// With a pattern, expands seed indices `0..count` in order and keeps only
/// entries whose length is within bounds; nothing is regenerated, so fewer
/// than `count` entries (possibly none) may come back. Without one, samples
/// `count` distinct random strings of a single resolved length.
pub fn generate<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
    progress: &mut dyn Progress,
) -> Result<PasswordSet, Error> {
    let passwords = match request.pattern() {
        Some(pattern) => {
            debug!(pattern, count = request.count(), "pattern generation");
            PasswordSet::Ordered(generate_from_pattern(pattern, request, rng, progress))
        }
        None => {
            let length = request.resolve_length(rng);
            debug!(length, count = request.count(), "random generation");
            if let Some(capacity) = request.charset().capacity(length)
                && request.count() > capacity
            {
                return Err(Error::Unreachable {
                    count: request.count(),
                    length,
                    capacity,
                });
            }
            PasswordSet::Unique(generate_random(
                request.charset(),
                request.count(),
                length,
                rng,
                progress,
            ))
        }
    };

    progress.finish(passwords.len(), request.count());
    Ok(passwords)
}

fn generate_from_pattern<R: Rng + ?Sized>(
    pattern: &str,
    request: &GenerationRequest,
    rng: &mut R,
    progress: &mut dyn Progress,
) -> Vec<String> {
    let count = request.count();
    let mut passwords = Vec::new();

    for index in 0..count {
        let mut pass = pattern::expand(pattern, index, rng);
        if request.accepts(&pass) {
            passwords.push(pass);
        } else {
            pass.zeroize();
        }

        if (index + 1).is_multiple_of(PROGRESS_INTERVAL) {
            progress.update(index + 1, count);
        }
    }

    passwords
}
