//! Random password sampling.

use std::collections::HashSet;

use rand::Rng;
use zeroize::Zeroize;

use super::charset::Charset;
use super::progress::Progress;

/// Accepted entries between progress notifications.
pub const PROGRESS_INTERVAL: usize = 100_000;

/// Sample `count` distinct strings of exactly `length` characters from `charset`.
///
/// Duplicate draws are discarded and the loop simply continues, with no cap on
/// attempts. Callers must ensure `count <= charset.capacity(length)`, otherwise
/// this never returns.
pub fn generate_random<R: Rng + ?Sized>(
    charset: Charset,
    count: usize,
    length: usize,
    rng: &mut R,
    progress: &mut dyn Progress,
) -> HashSet<String> {
    // Grows on demand: `count` may be far larger than memory can hold.
    let mut passwords = HashSet::with_capacity(count.min(PROGRESS_INTERVAL));

    while passwords.len() < count {
        let mut pass = random_string(charset, length, rng);
        if passwords.contains(&pass) {
            pass.zeroize();
            continue;
        }
        passwords.insert(pass);

        if passwords.len().is_multiple_of(PROGRESS_INTERVAL) {
            progress.update(passwords.len(), count);
        }
    }

    passwords
}

/// One string of `length` characters, each drawn independently with replacement.
#[inline]
pub fn random_string<R: Rng + ?Sized>(charset: Charset, length: usize, rng: &mut R) -> String {
    (0..length).map(|_| charset.pick(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{DIGITS, STANDARD};
    use crate::pass::progress::Silent;
    use crate::pass::progress::testing::Recorder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn produces_exact_count_of_distinct_fixed_length_strings() {
        let mut rng = StdRng::seed_from_u64(1);
        let set = generate_random(STANDARD, 5_000, 8, &mut rng, &mut Silent);

        assert_eq!(set.len(), 5_000);
        for pass in &set {
            assert_eq!(pass.chars().count(), 8);
            assert!(pass.chars().all(|c| STANDARD.contains(c)));
        }
    }

    #[test]
    fn fills_the_entire_space_when_asked() {
        // 100 two-digit strings exist; every one must be found despite collisions.
        let mut rng = StdRng::seed_from_u64(2);
        let set = generate_random(DIGITS, 100, 2, &mut rng, &mut Silent);

        assert_eq!(set.len(), 100);
        for n in 0..100 {
            assert!(set.contains(&format!("{n:02}")));
        }
    }

    #[test]
    fn separate_runs_are_each_internally_unique() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = generate_random(DIGITS, 500, 4, &mut rng, &mut Silent);
        let second = generate_random(DIGITS, 500, 4, &mut rng, &mut Silent);
        assert_eq!(first.len(), 500);
        assert_eq!(second.len(), 500);
    }

    #[test]
    fn same_seed_same_output() {
        let a = generate_random(STANDARD, 200, 6, &mut StdRng::seed_from_u64(9), &mut Silent);
        let b = generate_random(STANDARD, 200, 6, &mut StdRng::seed_from_u64(9), &mut Silent);
        assert_eq!(a, b);
    }

    #[test]
    fn reports_every_interval_of_unique_entries() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut recorder = Recorder::default();
        generate_random(STANDARD, 250_000, 10, &mut rng, &mut recorder);

        assert_eq!(recorder.updates, vec![(100_000, 250_000), (200_000, 250_000)]);
    }

    /// Unwinds out of the sampler at the first notification.
    struct StopAtFirstUpdate;

    impl Progress for StopAtFirstUpdate {
        fn update(&mut self, done: usize, _total: usize) {
            std::panic::panic_any(done);
        }
    }

    #[test]
    fn huge_count_starts_sampling_without_reserving_it_all() {
        let result = std::panic::catch_unwind(|| {
            let mut rng = StdRng::seed_from_u64(10);
            generate_random(STANDARD, usize::MAX / 2, 128, &mut rng, &mut StopAtFirstUpdate)
        });

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<usize>(), Some(&PROGRESS_INTERVAL));
    }

    #[test]
    fn zero_length_yields_single_empty_string() {
        let mut rng = StdRng::seed_from_u64(5);
        let set = generate_random(STANDARD, 1, 0, &mut rng, &mut Silent);
        assert_eq!(set.len(), 1);
        assert!(set.contains(""));
    }
}
