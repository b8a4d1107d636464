/// Seed the generator starts from on every power-up, so a game always plays out the same
/// given the same inputs.
pub const INITIAL_SEED: u32 = 5323;

const MULTIPLIER: u32 = 8_253_729;
const INCREMENT: u32 = 2_396_403;
/// Every value handed out is reduced into `0..RANDOM_RANGE`.
pub const RANDOM_RANGE: u32 = 32768;

/// Linear congruential generator used to pick serve positions and directions.
///
/// Not in any way suitable for anything but a game of Pong.
#[derive(Debug, Clone)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    pub fn new() -> Self {
        Lcg { seed: INITIAL_SEED }
    }

    /// Advance the generator and return a value in `0..RANDOM_RANGE`.
    #[inline]
    pub fn next(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.seed % RANDOM_RANGE
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_values() {
        let mut rng = Lcg::new();
        let expected_seed = INITIAL_SEED.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

        assert_eq!(rng.next(), expected_seed % RANDOM_RANGE);
        assert_eq!(
            rng.next(),
            expected_seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) % RANDOM_RANGE
        );
    }

    #[test]
    fn test_deterministic() {
        let mut a = Lcg::new();
        let mut b = Lcg::default();

        for _ in 0..1000 {
            let value = a.next();
            assert_eq!(value, b.next());
            assert!(value < RANDOM_RANGE);
        }
    }
}
