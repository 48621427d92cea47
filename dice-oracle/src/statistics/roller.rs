use rand::{Rng, SeedableRng, rngs::StdRng};

pub const DIE_FACES: u8 = 6;

/// A source of fair six-sided die faces.
///
/// Every value returned must lie in `1..=DIE_FACES`.
pub trait DieSource {
    fn roll_die(&mut self) -> u8;
}

#[derive(Debug)]
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let rng = StdRng::from_os_rng();
        Roller { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Roller { rng }
    }

    #[cfg(test)]
    pub fn test_rng() -> Self {
        Self::from_seed(42)
    }
}

impl DieSource for Roller {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

/// Replays a fixed list of faces, wrapping around when it runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRoller {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedRoller {
    /// Faces outside `1..=6` are clamped into range. An empty script always
    /// rolls a 1.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces = faces
            .into_iter()
            .map(|face| face.clamp(1, DIE_FACES))
            .collect();
        Self { faces, cursor: 0 }
    }

    pub fn remaining_in_cycle(&self) -> usize {
        self.faces.len() - self.cursor
    }
}

impl DieSource for ScriptedRoller {
    fn roll_die(&mut self) -> u8 {
        let Some(&face) = self.faces.get(self.cursor) else {
            return 1;
        };
        self.cursor = (self.cursor + 1) % self.faces.len();
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roller_stays_in_range() {
        let mut roller = Roller::test_rng();
        let mut seen = [false; DIE_FACES as usize];
        for _ in 0..10000 {
            let face = roller.roll_die();
            assert!((1..=DIE_FACES).contains(&face));
            seen[(face - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_seeded_rollers_agree() {
        let mut a = Roller::from_seed(7);
        let mut b = Roller::from_seed(7);
        for _ in 0..100 {
            assert_eq!(a.roll_die(), b.roll_die());
        }
    }

    #[test]
    fn test_scripted_roller_cycles() {
        let mut roller = ScriptedRoller::new([1, 2, 3]);
        let faces: Vec<u8> = (0..7).map(|_| roller.roll_die()).collect();
        assert_eq!(faces, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(roller.remaining_in_cycle(), 2);
    }

    #[test]
    fn test_scripted_roller_clamps_and_handles_empty() {
        let mut roller = ScriptedRoller::new([0, 9]);
        assert_eq!(roller.roll_die(), 1);
        assert_eq!(roller.roll_die(), 6);

        let mut empty = ScriptedRoller::new(std::iter::empty());
        assert_eq!(empty.roll_die(), 1);
        assert_eq!(empty.roll_die(), 1);
    }
}
