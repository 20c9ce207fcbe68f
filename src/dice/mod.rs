//! Sources of die rolls.
//!
//! Round resolution never touches an RNG directly; it asks a [`DieSource`]
//! for each face. Games normally roll with [`GameRng`], while tests and
//! replays plug in [`ScriptedDice`] to get exactly reproducible rounds.

use crate::core::GameRng;

/// Anything that can produce die faces.
///
/// Implementations must return a value in `1..=faces`.
pub trait DieSource {
    /// Roll one die with `faces` faces.
    fn roll(&mut self, faces: u32) -> u32;
}

impl DieSource for GameRng {
    fn roll(&mut self, faces: u32) -> u32 {
        self.roll_die(faces)
    }
}

impl<D: DieSource + ?Sized> DieSource for &mut D {
    fn roll(&mut self, faces: u32) -> u32 {
        (**self).roll(faces)
    }
}

/// Replays a fixed sequence of faces, starting over when it runs out.
///
/// ```
/// use dice_game::dice::{DieSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 1]);
/// assert_eq!(dice.roll(6), 6);
/// assert_eq!(dice.roll(6), 1);
/// assert_eq!(dice.roll(6), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a scripted source.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: Vec<u32> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "Scripted dice need at least one face");
        Self { faces, cursor: 0 }
    }

    /// Number of faces handed out so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl DieSource for ScriptedDice {
    fn roll(&mut self, faces: u32) -> u32 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        debug_assert!(
            (1..=faces).contains(&face),
            "scripted face {} outside 1..={}",
            face,
            faces
        );
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_cycles() {
        let mut dice = ScriptedDice::new([1, 2, 3]);
        let rolled: Vec<_> = (0..7).map(|_| dice.roll(6)).collect();
        assert_eq!(rolled, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(dice.rolls(), 7);
    }

    #[test]
    #[should_panic(expected = "Scripted dice need at least one face")]
    fn test_scripted_empty() {
        let _ = ScriptedDice::new(Vec::new());
    }

    #[test]
    fn test_game_rng_source() {
        let mut a = GameRng::new(5);
        let mut b = GameRng::new(5);
        for _ in 0..50 {
            let face = a.roll(4);
            assert!((1..=4).contains(&face));
            assert_eq!(face, b.roll_die(4));
        }
    }

    #[test]
    fn test_mut_ref_source() {
        fn roll_once<D: DieSource>(mut dice: D) -> u32 {
            dice.roll(6)
        }

        let mut dice = ScriptedDice::new([2, 5]);
        assert_eq!(roll_once(&mut dice), 2);
        assert_eq!(dice.roll(6), 5);
    }
}
