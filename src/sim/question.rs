//! Monster riddles
//!
//! Each monster poses a question generated on demand from the session RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Monster, QuestionKind};
use crate::consts::{DIE_MAX, DIE_MIN};

/// "What is the probability of rolling X on a Y-sided die?"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityQuestion {
    /// Face asked about
    pub die_faces1: u32,
    /// Sides of the die
    pub die_faces2: u32,
    pub prompt: String,
    pub answer: f64,
}

impl ProbabilityQuestion {
    /// Build the question for fixed faces.
    ///
    /// A face larger than the die can never come up, so its answer is 0.
    pub fn from_faces(die_faces1: u32, die_faces2: u32) -> Self {
        let answer = if die_faces1 <= die_faces2 && die_faces2 > 0 {
            die_faces1 as f64 / die_faces2 as f64
        } else {
            0.0
        };
        Self {
            die_faces1,
            die_faces2,
            prompt: format!(
                "What is the probability of rolling a {} on a {}-sided die?",
                die_faces1, die_faces2
            ),
            answer,
        }
    }

    /// Check an answer within an absolute tolerance
    pub fn is_correct(&self, value: f64, tolerance: f64) -> bool {
        value.is_finite() && (value - self.answer).abs() <= tolerance
    }
}

/// Generate the riddle a monster asks
pub fn generate_question<R: Rng + ?Sized>(monster: &Monster, rng: &mut R) -> ProbabilityQuestion {
    match monster.question_kind {
        QuestionKind::Probability => {
            let die_faces1 = rng.random_range(DIE_MIN..=DIE_MAX);
            let die_faces2 = rng.random_range(DIE_MIN..=DIE_MAX);
            ProbabilityQuestion::from_faces(die_faces1, die_faces2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    fn ghost() -> Monster {
        Monster::new("Spooky Ghost", 1, QuestionKind::Probability)
    }

    #[test]
    fn test_three_on_six_is_half() {
        let q = ProbabilityQuestion::from_faces(3, 6);
        assert!((q.answer - 0.5).abs() < f64::EPSILON);
        assert!(q.is_correct(0.5, 0.01));
        assert!(q.is_correct(0.505, 0.01));
        assert!(!q.is_correct(0.6, 0.01));
        assert_eq!(
            q.prompt,
            "What is the probability of rolling a 3 on a 6-sided die?"
        );
    }

    /// Replays a fixed list of outputs
    struct ScriptedRng {
        values: Vec<u32>,
        next: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::rand_core::impls::fill_bytes_via_next(self, dest)
        }
    }

    #[test]
    fn test_generated_question_uses_injected_rolls() {
        // Outputs sitting just past each sixth of the u32 range map to one face
        // apiece without a rejection redraw
        let raw_for = |face: u32| {
            (0..6u64)
                .map(|k| (((k << 32) + 5) / 6) as u32)
                .find(|&raw| {
                    let mut single = ScriptedRng {
                        values: vec![raw],
                        next: 0,
                    };
                    single.random_range(DIE_MIN..=DIE_MAX) == face
                })
                .unwrap()
        };
        let mut rng = ScriptedRng {
            values: vec![raw_for(3), raw_for(6)],
            next: 0,
        };

        let q = generate_question(&ghost(), &mut rng);
        assert_eq!((q.die_faces1, q.die_faces2), (3, 6));
        assert!((q.answer - 0.5).abs() < f64::EPSILON);
        assert_eq!(
            q.prompt,
            "What is the probability of rolling a 3 on a 6-sided die?"
        );
    }

    #[test]
    fn test_impossible_roll_is_zero() {
        let q = ProbabilityQuestion::from_faces(5, 2);
        assert_eq!(q.answer, 0.0);
        assert!(q.is_correct(0.0, 0.01));
        assert!(!q.is_correct(2.5, 0.01));
    }

    #[test]
    fn test_nan_is_never_correct() {
        let q = ProbabilityQuestion::from_faces(1, 1);
        assert!(!q.is_correct(f64::NAN, 1.0));
    }

    #[test]
    fn test_generated_faces_in_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let q = generate_question(&ghost(), &mut rng);
            assert!((DIE_MIN..=DIE_MAX).contains(&q.die_faces1));
            assert!((DIE_MIN..=DIE_MAX).contains(&q.die_faces2));
            assert!((0.0..=1.0).contains(&q.answer));
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut a = Pcg32::seed_from_u64(9);
        let mut b = Pcg32::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(
                generate_question(&ghost(), &mut a),
                generate_question(&ghost(), &mut b)
            );
        }
    }
}
