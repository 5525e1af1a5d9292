//! Path generation: levels, platforms and the monster catalog

use std::fmt;

use rand::{Rng, RngCore};

use super::state::{Level, Monster, Platform, QuestionKind};
use crate::consts::*;

/// Fixed monster roster: (name, difficulty tier)
const MONSTER_CATALOG: [(&str, u8); 5] = [
    ("Spooky Ghost", 1),
    ("Wicked Witch", 2),
    ("Vampire Lord", 3),
    ("Zombie Horde", 2),
    ("Skeleton King", 3),
];

/// All monsters that can guard a level
pub fn monster_catalog() -> Vec<Monster> {
    MONSTER_CATALOG
        .iter()
        .map(|(name, tier)| Monster::new(name, *tier, QuestionKind::Probability))
        .collect()
}

/// Draw a monster uniformly, with replacement.
///
/// Every call returns a fresh copy, so each level tracks its own `defeated` flag.
pub fn random_monster<R: Rng + ?Sized>(rng: &mut R) -> Monster {
    let (name, tier) = MONSTER_CATALOG[rng.random_range(0..MONSTER_CATALOG.len())];
    Monster::new(name, tier, QuestionKind::Probability)
}

/// Strategy for laying out a level's platforms
pub trait PlatformLayout: fmt::Debug {
    fn platforms(&self, rng: &mut dyn RngCore) -> Vec<Platform>;
}

/// 5-8 platforms dropped anywhere in the playfield below the title area.
/// Overlaps and reachability are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLayout;

impl PlatformLayout for RandomLayout {
    fn platforms(&self, rng: &mut dyn RngCore) -> Vec<Platform> {
        let count = rng.random_range(MIN_PLATFORMS..=MAX_PLATFORMS);
        let max_x = (PLAYFIELD_WIDTH - PLATFORM_WIDTH) as i32;
        let max_y = (PLAYFIELD_HEIGHT - 3.0 * PLATFORM_HEIGHT) as i32;
        (0..count)
            .map(|_| {
                let x = rng.random_range(0..=max_x);
                let y = rng.random_range(PLATFORM_MIN_Y as i32..=max_y);
                Platform::new(x as f32, y as f32)
            })
            .collect()
    }
}

/// Generate the path with the default random layout
pub fn generate_levels<R: RngCore>(count: usize, rng: &mut R) -> Vec<Level> {
    generate_levels_with(count, &RandomLayout, rng)
}

/// Generate `count` levels, each with its own platforms and one monster
pub fn generate_levels_with<R: RngCore>(
    count: usize,
    layout: &dyn PlatformLayout,
    rng: &mut R,
) -> Vec<Level> {
    (0..count)
        .map(|index| {
            let platforms = layout.platforms(&mut *rng);
            let monster = random_monster(&mut *rng);
            Level {
                index,
                platforms,
                monster,
                completed: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_catalog() {
        let catalog = monster_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.iter().all(|m| (1..=3).contains(&m.difficulty_tier)));
        assert!(catalog.iter().all(|m| m.question_kind == QuestionKind::Probability));
        assert!(catalog.iter().all(|m| !m.defeated));
        assert_eq!(catalog[2].name, "Vampire Lord");
    }

    #[test]
    fn test_generate_levels_shape() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let levels = generate_levels(7, &mut rng);
        assert_eq!(levels.len(), 7);
        let names: Vec<String> = monster_catalog().into_iter().map(|m| m.name).collect();

        for (i, level) in levels.iter().enumerate() {
            assert_eq!(level.index, i);
            assert!(!level.completed);
            assert!(names.contains(&level.monster.name));
            assert!((MIN_PLATFORMS..=MAX_PLATFORMS).contains(&level.platforms.len()));
            for p in &level.platforms {
                assert!(p.pos.x >= 0.0 && p.max().x <= PLAYFIELD_WIDTH);
                assert!(p.pos.y >= PLATFORM_MIN_Y && p.max().y <= PLAYFIELD_HEIGHT);
            }
        }
    }

    #[test]
    fn test_zero_levels() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(generate_levels(0, &mut rng).is_empty());
    }

    #[derive(Debug)]
    struct Ladder;

    impl PlatformLayout for Ladder {
        fn platforms(&self, _rng: &mut dyn RngCore) -> Vec<Platform> {
            (0..3)
                .map(|i| Platform::new(100.0 * i as f32, 300.0 - 50.0 * i as f32))
                .collect()
        }
    }

    #[test]
    fn test_custom_layout() {
        let mut rng = Pcg32::seed_from_u64(5);
        let levels = generate_levels_with(2, &Ladder, &mut rng);
        assert_eq!(levels[0].platforms.len(), 3);
        assert_eq!(levels[1].platforms[2].pos.y, 200.0);
    }
}
