//! Destiny card deck
//!
//! Cards are flavor: drawing one never moves the player or touches a level.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A destiny card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestinyCard {
    MoveForward(u8),
    MoveBack(u8),
    SkipTurn,
    ExtraTurn,
    ChallengePlayer,
}

impl DestinyCard {
    /// The full deck
    pub const ALL: [DestinyCard; 5] = [
        DestinyCard::MoveForward(2),
        DestinyCard::MoveBack(1),
        DestinyCard::SkipTurn,
        DestinyCard::ExtraTurn,
        DestinyCard::ChallengePlayer,
    ];

    pub fn text(&self) -> String {
        match self {
            DestinyCard::MoveForward(1) => "Move forward 1 space".to_string(),
            DestinyCard::MoveForward(n) => format!("Move forward {} spaces", n),
            DestinyCard::MoveBack(1) => "Move back 1 space".to_string(),
            DestinyCard::MoveBack(n) => format!("Move back {} spaces", n),
            DestinyCard::SkipTurn => "Skip next turn".to_string(),
            DestinyCard::ExtraTurn => "Take an extra turn".to_string(),
            DestinyCard::ChallengePlayer => "Challenge another player".to_string(),
        }
    }
}

/// Draw a card uniformly, with replacement
pub fn draw_card<R: Rng + ?Sized>(rng: &mut R) -> DestinyCard {
    DestinyCard::ALL[rng.random_range(0..DestinyCard::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_card_text() {
        let texts: Vec<String> = DestinyCard::ALL.iter().map(|c| c.text()).collect();
        assert_eq!(
            texts,
            vec![
                "Move forward 2 spaces",
                "Move back 1 space",
                "Skip next turn",
                "Take an extra turn",
                "Challenge another player",
            ]
        );
    }

    #[test]
    fn test_draw_covers_whole_deck() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let card = draw_card(&mut rng);
            let idx = DestinyCard::ALL.iter().position(|c| *c == card).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
