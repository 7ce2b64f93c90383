//! Token race demonstration problem.
//!
//! Four tokens race from square 0 to home on a linear board of
//! [`BOARD_LENGTH`] squares. The cost is the total distance still to travel;
//! a move rolls a die for one random token and advances it, never past home.

use crate::sa::SaProblem;
use rand::Rng;
use std::convert::Infallible;

/// Squares from start to home.
pub const BOARD_LENGTH: u32 = 57;

/// Number of tokens in the race.
pub const TOKENS: usize = 4;

/// Token positions, each in `0..=BOARD_LENGTH`.
pub type LudoState = [u32; TOKENS];

/// Sum of the distances each token still has to travel.
pub fn ludo_cost(state: &LudoState) -> f64 {
    state
        .iter()
        .map(|&pos| f64::from(BOARD_LENGTH.saturating_sub(pos)))
        .sum()
}

/// Moves a token at `position` forward by `roll`, stopping at home.
pub fn advance_token(position: u32, roll: u32) -> u32 {
    position.saturating_add(roll).min(BOARD_LENGTH)
}

/// Rolls a die (1–6) for one uniformly chosen token and advances it.
///
/// Returns a new state; the input is left untouched.
pub fn ludo_neighbor<R: Rng>(state: &LudoState, rng: &mut R) -> LudoState {
    let mut next = *state;
    let idx = rng.random_range(0..TOKENS);
    let roll = rng.random_range(1..=6);
    next[idx] = advance_token(next[idx], roll);
    next
}

/// The token race as an [`SaProblem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LudoRace;

impl SaProblem for LudoRace {
    type Solution = LudoState;
    type Error = Infallible;

    fn cost(&self, state: &LudoState) -> Result<f64, Infallible> {
        Ok(ludo_cost(state))
    }

    fn neighbor<R: Rng>(&self, state: &LudoState, rng: &mut R) -> Result<LudoState, Infallible> {
        Ok(ludo_neighbor(state, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::rngs::StdRng;
    use crate::sa::{anneal, SaConfig, SaRunner};

    #[test]
    fn test_cost_at_start_and_home() {
        assert!((ludo_cost(&[0, 0, 0, 0]) - 228.0).abs() < 1e-12);
        assert!(ludo_cost(&[57, 57, 57, 57]).abs() < 1e-12);
        assert!((ludo_cost(&[50, 57, 0, 10]) - 111.0).abs() < 1e-12);
    }

    #[test]
    fn test_advance_clamps_at_home() {
        assert_eq!(advance_token(55, 6), BOARD_LENGTH);
        assert_eq!(advance_token(57, 1), BOARD_LENGTH);
        assert_eq!(advance_token(50, 6), 56);
        assert_eq!(advance_token(0, 1), 1);
    }

    #[test]
    fn test_neighbor_moves_one_token_forward() {
        let mut rng = create_rng(17);
        let state = [10, 20, 30, 55];
        for _ in 0..200 {
            let next = ludo_neighbor(&state, &mut rng);
            let moved: Vec<usize> = (0..TOKENS).filter(|&i| next[i] != state[i]).collect();
            assert_eq!(moved.len(), 1);
            let i = moved[0];
            assert!(next[i] > state[i]);
            assert!(next[i] - state[i] <= 6);
            assert!(next[i] <= BOARD_LENGTH);
        }
        assert_eq!(state, [10, 20, 30, 55]);
    }

    #[test]
    fn test_neighbor_never_leaves_board() {
        let mut rng = create_rng(3);
        let mut state = [55, 56, 57, 52];
        for _ in 0..100 {
            state = ludo_neighbor(&state, &mut rng);
            assert!(state.iter().all(|&p| p <= BOARD_LENGTH));
        }
    }

    #[test]
    fn test_race_end_to_end() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.90)
            .with_max_iterations(5000)
            .with_seed(2024);

        let result = SaRunner::run(&LudoRace, [0, 0, 0, 0], &config).unwrap();

        assert!(result.best.iter().all(|&p| p <= BOARD_LENGTH));
        assert!(result.best_cost < 228.0);
        assert!((ludo_cost(&result.best) - result.best_cost).abs() < 1e-12);
    }

    #[test]
    fn test_race_closure_api() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.90)
            .with_max_iterations(5000);
        let mut rng = create_rng(99);

        let (best, best_cost) = anneal(
            [0u32; TOKENS],
            |s: &LudoState| Ok::<_, Infallible>(ludo_cost(s)),
            |s: &LudoState, rng: &mut StdRng| Ok(ludo_neighbor(s, rng)),
            &config,
            &mut rng,
        )
        .unwrap();

        // Every move is an improvement or a no-op at home, so the race finishes.
        assert_eq!(best, [BOARD_LENGTH; TOKENS]);
        assert!(best_cost.abs() < 1e-12);
    }

    #[test]
    fn test_race_deterministic_with_seed() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.90)
            .with_max_iterations(300)
            .with_seed(5);
        let a = SaRunner::run(&LudoRace, [0; TOKENS], &config).unwrap();
        let b = SaRunner::run(&LudoRace, [0; TOKENS], &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost.to_bits(), b.best_cost.to_bits());
    }
}
