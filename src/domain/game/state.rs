//! GameState - the record kept per session and persisted per user.

use serde::{Deserialize, Serialize};

use super::{FactsIndex, GameStatus};
use crate::domain::facts::{FactCatalog, FactNumber, FACT_COUNT};
use crate::domain::foundation::ValidationError;

/// Progress of one user through the fact catalog.
///
/// # Invariants
///
/// - `facts_index` is always within `-1..=9`
/// - `exhausted` is only set while `facts_index` is the last fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord", into = "GameStateRecord")]
pub struct GameState {
    times_played: u32,
    facts_index: FactsIndex,
    exhausted: bool,
}

/// Result of asking for the next fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The index moved forward and this fact should be spoken.
    Told(&'static str),
    /// There was no fact left to tell; the index did not move.
    Exhausted,
}

impl GameState {
    /// State of a user who has never played.
    pub fn new() -> Self {
        Self {
            times_played: 0,
            facts_index: FactsIndex::NOT_STARTED,
            exhausted: false,
        }
    }

    /// Reconstitute a state from stored values.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `exhausted` is set anywhere but the last fact
    pub fn reconstitute(
        times_played: u32,
        facts_index: FactsIndex,
        exhausted: bool,
    ) -> Result<Self, ValidationError> {
        if exhausted && facts_index != FactsIndex::LAST {
            return Err(ValidationError::invalid_format(
                "exhausted",
                format!("game cannot be exhausted at facts_index {}", facts_index),
            ));
        }
        Ok(Self {
            times_played,
            facts_index,
            exhausted,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of completed sessions.
    pub fn times_played(&self) -> u32 {
        self.times_played
    }

    /// Position of the last fact told.
    pub fn facts_index(&self) -> FactsIndex {
        self.facts_index
    }

    /// True once "yes" has been asked past the last fact.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether another "yes" can still produce a fact.
    ///
    /// Index 9 still counts as playable: the next "yes" is what reports
    /// exhaustion.
    pub fn can_play(&self) -> bool {
        !self.is_exhausted()
    }

    /// Lifecycle status derived from the record.
    pub fn status(&self) -> GameStatus {
        if self.exhausted {
            GameStatus::Exhausted
        } else {
            GameStatus::Ready(self.facts_index)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Move to the next fact and return it, or report that none are left.
    pub fn advance(&mut self, catalog: &FactCatalog) -> Advance {
        if self.exhausted {
            return Advance::Exhausted;
        }
        match self.facts_index.next().and_then(|next| next.fact_number()) {
            Some(number) => {
                self.facts_index = FactsIndex::of(number);
                Advance::Told(catalog.by_number(number))
            }
            None => {
                self.exhausted = true;
                Advance::Exhausted
            }
        }
    }

    /// Jump straight to a numbered fact and return it.
    pub fn jump_to(&mut self, number: FactNumber, catalog: &FactCatalog) -> &'static str {
        self.facts_index = FactsIndex::of(number);
        self.exhausted = false;
        catalog.by_number(number)
    }

    /// Start a new game from before the first fact.
    pub fn restart(&mut self) {
        self.facts_index = FactsIndex::NOT_STARTED;
        self.exhausted = false;
    }

    /// Count one more completed session.
    pub fn record_play(&mut self) {
        self.times_played = self.times_played.saturating_add(1);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Stored shape of [`GameState`].
///
/// Older records mark a finished game with `facts_index` equal to the catalog
/// length and no `exhausted` field; those load as index 9, exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateRecord {
    pub times_played: u32,
    pub facts_index: i64,
    #[serde(default)]
    pub exhausted: bool,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = ValidationError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        if record.facts_index == FACT_COUNT as i64 {
            return GameState::reconstitute(record.times_played, FactsIndex::LAST, true);
        }
        let facts_index = FactsIndex::try_new(record.facts_index)?;
        GameState::reconstitute(record.times_played, facts_index, record.exhausted)
    }
}

impl From<GameState> for GameStateRecord {
    fn from(state: GameState) -> Self {
        Self {
            times_played: state.times_played,
            facts_index: i64::from(state.facts_index),
            exhausted: state.exhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::facts::CAT_FACTS;

    fn catalog() -> FactCatalog {
        FactCatalog::cat_facts()
    }

    fn at(index: i64) -> GameState {
        GameState::reconstitute(0, FactsIndex::try_new(index).unwrap(), false).unwrap()
    }

    #[test]
    fn new_state_has_not_started() {
        let state = GameState::new();
        assert_eq!(state.times_played(), 0);
        assert_eq!(state.facts_index(), FactsIndex::NOT_STARTED);
        assert!(state.can_play());
        assert_eq!(state.status(), GameStatus::Ready(FactsIndex::NOT_STARTED));
    }

    #[test]
    fn advance_from_fresh_tells_first_fact() {
        let mut state = GameState::new();
        assert_eq!(state.advance(&catalog()), Advance::Told(CAT_FACTS[0]));
        assert_eq!(state.facts_index().value(), 0);
    }

    #[test]
    fn advance_walks_through_every_fact() {
        let mut state = GameState::new();
        for (i, fact) in CAT_FACTS.iter().enumerate() {
            assert_eq!(state.advance(&catalog()), Advance::Told(*fact));
            assert_eq!(state.facts_index().value() as usize, i);
        }
        assert!(state.can_play());
    }

    #[test]
    fn advance_at_last_fact_reports_exhausted_without_moving() {
        let mut state = at(9);
        assert!(state.can_play());
        assert_eq!(state.advance(&catalog()), Advance::Exhausted);
        assert_eq!(state.facts_index(), FactsIndex::LAST);
        assert!(state.is_exhausted());
        assert!(!state.can_play());
        assert_eq!(state.status(), GameStatus::Exhausted);

        assert_eq!(state.advance(&catalog()), Advance::Exhausted);
        assert_eq!(state.facts_index(), FactsIndex::LAST);
    }

    #[test]
    fn jump_to_selects_fact_and_clears_exhaustion() {
        let mut state = at(9);
        state.advance(&catalog());
        let fact = state.jump_to(FactNumber::try_new(3).unwrap(), &catalog());
        assert_eq!(fact, CAT_FACTS[2]);
        assert_eq!(state.facts_index().value(), 2);
        assert!(!state.is_exhausted());
    }

    #[test]
    fn restart_resets_index_from_any_position() {
        for index in -1..=9 {
            let mut state = at(index);
            state.restart();
            assert_eq!(state.facts_index(), FactsIndex::NOT_STARTED);
            assert!(state.can_play());
        }
    }

    #[test]
    fn record_play_increments_times_played() {
        let mut state = GameState::new();
        state.record_play();
        state.record_play();
        assert_eq!(state.times_played(), 2);
    }

    #[test]
    fn reconstitute_rejects_exhaustion_before_last_fact() {
        let result = GameState::reconstitute(1, FactsIndex::try_new(4).unwrap(), true);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn serializes_named_fields() {
        let state = at(2);
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"times_played": 0, "facts_index": 2, "exhausted": false})
        );
    }

    #[test]
    fn deserializes_record_without_exhausted_field() {
        let state: GameState =
            serde_json::from_str(r#"{"times_played": 4, "facts_index": 6}"#).unwrap();
        assert_eq!(state.times_played(), 4);
        assert_eq!(state.facts_index().value(), 6);
        assert!(!state.is_exhausted());
    }

    #[test]
    fn legacy_finished_record_loads_as_exhausted() {
        let state: GameState =
            serde_json::from_str(r#"{"times_played": 2, "facts_index": 10}"#).unwrap();
        assert_eq!(state.facts_index(), FactsIndex::LAST);
        assert!(state.is_exhausted());
    }

    #[test]
    fn out_of_range_record_is_rejected() {
        for json in [
            r#"{"times_played": 0, "facts_index": 11}"#,
            r#"{"times_played": 0, "facts_index": -2}"#,
            r#"{"times_played": -1, "facts_index": 0}"#,
        ] {
            assert!(serde_json::from_str::<GameState>(json).is_err(), "{}", json);
        }
    }
}
