//! State of the "Add Player Game Stats" form.
//!
//! Every field is required. After a submission completes the form is cleared,
//! whether the API accepted the stat line or not. The grid is not touched.

use common::{Counter, GameId, PlayerId, StatLine};

use crate::{ApiError, StatsApi};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("no player selected")]
    MissingPlayer,
    #[error("no game selected")]
    MissingGame,
    #[error("{} is required", .0.abbreviation())]
    MissingCounter(Counter),
    #[error("{} is not a whole number: {:?}", .0.abbreviation(), .1)]
    NotANumber(Counter, String),
    #[error("a submission is already in flight")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddStatLineForm {
    player: Option<PlayerId>,
    game: Option<GameId>,
    counters: [String; 5],
    submitting: bool,
}

/// A validated stat line waiting for its create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    line: StatLine,
}

impl AddStatLineForm {
    pub fn player(&self) -> Option<PlayerId> {
        self.player
    }

    pub fn game(&self) -> Option<GameId> {
        self.game
    }

    /// The raw text of a counter input, empty while unset.
    pub fn counter(&self, counter: Counter) -> &str {
        &self.counters[counter as usize]
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn select_player(&mut self, player: Option<PlayerId>) {
        self.player = player;
    }

    pub fn select_game(&mut self, game: Option<GameId>) {
        self.game = game;
    }

    pub fn set_counter<S>(&mut self, counter: Counter, value: S)
    where
        S: Into<String>,
    {
        self.counters[counter as usize] = value.into();
    }

    pub fn is_unset(&self) -> bool {
        self.player.is_none() && self.game.is_none() && self.counters.iter().all(String::is_empty)
    }

    /// The stat line the form currently describes.
    pub fn submission(&self) -> Result<StatLine, FormError> {
        let player_id = self.player.ok_or(FormError::MissingPlayer)?;
        let game_id = self.game.ok_or(FormError::MissingGame)?;

        let mut line = StatLine {
            player_id,
            game_id,
            points: 0,
            assists: 0,
            rebounds: 0,
            blocks: 0,
            steals: 0,
        };
        for counter in Counter::ALL {
            let raw = self.counter(counter).trim();
            if raw.is_empty() {
                return Err(FormError::MissingCounter(counter));
            }
            *line.counter_mut(counter) = raw
                .parse()
                .map_err(|_| FormError::NotANumber(counter, raw.to_owned()))?;
        }

        Ok(line)
    }

    pub fn begin_submit(&mut self) -> Result<PendingSubmit, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }

        let line = self.submission()?;
        self.submitting = true;

        Ok(PendingSubmit { line })
    }

    /// Clears the form and hands the outcome back for the caller to surface.
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmit,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        *self = Self::default();

        match result {
            Ok(()) => {
                tracing::info!(line = ?pending.line, "Added stat line");
                Ok(())
            }
            Err(e) => {
                tracing::error!(line = ?pending.line, "Adding stat line: {}", e);
                Err(e)
            }
        }
    }
}

impl PendingSubmit {
    pub async fn send<A>(&self, api: &A) -> Result<(), ApiError>
    where
        A: StatsApi + ?Sized,
    {
        api.add_stat_line(&self.line).await
    }
}
