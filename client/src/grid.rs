//! The editable stat line grid.
//!
//! Rows move between view and edit mode through [`StatsGrid::dispatch`].
//! Saves and deletes are applied locally right away and hand back a
//! [`Mutation`] to send; once the request finishes, [`StatsGrid::settle`]
//! applies the configured [`FailurePolicy`].

use common::{Counter, GameId, PlayerId, StatLine, StatLineKey};

use crate::{ApiError, FailurePolicy, StatsApi};

/// Local identity of a grid row. Only meaningful to this grid, never sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

impl core::fmt::Display for RowKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    View,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Save,
    Cancel,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("row {0} does not exist")]
    UnknownRow(RowKey),
    #[error("row {0} is not being edited")]
    NotEditing(RowKey),
    #[error("row {0} is being edited")]
    Editing(RowKey),
    #[error("row {0} is still being created")]
    Creating(RowKey),
    #[error("player and game of row {0} can no longer change")]
    KeyLocked(RowKey),
    #[error("row {0} needs a player and a game")]
    IncompleteKey(RowKey),
    #[error("player {} already has a stat line for game {}", .0.player_id, .0.game_id)]
    DuplicateKey(StatLineKey),
}

/// Values of a row while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    pub player_id: Option<PlayerId>,
    pub game_id: Option<GameId>,
    counters: [i32; 5],
}

impl Draft {
    fn from_line(line: &StatLine) -> Self {
        let mut counters = [0; 5];
        for counter in Counter::ALL {
            counters[counter as usize] = line.counter(counter);
        }

        Self {
            player_id: Some(line.player_id),
            game_id: Some(line.game_id),
            counters,
        }
    }

    fn empty() -> Self {
        Self {
            player_id: None,
            game_id: None,
            counters: [0; 5],
        }
    }

    pub fn counter(&self, counter: Counter) -> i32 {
        self.counters[counter as usize]
    }

    fn to_line(&self) -> Option<StatLine> {
        let mut line = StatLine {
            player_id: self.player_id?,
            game_id: self.game_id?,
            points: 0,
            assists: 0,
            rebounds: 0,
            blocks: 0,
            steals: 0,
        };
        for counter in Counter::ALL {
            *line.counter_mut(counter) = self.counter(counter);
        }
        Some(line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    key: RowKey,
    /// Last known-good values, `None` until a transient row is first saved.
    line: Option<StatLine>,
    draft: Option<Draft>,
    persisted: bool,
    /// A create request for this row has not settled yet.
    creating: bool,
}

impl Row {
    pub fn key(&self) -> RowKey {
        self.key
    }

    pub fn mode(&self) -> RowMode {
        match self.draft {
            Some(_) => RowMode::Edit,
            None => RowMode::View,
        }
    }

    /// Created locally and never saved.
    pub fn is_transient(&self) -> bool {
        !self.persisted
    }

    pub fn line(&self) -> Option<&StatLine> {
        self.line.as_ref()
    }

    /// Saved locally, waiting for its create request. Can't be edited or deleted yet.
    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        match (&self.draft, &self.line) {
            (Some(draft), _) => draft.player_id,
            (None, Some(line)) => Some(line.player_id),
            (None, None) => None,
        }
    }

    pub fn game_id(&self) -> Option<GameId> {
        match (&self.draft, &self.line) {
            (Some(draft), _) => draft.game_id,
            (None, Some(line)) => Some(line.game_id),
            (None, None) => None,
        }
    }

    /// The value currently displayed, the draft's while editing.
    pub fn counter(&self, counter: Counter) -> i32 {
        match (&self.draft, &self.line) {
            (Some(draft), _) => draft.counter(counter),
            (None, Some(line)) => line.counter(counter),
            (None, None) => 0,
        }
    }
}

/// A local change that still has to reach the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create {
        row: RowKey,
        line: StatLine,
    },
    Update {
        row: RowKey,
        line: StatLine,
        previous: StatLine,
    },
    Delete {
        index: usize,
        removed: Row,
        key: StatLineKey,
    },
}

impl Mutation {
    pub async fn send<A>(&self, api: &A) -> Result<(), ApiError>
    where
        A: StatsApi + ?Sized,
    {
        match self {
            Self::Create { line, .. } => api.add_stat_line(line).await,
            Self::Update { line, .. } => api.edit_stat_line(line).await,
            Self::Delete { key, .. } => api.delete_stat_line(*key).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsGrid {
    rows: Vec<Row>,
    next_key: u64,
    /// First key handed out by the latest load.
    loaded_from: u64,
    policy: FailurePolicy,
}

impl StatsGrid {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            rows: Vec::new(),
            next_key: 0,
            loaded_from: 0,
            policy,
        }
    }

    fn fresh_key(&mut self) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        key
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, key: RowKey) -> Option<&Row> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn row_keys(&self) -> Vec<RowKey> {
        self.rows.iter().map(|row| row.key).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_mut(&mut self, key: RowKey) -> Result<&mut Row, GridError> {
        self.rows
            .iter_mut()
            .find(|row| row.key == key)
            .ok_or(GridError::UnknownRow(key))
    }

    fn draft_mut(&mut self, key: RowKey) -> Result<&mut Row, GridError> {
        let row = self.row_mut(key)?;
        if row.draft.is_none() {
            return Err(GridError::NotEditing(key));
        }
        Ok(row)
    }

    /// Replaces every row with freshly keyed rows. Local edits are lost.
    pub fn replace_all(&mut self, lines: Vec<StatLine>) {
        tracing::debug!("Loaded {} stat lines", lines.len());

        self.loaded_from = self.next_key;
        let mut rows = Vec::with_capacity(lines.len());
        for line in lines {
            rows.push(Row {
                key: self.fresh_key(),
                line: Some(line),
                draft: None,
                persisted: true,
                creating: false,
            });
        }
        self.rows = rows;
    }

    /// Appends a transient row in edit mode.
    pub fn add_row(&mut self) -> RowKey {
        let key = self.fresh_key();
        self.rows.push(Row {
            key,
            line: None,
            draft: Some(Draft::empty()),
            persisted: false,
            creating: false,
        });
        key
    }

    pub fn select_player(&mut self, key: RowKey, player: PlayerId) -> Result<(), GridError> {
        let row = self.draft_mut(key)?;
        if row.persisted {
            return Err(GridError::KeyLocked(key));
        }
        if let Some(draft) = row.draft.as_mut() {
            draft.player_id = Some(player);
        }
        Ok(())
    }

    pub fn select_game(&mut self, key: RowKey, game: GameId) -> Result<(), GridError> {
        let row = self.draft_mut(key)?;
        if row.persisted {
            return Err(GridError::KeyLocked(key));
        }
        if let Some(draft) = row.draft.as_mut() {
            draft.game_id = Some(game);
        }
        Ok(())
    }

    pub fn set_counter(&mut self, key: RowKey, counter: Counter, value: i32) -> Result<(), GridError> {
        let row = self.draft_mut(key)?;
        if let Some(draft) = row.draft.as_mut() {
            draft.counters[counter as usize] = value;
        }
        Ok(())
    }

    /// Runs one row action, returning the request it requires, if any.
    pub fn dispatch(&mut self, key: RowKey, action: RowAction) -> Result<Option<Mutation>, GridError> {
        match action {
            RowAction::Edit => self.begin_edit(key).map(|_| None),
            RowAction::Save => self.process_row_update(key).map(Some),
            RowAction::Cancel => self.cancel(key).map(|_| None),
            RowAction::Delete => self.delete(key),
        }
    }

    fn begin_edit(&mut self, key: RowKey) -> Result<(), GridError> {
        let row = self.row_mut(key)?;
        if row.creating {
            return Err(GridError::Creating(key));
        }
        if row.draft.is_none() {
            row.draft = Some(row.line.as_ref().map(Draft::from_line).unwrap_or_else(Draft::empty));
        }
        Ok(())
    }

    fn cancel(&mut self, key: RowKey) -> Result<(), GridError> {
        let row = self.draft_mut(key)?;
        if row.persisted {
            row.draft = None;
        } else {
            self.rows.retain(|row| row.key != key);
        }
        Ok(())
    }

    /// Accepts or rejects the edited values of a row and applies them locally.
    pub fn process_row_update(&mut self, key: RowKey) -> Result<Mutation, GridError> {
        let row = self.draft_mut(key)?;
        let line = row
            .draft
            .as_ref()
            .and_then(Draft::to_line)
            .ok_or(GridError::IncompleteKey(key))?;

        if let Some(previous) = row.line.clone().filter(|_| row.persisted) {
            if previous.key() != line.key() {
                return Err(GridError::KeyLocked(key));
            }

            row.line = Some(line.clone());
            row.draft = None;
            return Ok(Mutation::Update {
                row: key,
                line,
                previous,
            });
        }

        let duplicate = self
            .rows
            .iter()
            .filter(|other| other.key != key)
            .filter_map(|other| other.line.as_ref())
            .any(|other| other.key() == line.key());
        if duplicate {
            return Err(GridError::DuplicateKey(line.key()));
        }

        let row = self.row_mut(key)?;
        row.line = Some(line.clone());
        row.draft = None;
        row.persisted = true;
        row.creating = true;
        Ok(Mutation::Create { row: key, line })
    }

    fn delete(&mut self, key: RowKey) -> Result<Option<Mutation>, GridError> {
        let index = self
            .rows
            .iter()
            .position(|row| row.key == key)
            .ok_or(GridError::UnknownRow(key))?;
        if self.rows[index].draft.is_some() {
            return Err(GridError::Editing(key));
        }
        if self.rows[index].creating {
            return Err(GridError::Creating(key));
        }

        let removed = self.rows.remove(index);
        let key = removed
            .line
            .as_ref()
            .filter(|_| removed.persisted)
            .map(StatLine::key);

        Ok(key.map(|key| Mutation::Delete {
            index,
            removed,
            key,
        }))
    }

    /// Applies the outcome of a sent mutation.
    ///
    /// Returns the error when the user should be told about it; with
    /// [`FailurePolicy::KeepOptimistic`] failures are only logged.
    pub fn settle(&mut self, mutation: Mutation, result: Result<(), ApiError>) -> Result<(), ApiError> {
        if let Mutation::Create { row, .. } = &mutation {
            if let Ok(row) = self.row_mut(*row) {
                row.creating = false;
            }
        }

        let error = match result {
            Ok(()) => {
                match &mutation {
                    Mutation::Create { line, .. } => tracing::info!(?line, "Created stat line"),
                    Mutation::Update { line, .. } => tracing::info!(?line, "Updated stat line"),
                    Mutation::Delete { key, .. } => tracing::info!(?key, "Deleted stat line"),
                }
                return Ok(());
            }
            Err(e) => e,
        };

        tracing::error!(?mutation, "Stat line request failed: {}", error);

        if self.policy == FailurePolicy::KeepOptimistic {
            return Ok(());
        }

        match mutation {
            Mutation::Create { row, line } => {
                // The API never stored this row, whatever it shows now.
                if let Ok(row) = self.row_mut(row) {
                    let current = row.line.take().unwrap_or(line);
                    row.persisted = false;
                    if row.draft.is_none() {
                        row.draft = Some(Draft::from_line(&current));
                    }
                }
            }
            Mutation::Update { row, line, previous } => {
                if let Ok(row) = self.row_mut(row) {
                    if row.line.as_ref() == Some(&line) {
                        row.line = Some(previous);
                    }
                }
            }
            Mutation::Delete { index, removed, .. } => {
                // Rows of an earlier load are gone for good.
                if removed.key.0 >= self.loaded_from && self.row(removed.key).is_none() {
                    let index = index.min(self.rows.len());
                    self.rows.insert(index, removed);
                }
            }
        }

        Err(error)
    }
}

impl Default for StatsGrid {
    fn default() -> Self {
        Self::new(FailurePolicy::default())
    }
}
