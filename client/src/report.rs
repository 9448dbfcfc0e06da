//! Team report: one selected team, four independently loaded views.

use common::report::{LeaderRow, PastGame, Record, RosterRow};
use common::TeamId;

use crate::{ApiError, StatsApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPart {
    Record,
    Roster,
    Leaders,
    PastGames,
}

/// One request of a team selection. Only queries of the latest selection are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportQuery {
    part: ReportPart,
    team: TeamId,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportData {
    Record(Record),
    Roster(Vec<RosterRow>),
    Leaders(Vec<LeaderRow>),
    PastGames(Vec<PastGame>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportResponse {
    pub query: ReportQuery,
    pub data: Result<ReportData, ApiError>,
}

impl ReportQuery {
    pub fn part(&self) -> ReportPart {
        self.part
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub async fn fetch<A>(self, api: &A) -> ReportResponse
    where
        A: StatsApi + ?Sized,
    {
        let team = self.team;
        let data = match self.part {
            ReportPart::Record => api.record(team).await.map(ReportData::Record),
            ReportPart::Roster => api.roster(team).await.map(ReportData::Roster),
            ReportPart::Leaders => api.stats_leaders(team).await.map(ReportData::Leaders),
            ReportPart::PastGames => api.past_games(team).await.map(ReportData::PastGames),
        };

        ReportResponse { query: self, data }
    }
}

/// Data of one sub-view together with the team it was loaded for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportView<T> {
    team: Option<TeamId>,
    data: T,
}

impl<T> ReportView<T> {
    /// The team the shown data belongs to, `None` before the first load.
    pub fn team(&self) -> Option<TeamId> {
        self.team
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    fn store(&mut self, team: TeamId, data: T) {
        self.team = Some(team);
        self.data = data;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamReport {
    selected: TeamId,
    generation: u64,
    record: ReportView<Record>,
    roster: ReportView<Vec<RosterRow>>,
    leaders: ReportView<Vec<LeaderRow>>,
    past_games: ReportView<Vec<PastGame>>,
}

impl TeamReport {
    pub fn new(team: TeamId) -> Self {
        Self {
            selected: team,
            generation: 0,
            record: ReportView::default(),
            roster: ReportView::default(),
            leaders: ReportView::default(),
            past_games: ReportView::default(),
        }
    }

    pub fn selected(&self) -> TeamId {
        self.selected
    }

    pub fn record(&self) -> &ReportView<Record> {
        &self.record
    }

    pub fn roster(&self) -> &ReportView<Vec<RosterRow>> {
        &self.roster
    }

    pub fn leaders(&self) -> &ReportView<Vec<LeaderRow>> {
        &self.leaders
    }

    pub fn past_games(&self) -> &ReportView<Vec<PastGame>> {
        &self.past_games
    }

    /// Selects `team` and returns the queries every view needs. Selecting the
    /// current team again reloads everything.
    pub fn select(&mut self, team: TeamId) -> [ReportQuery; 4] {
        self.selected = team;
        self.generation += 1;

        let generation = self.generation;
        [
            ReportPart::Record,
            ReportPart::Roster,
            ReportPart::Leaders,
            ReportPart::PastGames,
        ]
        .map(|part| ReportQuery {
            part,
            team,
            generation,
        })
    }

    /// Whether a view still shows data of a previously selected team.
    pub fn is_stale<T>(&self, view: &ReportView<T>) -> bool {
        view.team() != Some(self.selected)
    }

    /// Stores a response, returns whether it was used.
    ///
    /// Responses of an earlier selection are dropped, even when it was for the
    /// same team, so a slow request cannot overwrite newer data. Failures keep
    /// the previous data.
    pub fn apply(&mut self, response: ReportResponse) -> bool {
        let team = response.query.team();
        if response.query.generation != self.generation {
            tracing::debug!(query = ?response.query, selected = %self.selected, "Dropping stale report response");
            return false;
        }

        let data = match response.data {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(query = ?response.query, "Loading report: {}", e);
                return false;
            }
        };

        match data {
            ReportData::Record(record) => self.record.store(team, record),
            ReportData::Roster(rows) => self.roster.store(team, rows),
            ReportData::Leaders(rows) => self.leaders.store(team, rows),
            ReportData::PastGames(rows) => self.past_games.store(team, rows),
        }
        true
    }
}
