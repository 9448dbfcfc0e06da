use client::{ApiError, StatsApi};
use common::endpoints;
use common::report::{LeaderRow, PastGame, Record, RosterRow};
use common::{Game, Player, StatLine, StatLineKey, Team, TeamId};
use reqwasm::http::{Request, Response};

/// [`StatsApi`] over `fetch`, relative to a configurable base.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: std::rc::Rc<str>,
}

impl HttpApi {
    pub fn new<IS>(base: IS) -> Self
    where
        IS: Into<std::rc::Rc<str>>,
    {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base, path)
    }

    async fn get<T>(&self, url: String) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
        let response = check(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))
    }

    async fn send_json<B>(&self, request: Request, body: &B) -> Result<(), ApiError>
    where
        B: serde::Serialize,
    {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Transport(format!("Encoding request body: {}", e)))?;

        let response = request
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
        check(response).await?;

        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status, %body, "Request rejected");

    Err(ApiError::from_status(status, body))
}

#[async_trait::async_trait(?Send)]
impl StatsApi for HttpApi {
    async fn players(&self) -> Result<Vec<Player>, ApiError> {
        self.get(self.url(endpoints::GET_PLAYERS)).await
    }

    async fn games(&self) -> Result<Vec<Game>, ApiError> {
        self.get(self.url(endpoints::GET_GAMES)).await
    }

    async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        self.get(self.url(endpoints::GET_TEAMS)).await
    }

    async fn stat_lines(&self) -> Result<Vec<StatLine>, ApiError> {
        self.get(self.url(endpoints::GET_STATS)).await
    }

    async fn add_stat_line(&self, line: &StatLine) -> Result<(), ApiError> {
        self.send_json(Request::post(&self.url(endpoints::ADD_STATS)), line)
            .await
    }

    async fn edit_stat_line(&self, line: &StatLine) -> Result<(), ApiError> {
        self.send_json(Request::put(&self.url(endpoints::EDIT_STATS)), line)
            .await
    }

    async fn delete_stat_line(&self, key: StatLineKey) -> Result<(), ApiError> {
        self.send_json(Request::delete(&self.url(endpoints::DELETE_STATS)), &key)
            .await
    }

    async fn record(&self, team: TeamId) -> Result<Record, ApiError> {
        self.get(endpoints::team_scoped(&self.base, endpoints::GET_RECORD, team))
            .await
    }

    async fn roster(&self, team: TeamId) -> Result<Vec<RosterRow>, ApiError> {
        self.get(endpoints::team_scoped(&self.base, endpoints::GET_ROSTER, team))
            .await
    }

    async fn stats_leaders(&self, team: TeamId) -> Result<Vec<LeaderRow>, ApiError> {
        self.get(endpoints::team_scoped(&self.base, endpoints::GET_STATS_LEADERS, team))
            .await
    }

    async fn past_games(&self, team: TeamId) -> Result<Vec<PastGame>, ApiError> {
        self.get(endpoints::team_scoped(&self.base, endpoints::GET_PAST_GAMES, team))
            .await
    }
}
