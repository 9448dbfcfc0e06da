use common::TeamId;

/// What the grid does when a save or delete it already applied locally fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Undo the local change and raise a notice.
    #[default]
    Rollback,
    /// Keep showing the optimistic state, only log the failure.
    KeepOptimistic,
}

impl core::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rollback" => Ok(Self::Rollback),
            "keep" | "keep-optimistic" => Ok(Self::KeepOptimistic),
            other => Err(format!("unknown failure policy {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix for every API path, empty for same origin.
    pub api_base: String,
    pub default_team: TeamId,
    pub failure_policy: FailurePolicy,
}

impl Config {
    pub const DEFAULT_TEAM: TeamId = TeamId(1);

    /// Builds the configuration from optional raw values, falling back to the
    /// default for anything missing or unparsable.
    pub fn from_values(
        api_base: Option<&str>,
        default_team: Option<&str>,
        failure_policy: Option<&str>,
    ) -> Self {
        let default_team = match default_team.map(str::parse::<TeamId>) {
            Some(Ok(team)) => team,
            Some(Err(e)) => {
                tracing::warn!("Invalid default team, using {}: {:?}", Self::DEFAULT_TEAM, e);
                Self::DEFAULT_TEAM
            }
            None => Self::DEFAULT_TEAM,
        };

        let failure_policy = match failure_policy.map(str::parse::<FailurePolicy>) {
            Some(Ok(policy)) => policy,
            Some(Err(e)) => {
                tracing::warn!("{}, using rollback", e);
                FailurePolicy::default()
            }
            None => FailurePolicy::default(),
        };

        Self {
            api_base: api_base.unwrap_or_default().trim().to_owned(),
            default_team,
            failure_policy,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
