//! Projection of API records into `{value, label}` pairs for selection controls.

use crate::{Game, GameId, Player, PlayerId, Team, TeamId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<Id> {
    pub value: Id,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList<Id> {
    entries: Vec<SelectOption<Id>>,
}

impl<Id> Default for OptionList<Id> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<Id> OptionList<Id>
where
    Id: PartialEq + Copy,
{
    pub fn label_for(&self, id: Id) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.value == id)
            .map(|entry| entry.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption<Id>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Id> FromIterator<SelectOption<Id>> for OptionList<Id> {
    fn from_iter<T: IntoIterator<Item = SelectOption<Id>>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

pub fn player_options(players: &[Player]) -> OptionList<PlayerId> {
    players
        .iter()
        .map(|player| SelectOption {
            value: player.player_id,
            label: format!("{} {}", player.first_name, player.last_name),
        })
        .collect()
}

pub fn game_options(games: &[Game]) -> OptionList<GameId> {
    games
        .iter()
        .map(|game| SelectOption {
            value: game.game_id,
            label: format!(
                "Date: {} | Time: {} | Location: {}",
                game.date, game.time, game.location
            ),
        })
        .collect()
}

pub fn team_options(teams: &[Team]) -> OptionList<TeamId> {
    teams
        .iter()
        .map(|team| SelectOption {
            value: team.team_id,
            label: team.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn players_labelled_by_full_name() {
        let players = vec![
            Player {
                player_id: PlayerId(1),
                first_name: "Jalen".to_owned(),
                last_name: "Brunson".to_owned(),
            },
            Player {
                player_id: PlayerId(6),
                first_name: "Josh".to_owned(),
                last_name: "Hart".to_owned(),
            },
        ];

        let options = player_options(&players);

        assert_eq!(options.len(), players.len());
        for (option, player) in options.iter().zip(players.iter()) {
            assert_eq!(option.value, player.player_id);
            assert_eq!(option.label, format!("{} {}", player.first_name, player.last_name));
        }
        assert_eq!(options.label_for(PlayerId(6)), Some("Josh Hart"));
        assert_eq!(options.label_for(PlayerId(2)), None);
    }

    #[test]
    fn games_labelled_by_date_time_location() {
        let games = vec![Game {
            game_id: GameId(1),
            date: "2023-11-02".to_owned(),
            time: "19:30:00".to_owned(),
            location: "Main Gym".to_owned(),
        }];

        let options = game_options(&games);

        assert_eq!(
            options.label_for(GameId(1)),
            Some("Date: 2023-11-02 | Time: 19:30:00 | Location: Main Gym")
        );
    }

    #[test]
    fn teams_labelled_by_name() {
        let teams = vec![Team {
            team_id: TeamId(2),
            name: "Hornets".to_owned(),
        }];

        let options = team_options(&teams);

        assert_eq!(
            options.iter().cloned().collect::<Vec<_>>(),
            vec![SelectOption {
                value: TeamId(2),
                label: "Hornets".to_owned()
            }]
        );
    }

    #[test]
    fn empty_input_empty_list() {
        assert!(team_options(&[]).is_empty());
    }
}
