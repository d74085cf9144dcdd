// src/data.rs

use crate::error::DataError;
use crate::model::Team;
use serde::Deserialize;
use std::collections::HashSet;

const TEAMS_YAML: &str = include_str!("data/teams.yaml");

#[derive(Deserialize)]
struct TeamFile {
    teams: Vec<Team>,
}

/// Carga los equipos desde el YAML embebido
pub fn read_teams_embedded() -> Result<Vec<Team>, DataError> {
    parse_teams(TEAMS_YAML)
}

/// Parsea y valida: equipos únicos y ocultos que existan en su equipo
pub fn parse_teams(content: &str) -> Result<Vec<Team>, DataError> {
    let file: TeamFile = serde_yaml::from_str(content)?;

    let mut seen = HashSet::new();
    for team in &file.teams {
        if !seen.insert(team.name.as_str()) {
            return Err(DataError::DuplicateTeam(team.name.clone()));
        }
        if let Some(name) = team
            .hidden
            .iter()
            .find(|h| !team.members.iter().any(|m| &m.name == *h))
        {
            return Err(DataError::UnknownHiddenMember {
                team: team.name.clone(),
                name: name.clone(),
            });
        }
    }

    log::debug!("{} equipos cargados", file.teams.len());
    Ok(file.teams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_roster_has_four_teams_with_two_hidden_each() {
        let teams = read_teams_embedded().expect("roster ok");
        assert_eq!(teams.len(), 4);
        for team in &teams {
            assert_eq!(team.members.len(), 7);
            assert_eq!(team.hidden.len(), 2);
        }
        assert_eq!(teams[0].name, "SeawaterA");
        assert_eq!(teams[0].members[4].name, "菅野");
        assert_eq!(teams[0].members[4].steps, 17742);
    }

    #[test]
    fn hidden_name_outside_team_is_rejected() {
        let yaml = r#"
teams:
  - name: X
    members:
      - { name: a, steps: 1 }
    hidden: [b]
"#;
        match parse_teams(yaml) {
            Err(DataError::UnknownHiddenMember { team, name }) => {
                assert_eq!(team, "X");
                assert_eq!(name, "b");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn duplicate_team_names_are_rejected() {
        let yaml = r#"
teams:
  - name: X
    members: []
  - name: X
    members: []
"#;
        assert!(matches!(parse_teams(yaml), Err(DataError::DuplicateTeam(t)) if t == "X"));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(parse_teams("teams: 3"), Err(DataError::Parse(_))));
    }
}
