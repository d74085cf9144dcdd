use crate::model::{Member, Team};

/// Media aritmética de pasos; `None` si el equipo está vacío
pub fn team_average(team: &Team) -> Option<f64> {
    if team.members.is_empty() {
        return None;
    }
    Some(team_total(team) as f64 / team.members.len() as f64)
}

pub fn team_total(team: &Team) -> u64 {
    team.members.iter().map(|m| u64::from(m.steps)).sum()
}

/// Miembro con más pasos (el primero en caso de empate): el ★ del equipo
pub fn team_leader(team: &Team) -> Option<&Member> {
    team.members
        .iter()
        .fold(None, |best: Option<&Member>, m| match best {
            Some(b) if b.steps >= m.steps => Some(b),
            _ => Some(m),
        })
}

/// Equipos ordenados por media descendente (orden estable en empates)
pub fn teams_by_average(teams: &[Team]) -> Vec<&Team> {
    let mut ranked: Vec<&Team> = teams.iter().collect();
    ranked.sort_by(|a, b| {
        let a = team_average(a).unwrap_or(0.0);
        let b = team_average(b).unwrap_or(0.0);
        b.total_cmp(&a)
    });
    ranked
}

pub fn average_label(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("平均歩数: {avg:.0} 歩"),
        None => "平均歩数: - 歩".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_teams_embedded;

    fn team(name: &str, steps: &[u32]) -> Team {
        Team {
            name: name.to_string(),
            members: steps
                .iter()
                .enumerate()
                .map(|(i, s)| Member {
                    name: format!("m{i}"),
                    steps: *s,
                })
                .collect(),
            hidden: vec![],
        }
    }

    #[test]
    fn average_keeps_full_precision_and_rounds_only_for_display() {
        let t = team("T", &[1, 2]);
        assert_eq!(team_average(&t), Some(1.5));
        let t = team("T", &[10, 10, 11]);
        let avg = team_average(&t).expect("avg");
        assert!((avg - 31.0 / 3.0).abs() < 1e-12);
        assert_eq!(average_label(Some(avg)), "平均歩数: 10 歩");
    }

    #[test]
    fn empty_team_has_no_average() {
        let t = team("T", &[]);
        assert_eq!(team_average(&t), None);
        assert_eq!(average_label(None), "平均歩数: - 歩");
        assert!(team_leader(&t).is_none());
    }

    #[test]
    fn embedded_team_averages_match_mean_of_steps() {
        let teams = read_teams_embedded().expect("roster ok");
        let a = &teams[0];
        let expected = (13242 + 5476 + 12577 + 10107 + 17742 + 9352 + 12742) as f64 / 7.0;
        assert_eq!(team_average(a), Some(expected));
        assert_eq!(average_label(team_average(a)), "平均歩数: 11605 歩");
    }

    #[test]
    fn leaders_are_the_top_steppers() {
        let teams = read_teams_embedded().expect("roster ok");
        let leaders: Vec<&str> = teams
            .iter()
            .filter_map(team_leader)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(leaders, vec!["菅野", "慶野", "辻", "青木"]);
    }

    #[test]
    fn leader_ties_go_to_first_member() {
        let t = team("T", &[5, 9, 9]);
        assert_eq!(team_leader(&t).map(|m| m.name.as_str()), Some("m1"));
    }

    #[test]
    fn ranking_by_average_is_stable() {
        let teams = vec![team("A", &[5]), team("B", &[9]), team("C", &[5])];
        let names: Vec<&str> = teams_by_average(&teams)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
