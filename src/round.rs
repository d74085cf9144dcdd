use crate::model::{MaskedEntry, MaskedTeam, QuizRound, SlotKey, Team};
use crate::settings::QuizSettings;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// Genera `count` rondas independientes
pub fn generate_rounds<R: Rng + ?Sized>(
    teams: &[Team],
    settings: &QuizSettings,
    count: usize,
    rng: &mut R,
) -> Vec<QuizRound> {
    (0..count)
        .map(|_| generate_round(teams, settings, rng))
        .collect()
}

pub fn generate_round<R: Rng + ?Sized>(
    teams: &[Team],
    settings: &QuizSettings,
    rng: &mut R,
) -> QuizRound {
    let mut correct = BTreeMap::new();
    let mut masked_teams = Vec::with_capacity(teams.len());

    for (ti, team) in teams.iter().enumerate() {
        let entries = team
            .members
            .iter()
            .map(|m| match team.hidden.iter().position(|h| *h == m.name) {
                Some(si) => {
                    let key = SlotKey::new(ti, si);
                    correct.insert(key, m.name.clone());
                    MaskedEntry::Hidden { key, steps: m.steps }
                }
                None => MaskedEntry::Visible {
                    name: m.name.clone(),
                    steps: m.steps,
                },
            })
            .collect();
        masked_teams.push(MaskedTeam {
            name: team.name.clone(),
            entries,
        });
    }

    // Respuestas correctas sin repetir (primera aparición)
    let mut choices: Vec<String> = Vec::new();
    for name in correct.values() {
        if !choices.contains(name) {
            choices.push(name.clone());
        }
    }

    let pool = distractor_pool(teams, &choices);
    let wanted = settings.distractor_count(correct.len()).min(pool.len());
    choices.extend(pool.choose_multiple(rng, wanted).cloned());
    choices.shuffle(rng);

    QuizRound {
        teams: masked_teams,
        correct,
        choices,
    }
}

/// Nombres no ocultos de todos los equipos, sin duplicados ni respuestas correctas
fn distractor_pool(teams: &[Team], correct: &[String]) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for team in teams {
        for m in &team.members {
            if !team.is_hidden(&m.name) && !correct.contains(&m.name) && !pool.contains(&m.name) {
                pool.push(m.name.clone());
            }
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_teams_embedded;
    use crate::model::Member;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn small_team(name: &str, members: &[&str], hidden: &[&str]) -> Team {
        Team {
            name: name.to_string(),
            members: members
                .iter()
                .map(|m| Member {
                    name: m.to_string(),
                    steps: 1000,
                })
                .collect(),
            hidden: hidden.iter().map(|h| h.to_string()).collect(),
        }
    }

    #[test]
    fn round_has_one_slot_per_hidden_member() {
        let teams = read_teams_embedded().expect("roster ok");
        let mut rng = StdRng::seed_from_u64(7);
        let round = generate_round(&teams, &QuizSettings::default(), &mut rng);
        assert_eq!(round.slot_count(), 8);
        assert_eq!(round.correct.get(&SlotKey::new(0, 0)).map(String::as_str), Some("仲井"));
        assert_eq!(round.correct.get(&SlotKey::new(3, 1)).map(String::as_str), Some("谷口"));
    }

    #[test]
    fn hidden_members_are_masked_in_display() {
        let teams = read_teams_embedded().expect("roster ok");
        let mut rng = StdRng::seed_from_u64(1);
        let round = generate_round(&teams, &QuizSettings::default(), &mut rng);
        let a = &round.teams[0];
        assert_eq!(a.entries.len(), 7);
        assert_eq!(
            a.entries[1],
            MaskedEntry::Hidden {
                key: SlotKey::new(0, 0),
                steps: 5476
            }
        );
        assert!(matches!(&a.entries[0], MaskedEntry::Visible { name, .. } if name == "嶋"));
    }

    #[test]
    fn choices_hold_every_answer_once_and_no_duplicates() {
        let teams = read_teams_embedded().expect("roster ok");
        let settings = QuizSettings::default();
        let mut rng = StdRng::seed_from_u64(42);
        for round in generate_rounds(&teams, &settings, 20, &mut rng) {
            let unique: HashSet<&String> = round.choices.iter().collect();
            assert_eq!(unique.len(), round.choices.len());
            for answer in round.correct.values() {
                assert_eq!(round.choices.iter().filter(|c| *c == answer).count(), 1);
            }
            // 8 ocultos -> max(8 - 8, 4) = 4 distractores
            assert_eq!(round.choices.len(), 8 + 4);
        }
    }

    #[test]
    fn distractors_come_from_visible_members_only() {
        let teams = read_teams_embedded().expect("roster ok");
        let mut rng = StdRng::seed_from_u64(3);
        let round = generate_round(&teams, &QuizSettings::default(), &mut rng);
        let hidden: HashSet<&String> = teams.iter().flat_map(|t| &t.hidden).collect();
        let visible: HashSet<&String> = teams
            .iter()
            .flat_map(|t| &t.members)
            .map(|m| &m.name)
            .filter(|n| !hidden.contains(n))
            .collect();
        let distractors: Vec<&String> = round
            .choices
            .iter()
            .filter(|c| !round.correct.values().any(|v| v == *c))
            .collect();
        assert_eq!(distractors.len(), 4);
        assert!(distractors.iter().all(|d| visible.contains(d)));
    }

    #[test]
    fn distractors_are_clamped_to_pool_size() {
        let teams = vec![small_team("T", &["a", "b", "c"], &["a"])];
        let mut rng = StdRng::seed_from_u64(9);
        let round = generate_round(&teams, &QuizSettings::default(), &mut rng);
        // max(8 - 1, 4) = 7 pero sólo hay 2 visibles
        let mut choices = round.choices.clone();
        choices.sort();
        assert_eq!(choices, vec!["a", "b", "c"]);
    }

    #[test]
    fn repeated_names_across_teams_appear_once() {
        let teams = vec![
            small_team("T1", &["x", "y", "z"], &["x"]),
            small_team("T2", &["x", "y", "w"], &["x"]),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let round = generate_round(&teams, &QuizSettings::default(), &mut rng);
        assert_eq!(round.slot_count(), 2);
        let mut choices = round.choices.clone();
        choices.sort();
        assert_eq!(choices, vec!["w", "x", "y", "z"]);
    }

    #[test]
    fn no_hidden_members_means_only_distractors() {
        let teams = vec![small_team("T", &["a", "b", "c", "d", "e"], &[])];
        let mut rng = StdRng::seed_from_u64(11);
        let round = generate_round(&teams, &QuizSettings::default(), &mut rng);
        assert_eq!(round.slot_count(), 0);
        assert_eq!(round.choices.len(), 5);
    }

    #[test]
    fn generate_rounds_builds_requested_count() {
        let teams = read_teams_embedded().expect("roster ok");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_rounds(&teams, &QuizSettings::default(), 12, &mut rng).len(), 12);
    }
}
