use super::types::{GenerationConfig, SkippedOccurrence};
use super::{availability, selector};
use crate::model::{
    Assignment, AssignmentId, AssignmentStatus, Role, TeamMember, Volunteer, Weekday,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Percorre o intervalo pedido, semana a semana e na ordem do padrão de
/// dias, e aciona seleção por ocorrência. Os contadores do pool são
/// atualizados após cada equipe fechada, então ocorrências seguintes
/// enxergam a carga nova — a ordem de varredura é reprodutível de propósito.
pub(super) fn run(
    pool: &mut [Volunteer],
    config: &GenerationConfig,
    start: NaiveDate,
    weeks: u32,
    now: DateTime<Utc>,
) -> (Vec<Assignment>, Vec<SkippedOccurrence>) {
    let mut assignments = Vec::new();
    let mut skipped = Vec::new();

    for week in 0..weeks {
        for &day in &config.weekday_pattern {
            let date = start + Duration::days(i64::from(week * 7 + day.index()));

            let candidates = availability::eligible_candidates(pool, day);
            match selector::select_team(pool, &candidates, config) {
                Some(team_indices) => {
                    let team = team_indices
                        .iter()
                        .enumerate()
                        .map(|(position, &i)| TeamMember {
                            volunteer_id: pool[i].id,
                            volunteer_name: pool[i].name.clone(),
                            // rodízio determinístico de funções por posição
                            role: Role::ROTATION[position % Role::ROTATION.len()],
                        })
                        .collect();

                    assignments.push(Assignment {
                        id: AssignmentId::random(),
                        date,
                        weekday: day,
                        service_name: service_name(day),
                        team,
                        status: AssignmentStatus::Scheduled,
                    });

                    for &i in &team_indices {
                        pool[i].schedule_count += 1;
                        pool[i].last_assigned_at = Some(now);
                    }
                }
                None => {
                    skipped.push(SkippedOccurrence {
                        date,
                        weekday: day,
                        eligible: candidates.len(),
                        needed: config.team_size,
                    });
                }
            }
        }
    }

    (assignments, skipped)
}

/// Nome do culto derivado do dia; dias sem culto fixo caem no genérico.
pub(super) fn service_name(day: Weekday) -> String {
    match day {
        Weekday::Domingo => "Culto de Domingo 10h".to_string(),
        Weekday::Quarta => "Culto de Quarta 19h30".to_string(),
        Weekday::Sexta => "Culto de Sexta 19h30".to_string(),
        other => format!("Culto de {}", other.label()),
    }
}
