use super::types::GenerationConfig;
use crate::model::{Gender, Volunteer};

/// Seleciona uma equipe de exatamente `team_size` entre os candidatos do dia.
///
/// `candidates` são índices no pool, já ordenados por `schedule_count`
/// crescente. Retorna `None` quando não há elegíveis suficientes — a
/// ocorrência é pulada inteira, nunca sai equipe parcial.
pub(super) fn select_team(
    pool: &[Volunteer],
    candidates: &[usize],
    config: &GenerationConfig,
) -> Option<Vec<usize>> {
    // Partição estável por gênero; cada sublista preserva a ordem por carga.
    let males: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| pool[i].gender == Gender::Male)
        .collect();
    let females: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| pool[i].gender == Gender::Female)
        .collect();

    let mut team: Vec<usize> = Vec::with_capacity(config.team_size);

    // Cotas garantidas. Sublista menor que a cota entra com o que houver;
    // cota acima de team_size é truncada na ordem das cotas.
    for &i in males.iter().take(config.min_male) {
        if team.len() == config.team_size {
            break;
        }
        team.push(i);
    }
    for &i in females.iter().take(config.min_female) {
        if team.len() == config.team_size {
            break;
        }
        team.push(i);
    }

    // Restante: candidatos ainda não escolhidos, por carga crescente.
    for &i in candidates {
        if team.len() == config.team_size {
            break;
        }
        if !team.contains(&i) {
            team.push(i);
        }
    }

    if team.len() < config.team_size {
        return None;
    }
    Some(team)
}
