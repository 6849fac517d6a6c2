use super::types::OVERLOAD_FACTOR;
use crate::model::{Volunteer, Weekday};

/// Teto de escalações acima do qual um voluntário fica sobrecarregado.
///
/// Recalculado sobre o estado corrente do pool antes de cada ocorrência;
/// pool vazio => 0 (ninguém sobrecarregado, sem divisão por zero).
pub(super) fn overload_threshold(pool: &[Volunteer]) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }
    let total: u32 = pool.iter().map(|v| v.schedule_count).sum();
    (f64::from(total) / pool.len() as f64) * OVERLOAD_FACTOR
}

/// Candidatos de um dia: disponíveis no dia e não sobrecarregados,
/// ordenados por `schedule_count` crescente (empates na ordem original).
///
/// Retorna índices no pool para que a seleção possa mutar os contadores
/// depois sem clonar voluntários.
pub(super) fn eligible_candidates(pool: &[Volunteer], day: Weekday) -> Vec<usize> {
    let threshold = overload_threshold(pool);
    let mut candidates: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, v)| v.available_on(day) && f64::from(v.schedule_count) <= threshold)
        .map(|(i, _)| i)
        .collect();
    candidates.sort_by_key(|&i| pool[i].schedule_count);
    candidates
}
