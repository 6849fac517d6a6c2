use crate::model::{Assignment, Schedule, UnknownWeekday, Volunteer, Weekday};
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

/// Fator aplicado à média de escalações para decidir sobrecarga.
pub const OVERLOAD_FACTOR: f64 = 1.5;

/// Configuração de uma rodada de geração (imutável durante a rodada).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Tamanho total da equipe por ocorrência.
    pub team_size: usize,
    /// Mínimo de homens por equipe.
    pub min_male: usize,
    /// Mínimo de mulheres por equipe.
    pub min_female: usize,
    /// Dias da semana que produzem ocorrência, na ordem dada.
    pub weekday_pattern: Vec<Weekday>,
}

impl GenerationConfig {
    /// Monta a configuração a partir de tokens de dia ("domingo,quarta", ...).
    pub fn from_tokens<S: AsRef<str>>(
        team_size: usize,
        min_male: usize,
        min_female: usize,
        tokens: &[S],
    ) -> Result<Self, ConfigError> {
        let weekday_pattern = tokens
            .iter()
            .map(|t| Weekday::from_str(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let config = Self {
            team_size,
            min_male,
            min_female,
            weekday_pattern,
        };
        config.validate()?;
        Ok(config)
    }

    /// Valida antes de processar qualquer ocorrência.
    ///
    /// `min_male + min_female > team_size` é aceito: o preenchimento de cota
    /// é truncado em `team_size`, na ordem das cotas (homens primeiro).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::TeamSizeZero);
        }
        if self.weekday_pattern.is_empty() {
            return Err(ConfigError::EmptyWeekdayPattern);
        }
        Ok(())
    }
}

/// Erro fatal de configuração — nenhuma ocorrência é processada.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("team size must be at least 1")]
    TeamSizeZero,
    #[error("weekday pattern cannot be empty")]
    EmptyWeekdayPattern,
    #[error(transparent)]
    UnknownWeekday(#[from] UnknownWeekday),
}

/// Ocorrência pulada por falta de voluntários elegíveis (não fatal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOccurrence {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Quantos candidatos sobraram após filtro de disponibilidade/sobrecarga.
    pub eligible: usize,
    /// Quantos eram necessários (`team_size`).
    pub needed: usize,
}

/// Resultado de uma rodada: escalas geradas, pool com contadores
/// atualizados e ocorrências puladas, na ordem em que foram tentadas.
#[derive(Debug, Clone, Default)]
pub struct GenerationRun {
    pub assignments: Vec<Assignment>,
    pub pool: Vec<Volunteer>,
    pub skipped: Vec<SkippedOccurrence>,
}

impl GenerationRun {
    /// Mescla a rodada na agenda durável do chamador: adota os contadores do
    /// pool e anexa as escalas em ordem de data.
    pub fn apply_to(self, schedule: &mut Schedule) {
        schedule.volunteers = self.pool;
        schedule.assignments.extend(self.assignments);
        schedule.assignments.sort_by_key(|a| a.date);
    }
}
