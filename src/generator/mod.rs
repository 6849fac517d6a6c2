mod availability;
mod rotation;
mod selector;
mod types;

pub use types::{ConfigError, GenerationConfig, GenerationRun, SkippedOccurrence, OVERLOAD_FACTOR};

use crate::model::Volunteer;
use chrono::{DateTime, NaiveDate, Utc};

/// Generator: encapsula uma cópia do pool e a configuração de uma rodada.
///
/// O pool do chamador nunca é mutado; a rodada trabalha sobre o snapshot e
/// devolve o estado novo em [`GenerationRun::pool`]. Rodadas concorrentes
/// ficam isoladas por construção.
#[derive(Debug, Clone)]
pub struct Generator {
    pool: Vec<Volunteer>,
    config: GenerationConfig,
}

impl Generator {
    /// Valida a configuração e tira o snapshot do pool.
    pub fn new(volunteers: &[Volunteer], config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            pool: volunteers.to_vec(),
            config,
        })
    }

    pub fn pool(&self) -> &[Volunteer] {
        &self.pool
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Executa a rodada: uma ocorrência por `(semana, dia do padrão)`,
    /// datas em `start + (semana*7 + dia) dias`. `weeks == 0` devolve
    /// rodada vazia sem erro.
    pub fn run(mut self, start: NaiveDate, weeks: u32, now: DateTime<Utc>) -> GenerationRun {
        let (assignments, skipped) =
            rotation::run(&mut self.pool, &self.config, start, weeks, now);
        GenerationRun {
            assignments,
            pool: self.pool,
            skipped,
        }
    }
}

/// Chamada de conveniência: snapshot, rodada com `Utc::now()` como carimbo
/// de atribuição.
pub fn generate(
    volunteers: &[Volunteer],
    config: GenerationConfig,
    start: NaiveDate,
    weeks: u32,
) -> Result<GenerationRun, ConfigError> {
    let generator = Generator::new(volunteers, config)?;
    Ok(generator.run(start, weeks, Utc::now()))
}
