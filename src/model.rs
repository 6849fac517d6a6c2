use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Identificador único de voluntário (atribuído pelo chamador).
pub type VolunteerId = u32;

/// Gênero do voluntário — enumeração fechada de dois valores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Dia da semana, domingo primeiro (tokens minúsculos em português).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Domingo,
    Segunda,
    Terca,
    Quarta,
    Quinta,
    Sexta,
    Sabado,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Domingo,
        Weekday::Segunda,
        Weekday::Terca,
        Weekday::Quarta,
        Weekday::Quinta,
        Weekday::Sexta,
        Weekday::Sabado,
    ];

    /// Deslocamento 0–6 a partir do domingo.
    pub fn index(self) -> u32 {
        match self {
            Weekday::Domingo => 0,
            Weekday::Segunda => 1,
            Weekday::Terca => 2,
            Weekday::Quarta => 3,
            Weekday::Quinta => 4,
            Weekday::Sexta => 5,
            Weekday::Sabado => 6,
        }
    }

    /// Token minúsculo usado em arquivos e na linha de comando.
    pub fn token(self) -> &'static str {
        match self {
            Weekday::Domingo => "domingo",
            Weekday::Segunda => "segunda",
            Weekday::Terca => "terca",
            Weekday::Quarta => "quarta",
            Weekday::Quinta => "quinta",
            Weekday::Sexta => "sexta",
            Weekday::Sabado => "sabado",
        }
    }

    /// Rótulo de exibição.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Domingo => "Domingo",
            Weekday::Segunda => "Segunda",
            Weekday::Terca => "Terça",
            Weekday::Quarta => "Quarta",
            Weekday::Quinta => "Quinta",
            Weekday::Sexta => "Sexta",
            Weekday::Sabado => "Sábado",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown weekday token: {0}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domingo" => Ok(Weekday::Domingo),
            "segunda" | "segunda-feira" => Ok(Weekday::Segunda),
            "terca" | "terça" | "terca-feira" | "terça-feira" => Ok(Weekday::Terca),
            "quarta" | "quarta-feira" => Ok(Weekday::Quarta),
            "quinta" | "quinta-feira" => Ok(Weekday::Quinta),
            "sexta" | "sexta-feira" => Ok(Weekday::Sexta),
            "sabado" | "sábado" => Ok(Weekday::Sabado),
            other => Err(UnknownWeekday(other.to_string())),
        }
    }
}

/// Voluntário (membro do ministério).
///
/// `schedule_count` acumula quantas vezes a pessoa foi escalada na rodada de
/// geração corrente; o gerador só incrementa, nunca decrementa, e só mexe na
/// sua própria cópia do pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: VolunteerId,
    pub name: String,
    pub gender: Gender,
    #[serde(default)]
    pub availability: BTreeSet<Weekday>,
    #[serde(default)]
    pub schedule_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_assigned_at: Option<DateTime<Utc>>,
}

impl Volunteer {
    pub fn new<N: Into<String>>(id: VolunteerId, name: N, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            availability: BTreeSet::new(),
            schedule_count: 0,
            last_assigned_at: None,
        }
    }

    pub fn available_on(&self, day: Weekday) -> bool {
        self.availability.contains(&day)
    }
}

/// Função cosmética atribuída a cada membro de uma equipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Recepção")]
    Recepcao,
    Som,
    #[serde(rename = "Mídia")]
    Midia,
    Limpeza,
    #[serde(rename = "Segurança")]
    Seguranca,
}

impl Role {
    /// Ordem fixa usada pelo rodízio determinístico de funções.
    pub const ROTATION: [Role; 5] = [
        Role::Recepcao,
        Role::Som,
        Role::Midia,
        Role::Limpeza,
        Role::Seguranca,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Recepcao => "Recepção",
            Role::Som => "Som",
            Role::Midia => "Mídia",
            Role::Limpeza => "Limpeza",
            Role::Seguranca => "Segurança",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Membro selecionado para uma ocorrência.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub volunteer_id: VolunteerId,
    pub volunteer_name: String,
    pub role: Role,
}

/// Identificador forte para Assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(String);

impl AssignmentId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
}

/// Uma ocorrência de escala: data, culto e equipe completa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub service_name: String,
    pub team: Vec<TeamMember>,
    pub status: AssignmentStatus,
}

impl Assignment {
    pub fn has_volunteer(&self, id: VolunteerId) -> bool {
        self.team.iter().any(|m| m.volunteer_id == id)
    }
}

/// Agenda completa persistida pelo chamador.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Schedule {
    pub volunteers: Vec<Volunteer>,
    pub assignments: Vec<Assignment>,
}

impl Schedule {
    pub fn find_volunteer(&self, id: VolunteerId) -> Option<&Volunteer> {
        self.volunteers.iter().find(|v| v.id == id)
    }
    pub fn find_volunteer_mut(&mut self, id: VolunteerId) -> Option<&mut Volunteer> {
        self.volunteers.iter_mut().find(|v| v.id == id)
    }
    pub fn find_assignment(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| &a.id == id)
    }
}
