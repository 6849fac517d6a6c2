#![forbid(unsafe_code)]
//! Escala — biblioteca de geração de escalas de voluntários local (sem BD).
//!
//! - Armazenamento em arquivo (JSON/CSV).
//! - Rotação com cotas de gênero e balanceamento de carga.
//! - Dias sem elegíveis suficientes são pulados, nunca saem equipes parciais.
//! - Datas de ocorrência em `NaiveDate`; carimbos em UTC.

pub mod generator;
pub mod io;
pub mod model;
pub mod notification;
pub mod storage;

pub use generator::{
    generate, ConfigError, GenerationConfig, GenerationRun, Generator, SkippedOccurrence,
};
pub use model::{
    Assignment, AssignmentId, AssignmentStatus, Gender, Role, Schedule, TeamMember, UnknownWeekday,
    Volunteer, VolunteerId, Weekday,
};
pub use notification::{prepare_reminder, Reminder, ReminderRenderer, TextReminder};
pub use storage::{JsonStorage, Storage};
