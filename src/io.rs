use crate::model::{Gender, Schedule, Volunteer, Weekday};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Import de voluntários via CSV: header `id,name,gender,availability`.
/// `availability` é uma lista de tokens de dia separados por `;`.
pub fn import_volunteers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Volunteer>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id_raw = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        let gender_raw = rec.get(2).context("missing gender")?.trim();
        if id_raw.is_empty() || name.is_empty() {
            bail!("invalid volunteer row (empty id or name)");
        }
        let id = id_raw
            .parse()
            .with_context(|| format!("invalid volunteer id: {id_raw}"))?;
        let gender = parse_gender(gender_raw)
            .with_context(|| format!("invalid gender for volunteer {id}"))?;
        let mut volunteer = Volunteer::new(id, name, gender);
        if let Some(days) = rec.get(3) {
            let days = days.trim();
            if !days.is_empty() {
                volunteer.availability = parse_availability(days)
                    .with_context(|| format!("invalid availability for volunteer {id}"))?;
            }
        }
        out.push(volunteer);
    }
    Ok(out)
}

fn parse_gender(s: &str) -> anyhow::Result<Gender> {
    match s.to_lowercase().as_str() {
        "m" | "masculino" | "male" | "homem" => Ok(Gender::Male),
        "f" | "feminino" | "female" | "mulher" => Ok(Gender::Female),
        _ => bail!("expected m/f"),
    }
}

fn parse_availability(raw: &str) -> anyhow::Result<std::collections::BTreeSet<Weekday>> {
    raw.split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| Weekday::from_str(chunk).map_err(anyhow::Error::new))
        .collect()
}

/// Export JSON da agenda (formatação legível).
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV das escalas, uma linha por membro de equipe:
/// header `assignment_id,date,weekday,service,volunteer_id,volunteer_name,role,status`.
pub fn export_assignments_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "assignment_id",
        "date",
        "weekday",
        "service",
        "volunteer_id",
        "volunteer_name",
        "role",
        "status",
    ])?;
    for a in &schedule.assignments {
        let date = a.date.to_string();
        let status = match a.status {
            crate::model::AssignmentStatus::Scheduled => "scheduled",
            crate::model::AssignmentStatus::Confirmed => "confirmed",
            crate::model::AssignmentStatus::Cancelled => "cancelled",
        };
        for member in &a.team {
            let volunteer_id = member.volunteer_id.to_string();
            w.write_record([
                a.id.as_str(),
                date.as_str(),
                a.weekday.token(),
                a.service_name.as_str(),
                volunteer_id.as_str(),
                member.volunteer_name.as_str(),
                member.role.label(),
                status,
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
