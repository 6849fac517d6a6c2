use crate::model::{Assignment, Schedule, Volunteer, VolunteerId};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// Representa um lembrete gerado para um voluntário.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub volunteer_name: String,
    pub assignment_id: String,
    pub notice_at: DateTime<Utc>,
    pub content: String,
}

/// Permite customizar a renderização da mensagem (texto, WhatsApp, etc.).
/// Entrega, canal e retry ficam fora daqui.
pub trait ReminderRenderer {
    fn render(&self, volunteer: &Volunteer, assignment: &Assignment, notice_at: DateTime<Utc>)
        -> String;
}

/// Gabarito texto simples para um futuro e-mail/mensagem.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReminder;

impl ReminderRenderer for TextReminder {
    fn render(
        &self,
        volunteer: &Volunteer,
        assignment: &Assignment,
        notice_at: DateTime<Utc>,
    ) -> String {
        let role = assignment
            .team
            .iter()
            .find(|m| m.volunteer_id == volunteer.id)
            .map(|m| m.role.label())
            .unwrap_or("Voluntário");
        format!(
            "Olá {name},\n\nVocê está escalado para \"{service}\" em {date} ({weekday}), na função {role}.\nEsta mensagem foi gerada em {notice}.\n\nQualquer imprevisto, solicite substituição com antecedência.\n",
            name = volunteer.name,
            service = assignment.service_name,
            date = assignment.date,
            weekday = assignment.weekday.label(),
            role = role,
            notice = notice_at.to_rfc3339()
        )
    }
}

/// Prepara um lembrete para a próxima escala de um voluntário.
pub fn prepare_reminder(
    schedule: &Schedule,
    volunteer_id: VolunteerId,
    days_before: i64,
    now: DateTime<Utc>,
    renderer: &dyn ReminderRenderer,
) -> Result<Reminder> {
    if days_before < 0 {
        bail!("days_before must be positive");
    }

    let volunteer = schedule
        .find_volunteer(volunteer_id)
        .with_context(|| format!("unknown volunteer id: {volunteer_id}"))?;

    let mut upcoming: Vec<&Assignment> = schedule
        .assignments
        .iter()
        .filter(|a| a.has_volunteer(volunteer_id) && a.date >= now.date_naive())
        .collect();

    if upcoming.is_empty() {
        bail!("no upcoming assignment found for volunteer {volunteer_id}");
    }

    upcoming.sort_by_key(|a| a.date);
    let assignment = upcoming[0];

    let service_start = Utc.from_utc_datetime(&assignment.date.and_time(NaiveTime::MIN));
    let notice_at = service_start - Duration::days(days_before);

    let content = renderer.render(volunteer, assignment, notice_at);
    Ok(Reminder {
        volunteer_name: volunteer.name.clone(),
        assignment_id: assignment.id.as_str().to_string(),
        notice_at,
        content,
    })
}
