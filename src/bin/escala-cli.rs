#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use escala::{
    generator::{generate, GenerationConfig},
    io,
    notification::{prepare_reminder, TextReminder},
    storage::{JsonStorage, Storage},
    Schedule,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimalista de escalas de voluntários (sem banco de dados)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Ativa os logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Arquivo JSON da agenda
    #[arg(long, global = true, default_value = "escala.json")]
    schedule: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importar voluntários de um CSV (`id,name,gender,availability`)
    ImportVolunteers {
        #[arg(long)]
        csv: String,
    },

    /// Gerar escalas automáticas para um período
    Generate {
        /// Data inicial (YYYY-MM-DD; o deslocamento de cada dia conta a
        /// partir dela, domingo = 0)
        #[arg(long)]
        start: String,
        #[arg(long, default_value_t = 4)]
        weeks: u32,
        #[arg(long, default_value_t = 5)]
        team_size: usize,
        #[arg(long, default_value_t = 2)]
        min_male: usize,
        #[arg(long, default_value_t = 2)]
        min_female: usize,
        /// Lista "domingo,quarta,..."
        #[arg(long, default_value = "domingo,quarta")]
        days: String,
    },

    /// Listar e opcionalmente exportar
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Gerar um lembrete texto para a próxima escala de um voluntário
    Notify {
        #[arg(long)]
        volunteer: u32,
        #[arg(long, default_value_t = 2)]
        days_before: i64,
        /// Arquivo de saída (texto puro)
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.schedule)?;
    let mut schedule = storage.load().unwrap_or_else(|_| Schedule::default());

    let code = match cli.cmd {
        Commands::ImportVolunteers { csv } => {
            let volunteers = io::import_volunteers_csv(csv)?;
            schedule.volunteers.extend(volunteers);
            storage.save(&schedule)?;
            0
        }
        Commands::Generate {
            start,
            weeks,
            team_size,
            min_male,
            min_female,
            days,
        } => {
            let start: NaiveDate = start.parse()?;
            let tokens: Vec<&str> = days
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            let config = GenerationConfig::from_tokens(team_size, min_male, min_female, &tokens)?;
            if schedule.volunteers.is_empty() {
                bail!("nenhum voluntário cadastrado (use import-volunteers)");
            }
            let run = generate(&schedule.volunteers, config, start, weeks)?;
            for skip in &run.skipped {
                eprintln!(
                    "Aviso: {} ({}) pulado — {} elegíveis para equipe de {}",
                    skip.date,
                    skip.weekday.label(),
                    skip.eligible,
                    skip.needed
                );
            }
            let generated = run.assignments.len();
            let skipped = run.skipped.len();
            run.apply_to(&mut schedule);
            storage.save(&schedule)?;
            println!("{generated} escalas geradas");
            // Código 2 = AVISO/INCOMPLETO
            if skipped > 0 {
                2
            } else {
                0
            }
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_assignments_csv(path, &schedule)?;
            }
            // impressão compacta
            for a in &schedule.assignments {
                let team: Vec<String> = a
                    .team
                    .iter()
                    .map(|m| format!("{} ({})", m.volunteer_name, m.role))
                    .collect();
                println!(
                    "{} | {} {} | {} | {}",
                    a.id.as_str(),
                    a.date,
                    a.weekday.label(),
                    a.service_name,
                    team.join(", ")
                );
            }
            0
        }
        Commands::Notify {
            volunteer,
            days_before,
            out,
        } => {
            let renderer = TextReminder;
            let reminder = prepare_reminder(
                &schedule,
                volunteer,
                days_before,
                chrono::Utc::now(),
                &renderer,
            )?;
            std::fs::write(&out, reminder.content)?;
            println!(
                "Lembrete gerado para {} (escala {}) em {}",
                reminder.volunteer_name,
                reminder.assignment_id,
                reminder.notice_at.to_rfc3339()
            );
            0
        }
    };

    std::process::exit(code);
}
