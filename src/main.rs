mod api;
mod cli;
mod config;
mod error;
mod ops;
mod session;
mod ui;

use std::time::Duration;

use clap::Parser;

use api::ApiClient;
use cli::{Cli, Command};
use config::AgendaConfig;
use ops::Saved;
use session::AgendaSession;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        ui::alert(&err.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AgendaConfig::load()?;
    // Precedência: flag da CLI > AGENDA_BASE_URL > agenda.toml > default.
    let base_url = cli.base_url.unwrap_or(config.base_url);
    if cli.verbose {
        eprintln!("backend: {base_url}");
    }

    let api = ApiClient::new(
        base_url,
        Duration::from_secs(config.connect_timeout_secs),
        Duration::from_secs(config.timeout_secs),
    );
    let mut session = AgendaSession::new();

    match cli.command {
        Command::List { json } => {
            fetch_list(&api, &mut session).await?;
            if json {
                ui::print_json(&session.appointments)?;
            } else {
                ui::render_appointments(&session.appointments);
            }
        }

        Command::Add(form) => {
            session.form.title = form.titulo;
            session.form.notes = form.anotacoes;
            session.form.date = form.data;
            session.form.time = form.hora;

            let saved = save_form(&api, &mut session).await?;
            announce_saved(saved);
            ui::render_appointments(&session.appointments);
        }

        Command::Edit { id, form } => {
            fetch_list(&api, &mut session).await?;
            session.begin_edit(&id)?;
            if let Some(titulo) = form.titulo {
                session.form.title = titulo;
            }
            if let Some(anotacoes) = form.anotacoes {
                session.form.notes = anotacoes;
            }
            if let Some(data) = form.data {
                session.form.date = data;
            }
            if let Some(hora) = form.hora {
                session.form.time = hora;
            }

            let saved = save_form(&api, &mut session).await?;
            announce_saved(saved);
            ui::render_appointments(&session.appointments);
        }

        Command::Advance { id } => {
            fetch_list(&api, &mut session).await?;
            let progress = ui::RequestProgress::start("Alterando status...");
            let result = ops::advance_status(&api, &mut session, &id).await;
            progress.finish();
            let next = result?;
            ui::success(&format!("Status alterado para {next}."));
            ui::render_appointments(&session.appointments);
        }

        Command::Rm { id } => {
            fetch_list(&api, &mut session).await?;
            let progress = ui::RequestProgress::start("Removendo compromisso...");
            let result = ops::delete(&api, &mut session, &id).await;
            progress.finish();
            result?;
            ui::success("Compromisso removido.");
            ui::render_appointments(&session.appointments);
        }

        Command::Users { json } => {
            let progress = ui::RequestProgress::start("Buscando usuários...");
            let result = ops::fetch_users(&api).await;
            progress.finish();
            let users = result?;
            if json {
                ui::print_json(&users)?;
            } else {
                ui::render_users(&users);
            }
        }
    }

    Ok(())
}

/// Busca a lista de compromissos com o spinner de requisição ativo.
async fn fetch_list(api: &ApiClient, session: &mut AgendaSession) -> anyhow::Result<()> {
    let progress = ui::RequestProgress::start("Buscando compromissos...");
    let result = ops::refresh(api, session).await;
    progress.finish();
    result?;
    Ok(())
}

/// Salva o formulário (criação ou atualização) com o spinner ativo.
///
/// A validação roda antes de qualquer chamada remota, dentro de
/// [`ops::save`]; nesse caso o spinner apenas pisca e é limpo.
async fn save_form(api: &ApiClient, session: &mut AgendaSession) -> anyhow::Result<Saved> {
    let progress = ui::RequestProgress::start("Salvando compromisso...");
    let result = ops::save(api, session).await;
    progress.finish();
    Ok(result?)
}

fn announce_saved(saved: Saved) {
    match saved {
        Saved::Created => ui::success("Compromisso criado."),
        Saved::Updated => ui::success("Compromisso atualizado."),
    }
}
