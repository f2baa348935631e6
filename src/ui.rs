//! Interface de terminal da Agenda — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner de requisição e `console` para
//! estilização com cores. Toda falha é apresentada por [`alert`], o caminho
//! único de erro das duas superfícies (compromissos e usuários).

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::api::{Appointment, Status, User};
use crate::error::AgendaError;

/// Indicador visual de uma requisição em andamento.
///
/// O spinner gira enquanto a chamada de rede está em voo e é limpo antes
/// de qualquer renderização de resultado.
pub struct RequestProgress {
    pb: ProgressBar,
}

impl RequestProgress {
    /// Inicia o spinner com a descrição da operação.
    pub fn start(description: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(description.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    /// Limpa o spinner, deixando o terminal pronto para a saída final.
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

/// Exibe uma falha em vermelho no stderr. Caminho único de alerta.
pub fn alert(message: &str) {
    let red = Style::new().red().bold();
    eprintln!("{} {message}", red.apply_to("✗"));
}

/// Exibe uma confirmação de sucesso em verde.
pub fn success(message: &str) {
    let green = Style::new().green().bold();
    println!("{} {message}", green.apply_to("✓"));
}

// Paleta dos badges de status: pendente amarelo, agendado ciano, concluido verde.
fn status_style(status: Status) -> Style {
    match status {
        Status::Pending => Style::new().yellow(),
        Status::Scheduled => Style::new().cyan(),
        Status::Done => Style::new().green(),
    }
}

/// Renderiza a lista de compromissos como cartões de texto.
pub fn render_appointments(appointments: &[Appointment]) {
    if appointments.is_empty() {
        println!("Nenhum compromisso.");
        return;
    }

    let bold = Style::new().bold();
    let dim = Style::new().dim();
    for appointment in appointments {
        let badge = status_style(appointment.status).apply_to(format!("[{}]", appointment.status));
        println!(
            "{}  {} {badge}",
            dim.apply_to(format!("#{}", appointment.id)),
            bold.apply_to(&appointment.title),
        );
        if !appointment.notes.is_empty() {
            println!("    {}", dim.apply_to(&appointment.notes));
        }
        println!("    {} às {}", appointment.date, appointment.time);
    }
}

/// Renderiza a lista de usuários, uma linha por registro.
pub fn render_users(users: &[User]) {
    if users.is_empty() {
        println!("Nenhum usuário.");
        return;
    }

    let dim = Style::new().dim();
    for user in users {
        println!(
            "{}  {}  {}",
            dim.apply_to(format!("#{}", user.id)),
            user.name,
            dim.apply_to(&user.email),
        );
    }
}

/// Emite o valor como JSON legível, para consumo por outras ferramentas.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), AgendaError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
