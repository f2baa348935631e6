//! Interface de linha de comando da Agenda baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (list, add, edit,
//! advance, rm, users) e flags globais (--base-url, --verbose). Cada
//! subcomando corresponde a exatamente uma operação contra o backend.

use clap::{Args, Parser, Subcommand};

/// Agenda — cliente de terminal para o backend de compromissos e usuários.
#[derive(Debug, Parser)]
#[command(name = "agenda", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// URL base do backend (sobrepõe `agenda.toml` e `AGENDA_BASE_URL`).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lista os compromissos do backend.
    List {
        /// Emite a lista como JSON em vez do formato de tabela.
        #[arg(long)]
        json: bool,
    },

    /// Cria um novo compromisso (status inicial: pendente).
    Add(FormArgs),

    /// Edita um compromisso existente, preservando o status atual.
    Edit {
        /// Identificador do compromisso a editar.
        id: String,

        #[command(flatten)]
        form: EditArgs,
    },

    /// Avança o status de um compromisso no ciclo pendente → agendado → concluido.
    Advance {
        /// Identificador do compromisso.
        id: String,
    },

    /// Remove um compromisso. Sem confirmação, sem desfazer.
    Rm {
        /// Identificador do compromisso.
        id: String,
    },

    /// Lista os usuários cadastrados (somente leitura).
    Users {
        /// Emite a lista como JSON em vez do formato de tabela.
        #[arg(long)]
        json: bool,
    },
}

/// Campos do formulário de criação. Título, data e hora são obrigatórios
/// antes de qualquer chamada remota; anotações são opcionais.
#[derive(Debug, Args)]
pub struct FormArgs {
    /// Título do compromisso.
    #[arg(long)]
    pub titulo: String,

    /// Anotações adicionais.
    #[arg(long, default_value = "")]
    pub anotacoes: String,

    /// Data no formato AAAA-MM-DD.
    #[arg(long)]
    pub data: String,

    /// Hora no formato HH:MM.
    #[arg(long)]
    pub hora: String,
}

/// Sobrescritas parciais de edição: campos ausentes mantêm o valor atual
/// do compromisso carregado no formulário.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Novo título do compromisso.
    #[arg(long)]
    pub titulo: Option<String>,

    /// Novas anotações.
    #[arg(long)]
    pub anotacoes: Option<String>,

    /// Nova data no formato AAAA-MM-DD.
    #[arg(long)]
    pub data: Option<String>,

    /// Nova hora no formato HH:MM.
    #[arg(long)]
    pub hora: Option<String>,
}
