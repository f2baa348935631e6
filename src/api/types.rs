//! Tipos de dados para as coleções REST do backend da Agenda.
//!
//! Todas as structs derivam `Serialize` e `Deserialize` para conversão JSON
//! no formato esperado pelas coleções `/compromissos` e `/user`. Os nomes
//! de campo do protocolo (titulo, anotacoes, data, hora, nome) são mapeados
//! para identificadores em inglês via `serde(rename)`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identificador opaco atribuído pelo backend.
///
/// Backends JSON diferentes serializam ids ora como número, ora como string;
/// o enum `untagged` aceita os dois formatos sem interpretá-los.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl RecordId {
    /// Compara o id com a forma textual digitada pelo usuário na CLI.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            RecordId::Number(n) => raw.parse::<u64>() == Ok(*n),
            RecordId::Text(s) => s == raw,
        }
    }
}

/// Status de um compromisso, com os valores de protocolo em português.
///
/// O usuário nunca escolhe um status diretamente; ele só avança no ciclo
/// fixo `pendente → agendado → concluido → pendente` via [`Status::advanced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "agendado")]
    Scheduled,
    #[serde(rename = "concluido")]
    Done,
}

/// Ordem fixa do ciclo de status.
const CYCLE: [Status; 3] = [Status::Pending, Status::Scheduled, Status::Done];

impl Status {
    /// Compute the next status in the fixed cycle: position + 1, modulo 3.
    ///
    /// Every enum value is present in the cycle, so the lookup cannot miss;
    /// an unknown wire value is rejected earlier, at deserialization.
    pub fn advanced(self) -> Status {
        let position = CYCLE
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default();
        CYCLE[(position + 1) % CYCLE.len()]
    }

    /// Nome do status no formato do protocolo.
    pub fn wire_name(self) -> &'static str {
        match self {
            Status::Pending => "pendente",
            Status::Scheduled => "agendado",
            Status::Done => "concluido",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Um compromisso como retornado pela coleção `/compromissos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "anotacoes", default)]
    pub notes: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    pub status: Status,
}

/// Corpo de criação/atualização de compromisso — tudo menos o id,
/// que é atribuído pelo backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentPayload {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "anotacoes", default)]
    pub notes: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    pub status: Status,
}

/// Corpo do PATCH parcial que altera somente o status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: Status,
}

/// Um usuário como retornado pela coleção `/user`. Somente leitura.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}
