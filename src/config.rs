//! Configuração da Agenda carregada a partir de `agenda.toml`.
//!
//! A struct [`AgendaConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis; o default de
//! `base_url` é o host fixo do backend original. A variável de ambiente
//! `AGENDA_BASE_URL` tem precedência sobre o arquivo, e a flag `--base-url`
//! da CLI tem precedência sobre ambos.

use serde::Deserialize;
use std::path::Path;

use crate::error::AgendaError;

/// Configuração de nível superior carregada de `agenda.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AgendaConfig {
    /// URL base do backend REST.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout total de cada requisição, em segundos.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Timeout de estabelecimento de conexão, em segundos.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

// Host fixo do backend original.
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

// Valor padrão do timeout de requisição: 30s.
fn default_timeout_secs() -> u64 {
    30
}

// Valor padrão do timeout de conexão: 10s.
fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl AgendaConfig {
    /// Carrega a configuração de `agenda.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self, AgendaError> {
        Self::load_from(Path::new("agenda.toml"))
    }

    /// Carrega a configuração do caminho dado, aplicando a precedência
    /// da variável de ambiente `AGENDA_BASE_URL`.
    pub fn load_from(path: &Path) -> Result<Self, AgendaError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<AgendaConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração.
        if let Ok(url) = std::env::var("AGENDA_BASE_URL")
            && !url.is_empty()
        {
            config.base_url = url;
        }

        Ok(config)
    }
}
