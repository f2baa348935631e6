//! Tipos de erro da camada de acesso ao backend.
//!
//! Define [`ApiError`] com variantes para respostas não-2xx, falhas de rede
//! e corpos de resposta malformados. Usa `thiserror` para derivar `Display`
//! e `Error` a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao falar com o backend da Agenda.
///
/// As variantes cobrem os três cenários de falha remota:
/// - [`Status`](ApiError::Status) — o backend respondeu com código não-2xx
/// - [`Network`](ApiError::Network) — falha na camada de transporte
/// - [`Decode`](ApiError::Decode) — corpo de resposta que não corresponde ao
///   formato esperado (inclui valores de status desconhecidos)
#[derive(Debug, Error)]
pub enum ApiError {
    /// O backend retornou um código de status fora da faixa 2xx.
    /// Contém o código HTTP e o corpo da resposta como mensagem.
    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// O corpo da resposta não pôde ser decodificado como o tipo esperado.
    #[error("failed to decode backend response: {0}")]
    Decode(String),
}
