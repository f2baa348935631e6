use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Appointment, AppointmentPayload, RecordId, Status, StatusPatch, User};

/// Caminho da coleção de compromissos no backend.
const APPOINTMENTS_PATH: &str = "/compromissos";
/// Caminho da coleção de usuários no backend.
const USERS_PATH: &str = "/user";

/// Operações remotas que a aplicação consome.
///
/// `ApiClient` é a implementação real sobre HTTP; testes usam
/// implementações próprias para registrar chamadas sem rede.
/// Somente despacho estático, então os futures não precisam ser `Send`.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError>;
    async fn create_appointment(
        &self,
        payload: &AppointmentPayload,
    ) -> Result<Appointment, ApiError>;
    async fn update_appointment(
        &self,
        id: &RecordId,
        payload: &AppointmentPayload,
    ) -> Result<Appointment, ApiError>;
    async fn patch_status(&self, id: &RecordId, status: Status) -> Result<Appointment, ApiError>;
    async fn delete_appointment(&self, id: &RecordId) -> Result<(), ApiError>;
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
}

/// Cliente HTTP para as coleções REST da Agenda.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Cria um cliente apontando para `base_url` com os timeouts fornecidos.
    pub fn new(base_url: String, connect_timeout: Duration, timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn appointments_url(&self) -> String {
        format!("{}{APPOINTMENTS_PATH}", self.base_url)
    }

    fn appointment_url(&self, id: &RecordId) -> String {
        format!("{}{APPOINTMENTS_PATH}/{id}", self.base_url)
    }

    fn users_url(&self) -> String {
        format!("{}{USERS_PATH}", self.base_url)
    }

    /// Converte respostas não-2xx em [`ApiError::Status`] com o corpo como mensagem.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Decodifica o corpo JSON da resposta, distinguindo falha de transporte
    /// (ler o corpo) de falha de formato (interpretar o corpo).
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for ApiClient {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        let response = self.client.get(self.appointments_url()).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn create_appointment(
        &self,
        payload: &AppointmentPayload,
    ) -> Result<Appointment, ApiError> {
        let response = self
            .client
            .post(self.appointments_url())
            .json(payload)
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn update_appointment(
        &self,
        id: &RecordId,
        payload: &AppointmentPayload,
    ) -> Result<Appointment, ApiError> {
        let response = self
            .client
            .put(self.appointment_url(id))
            .json(payload)
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn patch_status(&self, id: &RecordId, status: Status) -> Result<Appointment, ApiError> {
        let response = self
            .client
            .patch(self.appointment_url(id))
            .json(&StatusPatch { status })
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn delete_appointment(&self, id: &RecordId) -> Result<(), ApiError> {
        let response = self.client.delete(self.appointment_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.client.get(self.users_url()).send().await?;
        Self::decode(Self::check(response).await?).await
    }
}
