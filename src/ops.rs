use crate::api::{Backend, Status, User};
use crate::error::AgendaError;
use crate::session::AgendaSession;

/// Whether a successful save created a new appointment or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Created,
    Updated,
}

/// Fetch the full collection and replace the mirrored list wholesale.
///
/// On failure the list is left untouched (stale-but-available).
pub async fn refresh(
    api: &impl Backend,
    session: &mut AgendaSession,
) -> Result<(), AgendaError> {
    let appointments = api.list_appointments().await?;
    session.replace_list(appointments);
    Ok(())
}

/// Save the form: create when there is no edit-target, full update otherwise.
///
/// Validation runs first and short-circuits without any remote call. On
/// success the form and edit-target are cleared and the list re-fetched;
/// on remote failure the form keeps its values so the user may retry.
pub async fn save(
    api: &impl Backend,
    session: &mut AgendaSession,
) -> Result<Saved, AgendaError> {
    let payload = session.save_payload()?;
    let saved = match session.edit_target().cloned() {
        Some(id) => {
            api.update_appointment(&id, &payload).await?;
            Saved::Updated
        }
        None => {
            api.create_appointment(&payload).await?;
            Saved::Created
        }
    };
    session.clear_form();
    refresh(api, session).await?;
    Ok(saved)
}

/// Advance the status of the given appointment one step along the cycle
/// via a partial update, then re-fetch the list.
pub async fn advance_status(
    api: &impl Backend,
    session: &mut AgendaSession,
    raw_id: &str,
) -> Result<Status, AgendaError> {
    let appointment = session
        .find(raw_id)
        .ok_or_else(|| AgendaError::NotFound(raw_id.to_string()))?;
    let id = appointment.id.clone();
    let next = appointment.status.advanced();
    api.patch_status(&id, next).await?;
    refresh(api, session).await?;
    Ok(next)
}

/// Delete the given appointment, then re-fetch the list. No confirmation, no undo.
pub async fn delete(
    api: &impl Backend,
    session: &mut AgendaSession,
    raw_id: &str,
) -> Result<(), AgendaError> {
    let id = session
        .find(raw_id)
        .map(|a| a.id.clone())
        .ok_or_else(|| AgendaError::NotFound(raw_id.to_string()))?;
    api.delete_appointment(&id).await?;
    refresh(api, session).await?;
    Ok(())
}

/// Fetch the read-only user collection (the second surface).
pub async fn fetch_users(api: &impl Backend) -> Result<Vec<User>, AgendaError> {
    Ok(api.list_users().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Appointment, AppointmentPayload, ApiError, RecordId};
    use std::cell::RefCell;

    /// In-memory backend that records every call, in the order made.
    #[derive(Default)]
    struct MockBackend {
        calls: RefCell<Vec<String>>,
        appointments: RefCell<Vec<Appointment>>,
        fail_writes: bool,
    }

    impl MockBackend {
        fn with_appointments(appointments: Vec<Appointment>) -> Self {
            Self {
                appointments: RefCell::new(appointments),
                ..Default::default()
            }
        }

        fn failing_writes(appointments: Vec<Appointment>) -> Self {
            Self {
                appointments: RefCell::new(appointments),
                fail_writes: true,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn write_error(&self) -> ApiError {
            ApiError::Status {
                status: 500,
                message: "mock failure".into(),
            }
        }
    }

    impl Backend for MockBackend {
        async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
            self.calls.borrow_mut().push("GET /compromissos".into());
            Ok(self.appointments.borrow().clone())
        }

        async fn create_appointment(
            &self,
            payload: &AppointmentPayload,
        ) -> Result<Appointment, ApiError> {
            self.calls.borrow_mut().push("POST /compromissos".into());
            if self.fail_writes {
                return Err(self.write_error());
            }
            let id = RecordId::Number(self.appointments.borrow().len() as u64 + 1);
            let created = Appointment {
                id,
                title: payload.title.clone(),
                notes: payload.notes.clone(),
                date: payload.date.clone(),
                time: payload.time.clone(),
                status: payload.status,
            };
            self.appointments.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update_appointment(
            &self,
            id: &RecordId,
            payload: &AppointmentPayload,
        ) -> Result<Appointment, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("PUT /compromissos/{id}"));
            if self.fail_writes {
                return Err(self.write_error());
            }
            let mut list = self.appointments.borrow_mut();
            let target = list.iter_mut().find(|a| a.id == *id).unwrap();
            target.title = payload.title.clone();
            target.notes = payload.notes.clone();
            target.date = payload.date.clone();
            target.time = payload.time.clone();
            target.status = payload.status;
            Ok(target.clone())
        }

        async fn patch_status(
            &self,
            id: &RecordId,
            status: Status,
        ) -> Result<Appointment, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("PATCH /compromissos/{id} status={status}"));
            if self.fail_writes {
                return Err(self.write_error());
            }
            let mut list = self.appointments.borrow_mut();
            let target = list.iter_mut().find(|a| a.id == *id).unwrap();
            target.status = status;
            Ok(target.clone())
        }

        async fn delete_appointment(&self, id: &RecordId) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("DELETE /compromissos/{id}"));
            if self.fail_writes {
                return Err(self.write_error());
            }
            self.appointments.borrow_mut().retain(|a| a.id != *id);
            Ok(())
        }

        async fn list_users(&self) -> Result<Vec<User>, ApiError> {
            self.calls.borrow_mut().push("GET /user".into());
            Ok(vec![User {
                id: RecordId::Number(7),
                name: "Maria".into(),
                email: "maria@example.com".into(),
            }])
        }
    }

    fn dentist(id: u64, status: Status) -> Appointment {
        Appointment {
            id: RecordId::Number(id),
            title: "Dentist".into(),
            notes: String::new(),
            date: "2024-05-01".into(),
            time: "09:00".into(),
            status,
        }
    }

    fn fill_form(session: &mut AgendaSession) {
        session.form.title = "Dentist".into();
        session.form.date = "2024-05-01".into();
        session.form.time = "09:00".into();
    }

    #[tokio::test]
    async fn invalid_form_makes_zero_remote_calls() {
        let api = MockBackend::default();
        let mut session = AgendaSession::new();

        let err = save(&api, &mut session).await.unwrap_err();
        assert!(matches!(err, AgendaError::Validation(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn create_posts_pending_then_refreshes() {
        let api = MockBackend::default();
        let mut session = AgendaSession::new();
        fill_form(&mut session);

        let saved = save(&api, &mut session).await.unwrap();

        assert_eq!(saved, Saved::Created);
        assert_eq!(api.calls(), vec!["POST /compromissos", "GET /compromissos"]);
        assert_eq!(session.appointments.len(), 1);
        assert_eq!(session.appointments[0].id, RecordId::Number(1));
        assert_eq!(session.appointments[0].status, Status::Pending);
        // Form and edit-target are reset after a confirmed save.
        assert!(session.form.title.is_empty());
        assert!(session.edit_target().is_none());
    }

    #[tokio::test]
    async fn update_puts_with_carried_status() {
        let api = MockBackend::with_appointments(vec![dentist(1, Status::Scheduled)]);
        let mut session = AgendaSession::new();
        refresh(&api, &mut session).await.unwrap();

        session.begin_edit("1").unwrap();
        session.form.notes = "bring x-rays".into();
        let saved = save(&api, &mut session).await.unwrap();

        assert_eq!(saved, Saved::Updated);
        assert_eq!(
            api.calls(),
            vec![
                "GET /compromissos",
                "PUT /compromissos/1",
                "GET /compromissos"
            ]
        );
        // Status survived the edit untouched.
        assert_eq!(session.appointments[0].status, Status::Scheduled);
        assert_eq!(session.appointments[0].notes, "bring x-rays");
    }

    #[tokio::test]
    async fn failed_create_keeps_form_and_list_untouched() {
        let api = MockBackend::failing_writes(Vec::new());
        let mut session = AgendaSession::new();
        fill_form(&mut session);

        let err = save(&api, &mut session).await.unwrap_err();

        assert!(matches!(err, AgendaError::Api(_)));
        assert_eq!(session.form.title, "Dentist");
        assert!(session.appointments.is_empty());
        // The write was attempted but no refresh followed it.
        assert_eq!(api.calls(), vec!["POST /compromissos"]);
    }

    #[tokio::test]
    async fn advance_patches_next_status_then_refreshes() {
        let api = MockBackend::with_appointments(vec![dentist(1, Status::Pending)]);
        let mut session = AgendaSession::new();
        refresh(&api, &mut session).await.unwrap();

        let next = advance_status(&api, &mut session, "1").await.unwrap();

        assert_eq!(next, Status::Scheduled);
        assert_eq!(
            api.calls(),
            vec![
                "GET /compromissos",
                "PATCH /compromissos/1 status=agendado",
                "GET /compromissos"
            ]
        );
        assert_eq!(session.appointments[0].status, Status::Scheduled);
    }

    #[tokio::test]
    async fn advance_walks_the_full_cycle() {
        let api = MockBackend::with_appointments(vec![dentist(1, Status::Pending)]);
        let mut session = AgendaSession::new();
        refresh(&api, &mut session).await.unwrap();

        assert_eq!(
            advance_status(&api, &mut session, "1").await.unwrap(),
            Status::Scheduled
        );
        assert_eq!(
            advance_status(&api, &mut session, "1").await.unwrap(),
            Status::Done
        );
        assert_eq!(
            advance_status(&api, &mut session, "1").await.unwrap(),
            Status::Pending
        );
    }

    #[tokio::test]
    async fn advance_unknown_id_makes_no_remote_call() {
        let api = MockBackend::with_appointments(vec![dentist(1, Status::Pending)]);
        let mut session = AgendaSession::new();
        refresh(&api, &mut session).await.unwrap();

        let err = advance_status(&api, &mut session, "99").await.unwrap_err();

        assert!(matches!(err, AgendaError::NotFound(_)));
        assert_eq!(api.calls(), vec!["GET /compromissos"]);
    }

    #[tokio::test]
    async fn delete_removes_then_refreshes() {
        let api = MockBackend::with_appointments(vec![dentist(1, Status::Pending)]);
        let mut session = AgendaSession::new();
        refresh(&api, &mut session).await.unwrap();

        delete(&api, &mut session, "1").await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                "GET /compromissos",
                "DELETE /compromissos/1",
                "GET /compromissos"
            ]
        );
        assert!(session.appointments.is_empty());
    }

    #[tokio::test]
    async fn failed_write_leaves_stale_list_available() {
        let api = MockBackend::with_appointments(vec![dentist(1, Status::Done)]);
        let mut session = AgendaSession::new();
        refresh(&api, &mut session).await.unwrap();

        let failing = MockBackend::failing_writes(Vec::new());
        // A failing write never touches the mirrored list.
        session.begin_edit("1").unwrap();
        let _ = save(&failing, &mut session).await.unwrap_err();
        assert_eq!(session.appointments.len(), 1);
        assert_eq!(session.appointments[0].status, Status::Done);
    }

    #[tokio::test]
    async fn users_are_fetched_read_only() {
        let api = MockBackend::default();
        let users = fetch_users(&api).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Maria");
        assert_eq!(api.calls(), vec!["GET /user"]);
    }
}
