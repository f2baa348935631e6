use crate::api::{Appointment, AppointmentPayload, RecordId, Status};
use crate::error::AgendaError;

/// The form fields a user fills in before saving an appointment.
///
/// Field names mirror the protocol: titulo, anotacoes, data, hora.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub title: String,
    pub notes: String,
    pub date: String,
    pub time: String,
}

/// Client-side state for the appointment surface: the mirrored list,
/// the form being filled in, and the optional edit-target.
///
/// Holds no rendering and no transport. The list is only ever replaced
/// wholesale by [`replace_list`](AgendaSession::replace_list) after a
/// confirmed fetch; a failed remote call leaves it untouched.
#[derive(Debug, Default)]
pub struct AgendaSession {
    pub appointments: Vec<Appointment>,
    pub form: AppointmentForm,
    editing: Option<RecordId>,
}

impl AgendaSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the local list with a freshly fetched copy. An empty list is fine.
    pub fn replace_list(&mut self, appointments: Vec<Appointment>) {
        self.appointments = appointments;
    }

    /// The identifier currently loaded into the form for modification, if any.
    pub fn edit_target(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    /// Look up an appointment by the textual id the user typed.
    pub fn find(&self, raw_id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id.matches(raw_id))
    }

    /// Enter edit mode on the given appointment, populating the form from it.
    ///
    /// At most one appointment is in edit at a time; entering edit on a new
    /// id replaces any previous edit-target.
    pub fn begin_edit(&mut self, raw_id: &str) -> Result<(), AgendaError> {
        let appointment = self
            .find(raw_id)
            .cloned()
            .ok_or_else(|| AgendaError::NotFound(raw_id.to_string()))?;
        self.form = AppointmentForm {
            title: appointment.title,
            notes: appointment.notes,
            date: appointment.date,
            time: appointment.time,
        };
        self.editing = Some(appointment.id);
        Ok(())
    }

    /// Leave edit mode without saving. No remote call is involved.
    pub fn cancel_edit(&mut self) {
        self.clear_form();
    }

    /// Reset the form fields and drop the edit-target.
    pub fn clear_form(&mut self) {
        self.form = AppointmentForm::default();
        self.editing = None;
    }

    /// Check the required fields, reporting every missing one in a single
    /// aggregated message. No remote call may be made when this fails.
    pub fn validate(&self) -> Result<(), AgendaError> {
        let mut missing = Vec::new();
        if self.form.title.trim().is_empty() {
            missing.push("titulo");
        }
        if self.form.date.trim().is_empty() {
            missing.push("data");
        }
        if self.form.time.trim().is_empty() {
            missing.push("hora");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AgendaError::Validation(missing.join(", ")))
        }
    }

    /// Build the save payload from the form.
    ///
    /// A new appointment starts as `pendente`; an update carries the current
    /// status of the edit-target looked up locally, never a user-chosen one.
    /// Fails if the edit-target has vanished from the mirrored list.
    pub fn save_payload(&self) -> Result<AppointmentPayload, AgendaError> {
        self.validate()?;
        let status = match &self.editing {
            Some(id) => {
                let current = self
                    .appointments
                    .iter()
                    .find(|a| a.id == *id)
                    .ok_or_else(|| AgendaError::NotFound(id.to_string()))?;
                current.status
            }
            None => Status::default(),
        };
        Ok(AppointmentPayload {
            title: self.form.title.clone(),
            notes: self.form.notes.clone(),
            date: self.form.date.clone(),
            time: self.form.time.clone(),
            status,
        })
    }
}
