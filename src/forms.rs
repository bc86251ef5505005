//! Incident report form state
//!
//! The same form backs the standalone report page and the practice report of
//! the incident-reporting module. Nothing is ever transmitted.

use std::fmt;

use crate::error::FormError;

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Department,
    IncidentType,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Department,
        FormField::IncidentType,
        FormField::Description,
    ];

    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Department,
            FormField::Department => FormField::IncidentType,
            FormField::IncidentType => FormField::Description,
            FormField::Description => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Department => FormField::Name,
            FormField::IncidentType => FormField::Department,
            FormField::Description => FormField::IncidentType,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Department => "Department",
            FormField::IncidentType => "Incident Type",
            FormField::Description => "Description",
        }
    }

    /// Whether the field takes typed text (as opposed to a choice list)
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::IncidentType)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentType {
    Phishing,
    Malware,
    DataBreach,
    UnauthorizedAccess,
    LostDevice,
    SuspiciousActivity,
    SocialEngineering,
    Other,
}

impl IncidentType {
    pub const ALL: [IncidentType; 8] = [
        IncidentType::Phishing,
        IncidentType::Malware,
        IncidentType::DataBreach,
        IncidentType::UnauthorizedAccess,
        IncidentType::LostDevice,
        IncidentType::SuspiciousActivity,
        IncidentType::SocialEngineering,
        IncidentType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncidentType::Phishing => "Phishing Email",
            IncidentType::Malware => "Suspected Malware",
            IncidentType::DataBreach => "Potential Data Breach",
            IncidentType::UnauthorizedAccess => "Unauthorized Access",
            IncidentType::LostDevice => "Lost/Stolen Device",
            IncidentType::SuspiciousActivity => "Suspicious Activity",
            IncidentType::SocialEngineering => "Social Engineering Attempt",
            IncidentType::Other => "Other",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub name: String,
    pub department: String,
    pub incident_type: Option<IncidentType>,
    pub description: String,
    pub focus: FormField,
    submitted: bool,
}

impl ReportForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Department => Some(&mut self.department),
            FormField::Description => Some(&mut self.description),
            FormField::IncidentType => None,
        }
    }

    /// Type a character into the focused text field. Ignored once submitted.
    pub fn insert_char(&mut self, c: char) {
        if self.submitted {
            return;
        }
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.submitted {
            return;
        }
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Step through the incident type choices, starting from none selected
    pub fn cycle_incident_type(&mut self, forward: bool) {
        if self.submitted {
            return;
        }
        let len = IncidentType::ALL.len();
        let next = match (self.incident_type, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(t), true) => (t.position() + 1) % len,
            (Some(t), false) => (t.position() + len - 1) % len,
        };
        self.incident_type = Some(IncidentType::ALL[next]);
    }

    /// First required field that is still empty, in focus order
    pub fn missing_field(&self) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| match field {
            FormField::Name => self.name.trim().is_empty(),
            FormField::Department => self.department.trim().is_empty(),
            FormField::IncidentType => self.incident_type.is_none(),
            FormField::Description => self.description.trim().is_empty(),
        })
    }

    /// Validate and mark the report as submitted.
    ///
    /// Submitting an already-submitted form is a no-op.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.submitted {
            return Ok(());
        }
        if let Some(field) = self.missing_field() {
            return Err(FormError::MissingField(field));
        }
        self.submitted = true;
        tracing::info!(
            incident_type = self.incident_type.map(|t| t.label()),
            "incident report submitted"
        );
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Department => &self.department,
            FormField::IncidentType => self.incident_type.map_or("", |t| t.label()),
            FormField::Description => &self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReportForm {
        ReportForm {
            name: "Ada".to_string(),
            department: "Finance".to_string(),
            incident_type: Some(IncidentType::Phishing),
            description: "Odd invoice email".to_string(),
            ..ReportForm::default()
        }
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = ReportForm::new();
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus, FormField::Name);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Description);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ReportForm::new();
        form.insert_char('A');
        form.focus_next();
        form.insert_char('I');
        form.insert_char('T');
        form.backspace();
        assert_eq!(form.name, "A");
        assert_eq!(form.department, "I");
    }

    #[test]
    fn test_typing_on_choice_field_is_ignored() {
        let mut form = ReportForm::new();
        form.focus = FormField::IncidentType;
        form.insert_char('x');
        assert_eq!(form.incident_type, None);
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_cycle_incident_type_wraps() {
        let mut form = ReportForm::new();
        form.cycle_incident_type(false);
        assert_eq!(form.incident_type, Some(IncidentType::Other));
        form.cycle_incident_type(true);
        assert_eq!(form.incident_type, Some(IncidentType::Phishing));
    }

    #[test]
    fn test_submit_reports_first_missing_field() {
        let mut form = filled();
        form.department = "   ".to_string();
        form.description.clear();

        assert_eq!(
            form.submit(),
            Err(FormError::MissingField(FormField::Department))
        );
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_submit_and_reset() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_submitted());

        form.insert_char('!');
        assert_eq!(form.name, "Ada");

        form.reset();
        assert!(!form.is_submitted());
        assert_eq!(form.missing_field(), Some(FormField::Name));
    }

    #[test]
    fn test_value_for_choice_field() {
        let form = filled();
        assert_eq!(form.value(FormField::IncidentType), "Phishing Email");
        assert_eq!(ReportForm::new().value(FormField::IncidentType), "");
    }
}
