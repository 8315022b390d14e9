//! Core types for Tourguard

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a registered tourist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouristId(pub Ulid);

impl TouristId {
    /// Create a new TouristId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl Default for TouristId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TouristId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tourist_{}", self.0)
    }
}

/// Normalize an email for directory lookups.
///
/// Surrounding whitespace is dropped and ASCII letters are lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Fields of the tourist registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
    EmergencyContactName,
    EmergencyContactPhone,
}

impl RegistrationField {
    /// All fields in display order
    pub const ALL: [RegistrationField; 5] = [
        RegistrationField::Name,
        RegistrationField::Email,
        RegistrationField::Phone,
        RegistrationField::EmergencyContactName,
        RegistrationField::EmergencyContactPhone,
    ];

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationField::Name => "Full Name",
            RegistrationField::Email => "Email",
            RegistrationField::Phone => "Phone",
            RegistrationField::EmergencyContactName => "Emergency Contact Name",
            RegistrationField::EmergencyContactPhone => "Emergency Contact Phone",
        }
    }

    /// Example value shown as the input placeholder
    pub fn placeholder(&self) -> &'static str {
        match self {
            RegistrationField::Name => "John Doe",
            RegistrationField::Email => "john@example.com",
            RegistrationField::Phone => "+1-555-0123",
            RegistrationField::EmergencyContactName => "Jane Doe",
            RegistrationField::EmergencyContactPhone => "+1-555-0124",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            RegistrationField::Email => "email",
            _ => "text",
        }
    }

    /// Whether the field belongs to the emergency contact group
    pub fn is_emergency(&self) -> bool {
        matches!(
            self,
            RegistrationField::EmergencyContactName | RegistrationField::EmergencyContactPhone
        )
    }
}

/// Buffer behind the tourist registration form.
///
/// Only presence is validated; field contents are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

impl RegistrationForm {
    /// Read a single field
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
            RegistrationField::EmergencyContactName => &self.emergency_contact_name,
            RegistrationField::EmergencyContactPhone => &self.emergency_contact_phone,
        }
    }

    /// Overwrite a single field
    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::EmergencyContactName => &mut self.emergency_contact_name,
            RegistrationField::EmergencyContactPhone => &mut self.emergency_contact_phone,
        };
        *slot = value;
    }

    /// True when every field is non-empty
    pub fn is_complete(&self) -> bool {
        RegistrationField::ALL
            .iter()
            .all(|field| !self.get(*field).is_empty())
    }
}

/// Person to notify in an emergency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

/// A registered tourist and their digital identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tourist {
    /// Unique identifier
    pub id: TouristId,
    /// Full name as entered
    pub name: String,
    /// Email as entered (lookups use [`normalize_email`])
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Emergency contact
    pub emergency_contact: EmergencyContact,
    /// Digital identity handle, derived from id and email
    pub digital_id: String,
    /// Unix timestamp of registration
    pub registered_at: i64,
}

impl Tourist {
    /// Issue a new tourist record from a completed registration form
    pub fn from_registration(form: RegistrationForm) -> Self {
        let id = TouristId::new();
        let digital_id = derive_digital_id(&id, &form.email);
        Self {
            id,
            name: form.name,
            email: form.email,
            phone: form.phone,
            emergency_contact: EmergencyContact {
                name: form.emergency_contact_name,
                phone: form.emergency_contact_phone,
            },
            digital_id,
            registered_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Normalized email used as the directory key
    pub fn email_key(&self) -> String {
        normalize_email(&self.email)
    }

    /// Registration time formatted for display
    pub fn registered_at_display(&self) -> String {
        chrono::DateTime::from_timestamp(self.registered_at, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Derive the `DID-XXXX-XXXX-XXXX-XXXX` handle for a tourist.
///
/// BLAKE3 over the ULID bytes and the normalized email, first 8 bytes, hex.
pub fn derive_digital_id(id: &TouristId, email: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&id.as_ulid().to_bytes());
    hasher.update(normalize_email(email).as_bytes());
    let hash = hasher.finalize();
    let hex = hex::encode_upper(&hash.as_bytes()[..8]);
    let groups: Vec<&str> = hex
        .as_bytes()
        .chunks(4)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    format!("DID-{}", groups.join("-"))
}

/// Who is signed in to the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    None,
    Tourist(TouristId),
    Admin,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        matches!(self, Session::Admin)
    }

    pub fn tourist_id(&self) -> Option<TouristId> {
        match self {
            Session::Tourist(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            name: "Bob Walker".to_string(),
            email: "Bob@Example.com".to_string(),
            phone: "+1-555-0100".to_string(),
            emergency_contact_name: "Carol Walker".to_string(),
            emergency_contact_phone: "+1-555-0101".to_string(),
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Demo.COM "), "alice@demo.com");
        assert_eq!(normalize_email(""), "");
    }

    #[test]
    fn test_form_get_set_every_field() {
        let mut form = RegistrationForm::default();
        for (i, field) in RegistrationField::ALL.iter().enumerate() {
            form.set(*field, format!("value-{}", i));
        }
        for (i, field) in RegistrationField::ALL.iter().enumerate() {
            assert_eq!(form.get(*field), format!("value-{}", i));
        }
        assert_eq!(form.emergency_contact_phone, "value-4");
    }

    #[test]
    fn test_form_completeness() {
        let mut form = filled_form();
        assert!(form.is_complete());

        form.set(RegistrationField::Phone, String::new());
        assert!(!form.is_complete());

        assert!(!RegistrationForm::default().is_complete());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut form = filled_form();
        form.set(RegistrationField::Name, "   ".to_string());
        assert!(form.is_complete());
    }

    #[test]
    fn test_tourist_from_registration() {
        let tourist = Tourist::from_registration(filled_form());
        assert_eq!(tourist.name, "Bob Walker");
        assert_eq!(tourist.email, "Bob@Example.com");
        assert_eq!(tourist.email_key(), "bob@example.com");
        assert_eq!(tourist.emergency_contact.name, "Carol Walker");
        assert_eq!(tourist.emergency_contact.phone, "+1-555-0101");
        assert!(tourist.registered_at > 0);
        assert!(tourist.digital_id.starts_with("DID-"));
    }

    #[test]
    fn test_digital_id_shape_and_determinism() {
        let id = TouristId::new();
        let a = derive_digital_id(&id, "alice@demo.com");
        let b = derive_digital_id(&id, " ALICE@demo.com");
        assert_eq!(a, b);
        // "DID-" + 4 groups of 4 hex chars joined by '-'
        assert_eq!(a.len(), 4 + 16 + 3);

        let other = derive_digital_id(&TouristId::new(), "alice@demo.com");
        assert_ne!(a, other);
    }

    #[test]
    fn test_tourist_id_display() {
        let id = TouristId::new();
        assert_eq!(id.to_string(), format!("tourist_{}", id.as_ulid()));
    }

    #[test]
    fn test_session_accessors() {
        let id = TouristId::new();
        assert_eq!(Session::Tourist(id).tourist_id(), Some(id));
        assert!(Session::Admin.is_admin());
        assert_eq!(Session::default(), Session::None);
        assert_eq!(Session::Admin.tourist_id(), None);
    }
}
