//! Portal view state machine.
//!
//! [`PortalController`] owns everything the landing/portal screen shows:
//! which of the screens is active, the two form buffers, the inline error and
//! the loading flag. It is UI-free; the desktop page keeps one in a signal and
//! forwards events to it. Anything that leaves the screen is returned as a
//! [`Navigation`] for the caller to perform.
//!
//! ## Transitions
//!
//! | Event | Result |
//! |-------|--------|
//! | tourist portal / register tab | `TouristRegister`, error cleared |
//! | login tab | `TouristLogin`, error cleared |
//! | back | `Landing`, error cleared |
//! | admin portal | admin session, [`Navigation::Admin`] |
//! | submit registration | validate, then register and [`Navigation::Tourist`] |
//! | submit login / Enter in email | validate, then lookup and [`Navigation::Tourist`] |
//!
//! Form buffers survive mode switches.

use crate::directory::TouristDirectory;
use crate::error::{DirectoryResult, PortalError};
use crate::types::{RegistrationField, RegistrationForm, Tourist};

/// Which screen the portal is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Landing,
    TouristRegister,
    TouristLogin,
    Admin,
}

impl ViewMode {
    /// True for the two tabs of the tourist card
    pub fn is_tourist_form(&self) -> bool {
        matches!(self, ViewMode::TouristRegister | ViewMode::TouristLogin)
    }
}

/// Where the app should go after a successful portal action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Tourist,
    Admin,
}

impl Navigation {
    /// Route path of the destination screen
    pub fn path(&self) -> &'static str {
        match self {
            Navigation::Tourist => "/tourist",
            Navigation::Admin => "/admin",
        }
    }
}

/// Keys the portal reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalKey {
    Enter,
    Other,
}

/// State holder for the landing / tourist / admin portal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortalController {
    mode: ViewMode,
    registration: RegistrationForm,
    login_email: String,
    error: Option<PortalError>,
    loading: bool,
}

impl PortalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn registration(&self) -> &RegistrationForm {
        &self.registration
    }

    pub fn login_email(&self) -> &str {
        &self.login_email
    }

    pub fn error(&self) -> Option<&PortalError> {
        self.error.as_ref()
    }

    /// True while a registration call is outstanding
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the register button should accept clicks
    pub fn can_submit_registration(&self) -> bool {
        !self.loading
    }

    /// Register button caption
    pub fn register_button_label(&self) -> &'static str {
        if self.loading {
            "Creating Digital Identity..."
        } else {
            "Register & Get Digital ID"
        }
    }

    fn switch_to(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.error = None;
    }

    // Navigation within the portal

    /// "Tourist Portal" on the landing screen
    pub fn select_tourist_portal(&mut self) {
        self.switch_to(ViewMode::TouristRegister);
    }

    /// "Register" tab
    pub fn select_register_tab(&mut self) {
        self.switch_to(ViewMode::TouristRegister);
    }

    /// "Login" tab
    pub fn select_login_tab(&mut self) {
        self.switch_to(ViewMode::TouristLogin);
    }

    /// "Back" from the tourist card
    pub fn back(&mut self) {
        self.switch_to(ViewMode::Landing);
    }

    /// "Admin Portal" on the landing screen.
    ///
    /// Always starts an admin session and navigates, whatever the form state.
    pub fn select_admin_portal(&mut self, directory: &dyn TouristDirectory) -> Navigation {
        directory.login_admin();
        self.switch_to(ViewMode::Admin);
        Navigation::Admin
    }

    // Field edits

    pub fn edit_registration(&mut self, field: RegistrationField, value: String) {
        self.registration.set(field, value);
    }

    pub fn edit_login_email(&mut self, value: String) {
        self.login_email = value;
    }

    // Registration

    /// Validate the registration form and mark the submission in flight.
    ///
    /// Returns the snapshot to send to the directory, or `None` when the form
    /// is incomplete or a submission is already outstanding.
    pub fn begin_registration(&mut self) -> Option<RegistrationForm> {
        if self.loading {
            return None;
        }

        self.error = None;
        if !self.registration.is_complete() {
            self.error = Some(PortalError::MissingFields);
            return None;
        }

        self.loading = true;
        Some(self.registration.clone())
    }

    /// Apply the directory's answer to an outstanding registration.
    ///
    /// Navigation only happens if the user is still on the register tab.
    pub fn finish_registration(&mut self, result: DirectoryResult<Tourist>) -> Option<Navigation> {
        self.loading = false;
        let still_registering = self.mode == ViewMode::TouristRegister;

        match result {
            Ok(_) if still_registering => Some(Navigation::Tourist),
            Ok(tourist) => {
                tracing::info!(
                    "Registration of {} finished after leaving the register tab",
                    tourist.id
                );
                None
            }
            Err(e) => {
                tracing::warn!("Registration rejected: {}", e);
                if still_registering {
                    self.error = Some(e.into());
                }
                None
            }
        }
    }

    /// Validate, register and report where to go next.
    ///
    /// The desktop page splits this into [`Self::begin_registration`] and
    /// [`Self::finish_registration`] around a spawned task.
    pub async fn submit_registration(
        &mut self,
        directory: &dyn TouristDirectory,
    ) -> Option<Navigation> {
        let form = self.begin_registration()?;
        let result = directory.register_tourist(form).await;
        self.finish_registration(result)
    }

    // Login

    /// Log in by email
    pub fn submit_login(&mut self, directory: &dyn TouristDirectory) -> Option<Navigation> {
        self.error = None;
        if self.login_email.is_empty() {
            self.error = Some(PortalError::MissingEmail);
            return None;
        }

        if directory.login_tourist(&self.login_email) {
            Some(Navigation::Tourist)
        } else {
            self.error = Some(PortalError::TouristNotFound);
            None
        }
    }

    /// Key pressed inside the login email field
    pub fn key_down(
        &mut self,
        key: PortalKey,
        directory: &dyn TouristDirectory,
    ) -> Option<Navigation> {
        match key {
            PortalKey::Enter if self.mode == ViewMode::TouristLogin => {
                self.submit_login(directory)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    /// Records every call; knows a fixed set of emails.
    #[derive(Default)]
    struct RecordingDirectory {
        known: Vec<String>,
        reject_registration: bool,
        registrations: Mutex<Vec<RegistrationForm>>,
        logins: Mutex<Vec<String>>,
        admin_logins: Mutex<usize>,
    }

    #[async_trait]
    impl TouristDirectory for RecordingDirectory {
        async fn register_tourist(&self, form: RegistrationForm) -> DirectoryResult<Tourist> {
            self.registrations.lock().push(form.clone());
            if self.reject_registration {
                return Err(DirectoryError::EmailTaken(form.email));
            }
            Ok(Tourist::from_registration(form))
        }

        fn login_tourist(&self, email: &str) -> bool {
            self.logins.lock().push(email.to_string());
            self.known.iter().any(|k| k == email)
        }

        fn login_admin(&self) {
            *self.admin_logins.lock() += 1;
        }
    }

    fn knows_alice() -> RecordingDirectory {
        RecordingDirectory {
            known: vec!["alice@demo.com".to_string()],
            ..Default::default()
        }
    }

    fn fill(ctrl: &mut PortalController) {
        ctrl.edit_registration(RegistrationField::Name, "Hana Sato".into());
        ctrl.edit_registration(RegistrationField::Email, "hana@x.jp".into());
        ctrl.edit_registration(RegistrationField::Phone, "+81-3-0000".into());
        ctrl.edit_registration(RegistrationField::EmergencyContactName, "Ken Sato".into());
        ctrl.edit_registration(RegistrationField::EmergencyContactPhone, "+81-3-0001".into());
    }

    #[test]
    fn test_initial_state() {
        let ctrl = PortalController::new();
        assert_eq!(ctrl.mode(), ViewMode::Landing);
        assert_eq!(ctrl.registration(), &RegistrationForm::default());
        assert_eq!(ctrl.login_email(), "");
        assert!(ctrl.error().is_none());
        assert!(!ctrl.is_loading());
    }

    #[test]
    fn test_mode_switches() {
        let mut ctrl = PortalController::new();

        ctrl.select_tourist_portal();
        assert_eq!(ctrl.mode(), ViewMode::TouristRegister);

        ctrl.select_login_tab();
        assert_eq!(ctrl.mode(), ViewMode::TouristLogin);

        ctrl.select_register_tab();
        assert_eq!(ctrl.mode(), ViewMode::TouristRegister);

        ctrl.back();
        assert_eq!(ctrl.mode(), ViewMode::Landing);
    }

    #[tokio::test]
    async fn test_incomplete_registration_never_calls_directory() {
        let dir = knows_alice();
        let mut ctrl = PortalController::new();
        ctrl.select_tourist_portal();
        fill(&mut ctrl);
        ctrl.edit_registration(RegistrationField::EmergencyContactPhone, String::new());

        let nav = ctrl.submit_registration(&dir).await;

        assert_eq!(nav, None);
        assert_eq!(ctrl.mode(), ViewMode::TouristRegister);
        assert_eq!(ctrl.error(), Some(&PortalError::MissingFields));
        assert!(!ctrl.is_loading());
        assert!(dir.registrations.lock().is_empty());
    }

    #[tokio::test]
    async fn test_complete_registration_sends_snapshot_once() {
        let dir = knows_alice();
        let mut ctrl = PortalController::new();
        ctrl.select_tourist_portal();
        fill(&mut ctrl);

        let nav = ctrl.submit_registration(&dir).await;

        assert_eq!(nav, Some(Navigation::Tourist));
        assert_eq!(nav.map(|n| n.path()), Some("/tourist"));
        assert!(!ctrl.is_loading());
        let sent = dir.registrations.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(&sent[0], ctrl.registration());
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut ctrl = PortalController::new();
        ctrl.select_tourist_portal();
        fill(&mut ctrl);

        assert!(ctrl.begin_registration().is_some());
        assert!(ctrl.is_loading());
        assert!(!ctrl.can_submit_registration());
        assert_eq!(ctrl.register_button_label(), "Creating Digital Identity...");

        assert!(ctrl.begin_registration().is_none());
        assert!(ctrl.error().is_none());
    }

    #[tokio::test]
    async fn test_rejected_registration_shows_message() {
        let dir = RecordingDirectory {
            reject_registration: true,
            ..Default::default()
        };
        let mut ctrl = PortalController::new();
        ctrl.select_tourist_portal();
        fill(&mut ctrl);

        let nav = ctrl.submit_registration(&dir).await;

        assert_eq!(nav, None);
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.register_button_label(), "Register & Get Digital ID");
        assert_eq!(
            ctrl.error().map(|e| e.to_string()),
            Some("Email already registered: hana@x.jp".to_string())
        );
    }

    #[test]
    fn test_registration_finishing_after_back_does_not_navigate() {
        let mut ctrl = PortalController::new();
        ctrl.select_tourist_portal();
        fill(&mut ctrl);
        let form = ctrl.begin_registration().unwrap();

        ctrl.back();
        let nav = ctrl.finish_registration(Ok(Tourist::from_registration(form)));

        assert_eq!(nav, None);
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.mode(), ViewMode::Landing);
    }

    #[test]
    fn test_registration_failing_after_login_tab_is_dropped() {
        let mut ctrl = PortalController::new();
        ctrl.select_tourist_portal();
        fill(&mut ctrl);
        assert!(ctrl.begin_registration().is_some());

        ctrl.select_login_tab();
        let nav = ctrl.finish_registration(Err(DirectoryError::EmailTaken("hana@x.jp".into())));

        assert_eq!(nav, None);
        assert!(ctrl.error().is_none());
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.mode(), ViewMode::TouristLogin);
    }

    #[test]
    fn test_login_requires_email() {
        let dir = knows_alice();
        let mut ctrl = PortalController::new();
        ctrl.select_login_tab();

        assert_eq!(ctrl.submit_login(&dir), None);
        assert_eq!(ctrl.error(), Some(&PortalError::MissingEmail));
        assert!(dir.logins.lock().is_empty());
    }

    #[test]
    fn test_login_known_and_unknown() {
        let dir = knows_alice();
        let mut ctrl = PortalController::new();
        ctrl.select_login_tab();

        ctrl.edit_login_email("bob@nowhere.com".into());
        assert_eq!(ctrl.submit_login(&dir), None);
        assert_eq!(ctrl.error(), Some(&PortalError::TouristNotFound));
        assert_eq!(ctrl.mode(), ViewMode::TouristLogin);

        ctrl.edit_login_email("alice@demo.com".into());
        assert_eq!(ctrl.submit_login(&dir), Some(Navigation::Tourist));
        assert!(ctrl.error().is_none());
    }

    #[test]
    fn test_enter_key_matches_login_button() {
        let dir = knows_alice();
        let mut ctrl = PortalController::new();
        ctrl.select_login_tab();
        ctrl.edit_login_email("alice@demo.com".into());

        assert_eq!(ctrl.key_down(PortalKey::Other, &dir), None);
        assert!(dir.logins.lock().is_empty());

        assert_eq!(ctrl.key_down(PortalKey::Enter, &dir), Some(Navigation::Tourist));
        assert_eq!(dir.logins.lock().as_slice(), ["alice@demo.com".to_string()]);
    }

    #[test]
    fn test_admin_portal_ignores_form_state() {
        let dir = knows_alice();
        let mut ctrl = PortalController::new();
        ctrl.select_tourist_portal();
        fill(&mut ctrl);
        let _ = ctrl.begin_registration();
        ctrl.edit_login_email("half-typed@".into());

        assert_eq!(ctrl.select_admin_portal(&dir), Navigation::Admin);
        assert_eq!(Navigation::Admin.path(), "/admin");
        assert_eq!(*dir.admin_logins.lock(), 1);
        assert_eq!(ctrl.mode(), ViewMode::Admin);
    }

    #[test]
    fn test_mode_switch_clears_error_keeps_buffers() {
        let dir = knows_alice();
        let mut ctrl = PortalController::new();
        ctrl.select_tourist_portal();
        ctrl.edit_registration(RegistrationField::Name, "Partial".into());
        assert!(ctrl.begin_registration().is_none());
        assert!(ctrl.error().is_some());

        ctrl.select_login_tab();
        assert!(ctrl.error().is_none());
        ctrl.edit_login_email("ghost@x.io".into());
        ctrl.submit_login(&dir);
        assert!(ctrl.error().is_some());

        ctrl.back();
        assert!(ctrl.error().is_none());
        ctrl.select_tourist_portal();

        assert_eq!(ctrl.registration().name, "Partial");
        assert_eq!(ctrl.login_email(), "ghost@x.io");
    }
}
