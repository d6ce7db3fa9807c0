use tracing::debug;

/// Console session state: who is signed in, which company they are
/// viewing, and whether a modal form is open.
///
/// Owned by the caller and passed down explicitly; consumers receive it
/// as a parameter rather than reaching into shared context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
    company_id: Option<String>,
    modal_visible: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        debug!(user_id = %user_id, "session sign-in");
        self.user_id = Some(user_id);
    }

    /// Clears the whole session, including the company selection.
    pub fn sign_out(&mut self) {
        debug!(user_id = ?self.user_id, "session sign-out");
        *self = Self::default();
    }

    pub fn select_company(&mut self, company_id: impl Into<String>) {
        let company_id = company_id.into();
        debug!(company_id = %company_id, "company selected");
        self.company_id = Some(company_id);
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn company_id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }

    pub fn show_modal(&mut self) {
        self.modal_visible = true;
    }

    pub fn hide_modal(&mut self) {
        self.modal_visible = false;
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }
}
