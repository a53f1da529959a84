use crate::api::{ApiError, LoginFlagRecord, User};

pub const FLAGS_LOAD_ERROR: &str = "Failed to fetch Google login settings.";
pub const UPDATE_ERROR: &str = "Failed to update Google login setting.";
pub const UPDATE_SUCCESS: &str = "Google login setting updated successfully.";
pub const SUCCESS_CLEAR_DELAY_MS: u32 = 3_000;

/// Identifies one success notice. Only the timer holding the ticket of the
/// most recent success may clear the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    Loading,
    Empty,
    Rows,
}

/// Page state for the Google login settings table.
///
/// Users and flag records arrive independently; a user without a record
/// reads as disabled until (and unless) one shows up.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsStore {
    pub users: Vec<User>,
    pub flags: Vec<LoginFlagRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    success_ticket: u64,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            flags: Vec::new(),
            loading: true,
            error: None,
            success: None,
            success_ticket: 0,
        }
    }
}

impl SettingsStore {
    /// Failures are not surfaced; the table falls back to its empty state.
    pub fn apply_users(&mut self, result: Result<Vec<User>, ApiError>) {
        match result {
            Ok(users) => self.users = users,
            Err(_) => self.users.clear(),
        }
        self.loading = false;
    }

    pub fn apply_login_flags(&mut self, result: Result<Vec<LoginFlagRecord>, ApiError>) {
        match result {
            Ok(flags) => self.flags = flags,
            Err(_) => self.error = Some(FLAGS_LOAD_ERROR.to_string()),
        }
    }

    /// Last matching record wins when upstream sends duplicates.
    pub fn status(&self, user_id: &str) -> bool {
        self.flags
            .iter()
            .rev()
            .find(|record| record.user_id == user_id)
            .map(|record| record.google_login_enabled)
            .unwrap_or(false)
    }

    /// Rewrites existing records only; a user without a record stays without one.
    pub fn merge_status(&mut self, user_id: &str, enabled: bool) {
        self.flags
            .iter_mut()
            .filter(|record| record.user_id == user_id)
            .for_each(|record| record.google_login_enabled = enabled);
    }

    /// Folds the outcome of a confirmed update into the page. Returns the
    /// ticket the auto-clear timer must present on success.
    pub fn apply_update(
        &mut self,
        user_id: &str,
        enabled: bool,
        result: Result<(), ApiError>,
    ) -> Option<SuccessTicket> {
        match result {
            Ok(()) => {
                self.merge_status(user_id, enabled);
                self.success_ticket = self.success_ticket.wrapping_add(1);
                self.success = Some(UPDATE_SUCCESS.to_string());
                Some(SuccessTicket(self.success_ticket))
            }
            Err(_) => {
                self.error = Some(UPDATE_ERROR.to_string());
                None
            }
        }
    }

    /// Returns whether the message was cleared; stale tickets are ignored.
    pub fn clear_success(&mut self, ticket: SuccessTicket) -> bool {
        if ticket.0 != self.success_ticket || self.success.is_none() {
            return false;
        }
        self.success = None;
        true
    }

    pub fn table_state(&self) -> TableState {
        if self.loading {
            TableState::Loading
        } else if self.users.is_empty() {
            TableState::Empty
        } else {
            TableState::Rows
        }
    }
}
