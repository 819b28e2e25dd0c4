//! Waitlist Module
//! Sign-up modal: form validation and the simulated submission round trip.

use crate::timing::{TimerHandle, TimerQueue};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Waitlist form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
}

impl WaitlistForm {
    pub fn validate(&self) -> Result<(), WaitlistError> {
        if self.business_name.trim().is_empty() {
            return Err(WaitlistError::Missing("Business Name"));
        }
        if self.contact_name.trim().is_empty() {
            return Err(WaitlistError::Missing("Contact Name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(WaitlistError::Missing("Email Address"));
        }
        if !is_plausible_email(email) {
            return Err(WaitlistError::InvalidEmail);
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistState {
    Closed,
    Editing,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WaitlistTask {
    CompleteSubmission,
}

/// Modal state machine: Closed -> Editing -> Submitting -> Success.
pub struct WaitlistModal {
    state: WaitlistState,
    pub form: WaitlistForm,
    error: Option<WaitlistError>,
    submit_delay: Duration,
    pending: Option<TimerHandle>,
    timers: TimerQueue<WaitlistTask>,
}

impl WaitlistModal {
    pub fn new(submit_delay: Duration) -> Self {
        Self {
            state: WaitlistState::Closed,
            form: WaitlistForm::default(),
            error: None,
            submit_delay,
            pending: None,
            timers: TimerQueue::new(),
        }
    }

    pub fn state(&self) -> WaitlistState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != WaitlistState::Closed
    }

    pub fn error(&self) -> Option<&WaitlistError> {
        self.error.as_ref()
    }

    /// Open with a fresh form, replacing any modal already shown.
    pub fn open(&mut self) {
        self.cancel_pending();
        self.form = WaitlistForm::default();
        self.error = None;
        self.state = WaitlistState::Editing;
    }

    pub fn close(&mut self) {
        self.cancel_pending();
        self.state = WaitlistState::Closed;
    }

    /// Validate and start the simulated submission.
    pub fn submit(&mut self) -> Result<(), WaitlistError> {
        if self.state != WaitlistState::Editing {
            return Ok(());
        }
        if let Err(err) = self.form.validate() {
            self.error = Some(err.clone());
            return Err(err);
        }
        self.error = None;
        self.state = WaitlistState::Submitting;
        self.pending = Some(
            self.timers
                .set_timeout(self.submit_delay, WaitlistTask::CompleteSubmission),
        );
        Ok(())
    }

    pub fn poll(&mut self, now: Duration) {
        while let Some((_, task)) = self.timers.pop_due(now) {
            match task {
                WaitlistTask::CompleteSubmission => {
                    self.pending = None;
                    if self.state == WaitlistState::Submitting {
                        self.state = WaitlistState::Success;
                        tracing::info!(
                            business = %self.form.business_name,
                            "Waitlist submission accepted"
                        );
                    }
                }
            }
        }
        self.timers.advance_to(now);
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.clear(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WaitlistForm {
        WaitlistForm {
            business_name: "Green Leaf".into(),
            contact_name: "Sam".into(),
            email: "sam@greenleaf.ca".into(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_validation() {
        assert_eq!(filled().validate(), Ok(()));

        let mut form = filled();
        form.contact_name = "  ".into();
        assert_eq!(form.validate(), Err(WaitlistError::Missing("Contact Name")));

        for bad in ["sam", "sam@", "@x.ca", "sam@host", "sam@.ca", "a@b@c.ca"] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(form.validate(), Err(WaitlistError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_submit_completes_after_delay() {
        let mut modal = WaitlistModal::new(Duration::from_millis(2000));
        modal.open();
        modal.form = filled();

        modal.submit().unwrap();
        assert_eq!(modal.state(), WaitlistState::Submitting);

        modal.poll(Duration::from_millis(1999));
        assert_eq!(modal.state(), WaitlistState::Submitting);
        modal.poll(Duration::from_millis(2000));
        assert_eq!(modal.state(), WaitlistState::Success);
    }

    #[test]
    fn test_invalid_submit_stays_editing() {
        let mut modal = WaitlistModal::new(Duration::from_millis(2000));
        modal.open();

        assert!(modal.submit().is_err());
        assert_eq!(modal.state(), WaitlistState::Editing);
        assert_eq!(modal.error(), Some(&WaitlistError::Missing("Business Name")));
        assert_eq!(modal.next_deadline(), None);
    }

    #[test]
    fn test_close_cancels_submission() {
        let mut modal = WaitlistModal::new(Duration::from_millis(2000));
        modal.open();
        modal.form = filled();
        modal.submit().unwrap();

        modal.close();
        modal.poll(Duration::from_secs(10));
        assert_eq!(modal.state(), WaitlistState::Closed);

        modal.open();
        assert_eq!(modal.form, WaitlistForm::default());
        assert_eq!(modal.state(), WaitlistState::Editing);
    }
}
