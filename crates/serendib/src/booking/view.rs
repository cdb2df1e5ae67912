//! Views produced by the booking flow.
//!
//! A [`View`] is plain data describing what the booking view shows for the
//! current state. The confirmation view interpolates the submitted payload
//! into human-readable sentences and carries the control that returns the
//! guest to the home route.

use std::fmt;

use super::{BookingPayload, Navigator};

/// Label on the confirmation view's navigation control.
const HOME_CONTROL_LABEL: &str = "Back to Home";

/// What the booking view shows for the current flow state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The guest is still filling in the form; rendering is delegated
    /// entirely to the external form collector.
    Collecting,
    /// The form was submitted; show the confirmation.
    Confirmation(ConfirmationView),
}

/// The confirmation view shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    /// View heading.
    pub heading: String,
    /// Human-readable confirmation sentences, in display order.
    pub lines: Vec<String>,
    /// Label of the back-to-home control.
    pub home_label: String,
    /// Route the control navigates to when activated.
    pub home_route: String,
}

impl ConfirmationView {
    /// Build the confirmation view for a submitted payload.
    #[must_use]
    pub(crate) fn new(payload: &BookingPayload, home_route: &str) -> Self {
        Self {
            heading: "Booking Confirmation".to_string(),
            lines: vec![
                format!("Thank you for your booking, {}!", payload.name),
                format!(
                    "We have received your booking for {} on {} for {} guest(s).",
                    payload.destination, payload.date, payload.guests
                ),
                format!(
                    "A confirmation email has been sent to {}.",
                    payload.email
                ),
            ],
            home_label: HOME_CONTROL_LABEL.to_string(),
            home_route: home_route.to_string(),
        }
    }

    /// Activate the back-to-home control.
    ///
    /// Invokes the navigation service with the view's home route.
    pub fn go_home(&self, navigator: &dyn Navigator) {
        navigator.navigate_to(&self.home_route);
    }
}

impl fmt::Display for ConfirmationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "[{}]", self.home_label)
    }
}
