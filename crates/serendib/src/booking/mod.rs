//! Booking submission flow.
//!
//! This module holds the one piece of process state in the booking view:
//! whether the guest has submitted the form, and if so, with what payload.
//! Rendering is a pure function of that state. Collecting the form fields
//! and navigating away are both external concerns, reached through the
//! [`FormCollector`] and [`Navigator`] seams.

pub mod view;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use view::{ConfirmationView, View};

/// The structured data captured from a completed booking form.
///
/// The flow treats the payload as opaque display data. Field validation is
/// the form collector's responsibility; whatever arrives here is rendered
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    /// Guest name.
    pub name: String,
    /// Destination of the tour.
    pub destination: String,
    /// Travel date, as entered on the form.
    pub date: String,
    /// Number of guests.
    pub guests: u32,
    /// Contact email address.
    pub email: String,
}

/// The state of one booking view instance.
///
/// Starts at `Collecting` and moves to `Confirmed` exactly once, when the
/// form collector hands over a payload. There is no way back to
/// `Collecting`; re-editing a submitted booking is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingState {
    /// The guest is still filling in the form.
    Collecting,
    /// The form was submitted with this payload.
    Confirmed(BookingPayload),
}

/// A source of completed booking forms.
///
/// Implementors gather the guest-entered fields (a web form, CLI flags, a
/// test fixture) and invoke `on_submit` exactly once when the guest
/// completes the form. An implementor may also never invoke it, e.g. when
/// the guest abandons the form.
pub trait FormCollector {
    /// Collect a completed form, handing the payload to `on_submit`.
    fn collect(&mut self, on_submit: &mut dyn FnMut(BookingPayload));
}

/// Navigation service for moving to a named route.
pub trait Navigator {
    /// Navigate to the given route.
    fn navigate_to(&self, route: &str);
}

/// Controller for the booking view.
///
/// Holds the [`BookingState`] and produces the matching [`View`] on demand.
#[derive(Debug)]
pub struct BookingFlow {
    home_route: String,
    state: BookingState,
}

impl BookingFlow {
    /// Create a new flow in the `Collecting` state, returning home to `/`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_home_route("/")
    }

    /// Create a new flow whose confirmation control navigates to `route`.
    #[must_use]
    pub fn with_home_route(route: impl Into<String>) -> Self {
        Self {
            home_route: route.into(),
            state: BookingState::Collecting,
        }
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// Check whether a payload has been submitted.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self.state, BookingState::Confirmed(_))
    }

    /// Accept a submitted payload and move to `Confirmed`.
    ///
    /// The payload is accepted as-is, unvalidated. A second submission is
    /// not reachable through the booking view; if one arrives anyway the
    /// first payload wins and the new one is dropped.
    pub fn submit(&mut self, payload: BookingPayload) {
        if self.is_confirmed() {
            warn!("booking already confirmed; dropping repeated submission");
            return;
        }
        self.state = BookingState::Confirmed(payload);
    }

    /// Drive the flow with a form collector.
    ///
    /// The collector's submission, if any, transitions the flow to
    /// `Confirmed`.
    pub fn collect_from(&mut self, collector: &mut dyn FormCollector) {
        let mut submitted = None;
        collector.collect(&mut |payload| submitted = Some(payload));
        if let Some(payload) = submitted {
            self.submit(payload);
        }
    }

    /// Render the view for the current state.
    ///
    /// Pure function of state: `Collecting` delegates to the external form
    /// collector, `Confirmed` produces the confirmation view with its
    /// back-to-home control.
    #[must_use]
    pub fn render(&self) -> View {
        match &self.state {
            BookingState::Collecting => View::Collecting,
            BookingState::Confirmed(payload) => {
                View::Confirmation(ConfirmationView::new(payload, &self.home_route))
            }
        }
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_payload() -> BookingPayload {
        BookingPayload {
            name: "Asha".to_string(),
            destination: "Ella".to_string(),
            date: "2026-04-01".to_string(),
            guests: 2,
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_flow_starts_collecting() {
        let flow = BookingFlow::new();
        assert_eq!(flow.state(), &BookingState::Collecting);
        assert!(!flow.is_confirmed());
    }

    #[test]
    fn test_render_before_submit_is_collecting_view() {
        let flow = BookingFlow::new();
        assert_eq!(flow.render(), View::Collecting);
    }

    #[test]
    fn test_submit_transitions_to_confirmed() {
        let mut flow = BookingFlow::new();
        flow.submit(test_payload());

        assert!(flow.is_confirmed());
        assert_eq!(flow.state(), &BookingState::Confirmed(test_payload()));
    }

    #[test]
    fn test_render_after_submit_contains_payload_fields() {
        let mut flow = BookingFlow::new();
        flow.submit(test_payload());

        let View::Confirmation(view) = flow.render() else {
            panic!("expected confirmation view");
        };
        let text = view.to_string();
        assert!(text.contains("Asha"));
        assert!(text.contains("Ella"));
        assert!(text.contains("2026-04-01"));
        assert!(text.contains('2'));
        assert!(text.contains("a@x.com"));
    }

    #[test]
    fn test_second_submit_is_dropped() {
        let mut flow = BookingFlow::new();
        flow.submit(test_payload());

        let mut other = test_payload();
        other.name = "Nuwan".to_string();
        flow.submit(other);

        assert_eq!(flow.state(), &BookingState::Confirmed(test_payload()));
    }

    #[test]
    fn test_collect_from_submitting_collector() {
        struct Fixture;
        impl FormCollector for Fixture {
            fn collect(&mut self, on_submit: &mut dyn FnMut(BookingPayload)) {
                on_submit(BookingPayload {
                    name: "Asha".to_string(),
                    destination: "Sigiriya".to_string(),
                    date: "2026-05-10".to_string(),
                    guests: 4,
                    email: "asha@example.com".to_string(),
                });
            }
        }

        let mut flow = BookingFlow::new();
        flow.collect_from(&mut Fixture);
        assert!(flow.is_confirmed());
    }

    #[test]
    fn test_collect_from_abandoning_collector() {
        struct Abandoned;
        impl FormCollector for Abandoned {
            fn collect(&mut self, _on_submit: &mut dyn FnMut(BookingPayload)) {}
        }

        let mut flow = BookingFlow::new();
        flow.collect_from(&mut Abandoned);
        assert!(!flow.is_confirmed());
        assert_eq!(flow.render(), View::Collecting);
    }

    #[test]
    fn test_payload_serde_camel_case() {
        let payload = test_payload();
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"destination\""));
        assert!(json.contains("\"guests\":2"));

        let roundtrip: BookingPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, payload);
    }

    #[test]
    fn test_payload_deserialize_from_form_json() {
        let json = r#"{
            "name": "Asha",
            "destination": "Ella",
            "date": "2026-04-01",
            "guests": 2,
            "email": "a@x.com"
        }"#;
        let payload: BookingPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload, test_payload());
    }
}
