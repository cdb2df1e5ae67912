//! `serendib` - Booking flow core and bounded dev-log writer
//!
//! This library provides the behavioral core of the Serendib booking
//! application: the booking submission flow (collect, confirm, return home)
//! and the size-bounded log writer used by development tooling to persist
//! browser debug logs per source.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod booking;
pub mod cli;
pub mod config;
pub mod devlog;
pub mod error;
pub mod logging;

pub use booking::{BookingFlow, BookingPayload, BookingState, FormCollector, Navigator, View};
pub use config::Config;
pub use devlog::{LogSource, LogWriter, LogWriterConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
