//! Domain library for the Summer Industrial Training Program outreach site.
//!
//! Hosts the configuration and telemetry shell shared with the HTTP binary,
//! the static marketing content rendered by the site pages, and the
//! submission-intake subsystem: wire types for the application and query
//! forms, server-side validation, email template rendering, and a mail
//! dispatch service behind transport/archive trait seams so the binary and
//! the tests can plug in their own adapters.

pub mod config;
pub mod content;
pub mod error;
pub mod intake;
pub mod telemetry;
