//! Reporting of option errors.
//!
//! The session hands every option error to a [`Diagnostics`] sink before
//! recording it. The default sink, [`LogDiagnostics`], forwards to the `log`
//! facade; hosts with their own message tables plug in their own sink.

use log::warn;

/// Receives option errors as they happen.
pub trait Diagnostics {
    fn report_unknown_option(&mut self, name: &str);
    fn report_bad_argument(&mut self, option: &str);
    fn report_file_open_failure(&mut self, path: &str);
}

/// Sink that writes each report as a `warn!` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report_unknown_option(&mut self, name: &str) {
        warn!("unknown option: {}", name);
    }

    fn report_bad_argument(&mut self, option: &str) {
        warn!("invalid argument for option: {}", option);
    }

    fn report_file_open_failure(&mut self, path: &str) {
        warn!("can't open configuration file: {}", path);
    }
}
