//! Time utilities: strict HH:MM checks for values typed outside a native
//! time control.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap())
}

/// True for zero-padded 24h `HH:MM` only ("09:05", not "9:05" or "09:05:00").
pub fn is_hhmm(t: &str) -> bool {
    hhmm_re().is_match(t)
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !is_hhmm(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Returns the input unchanged if it is a well-formed `HH:MM` value.
pub fn require_hhmm(t: &str) -> AppResult<&str> {
    if is_hhmm(t) {
        Ok(t)
    } else {
        Err(AppError::InvalidTime(t.to_string()))
    }
}
