use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{FormGuard, MemoryPage};
use crate::errors::{AppError, AppResult};
use crate::models::{SubmitState, Verdict};
use crate::ui::messages::{alert, info, success};
use crate::utils::date;

/// Load a page file and run ready + submit against it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Simulate { page, date: day } = cmd {
        let mut doc = MemoryPage::load(Path::new(page))?;
        let guard = FormGuard::new(cfg.clone());

        // page-ready
        let window = match day {
            Some(d) => {
                let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                guard.on_ready_for(&mut doc, d)?
            }
            None => guard.on_ready(&mut doc)?,
        };
        info(format!(
            "#{} min={} max={}",
            cfg.date_field,
            window.min_attr(),
            window.max_attr()
        ));

        // submit
        let verdict = guard.intercept_submit(&mut doc)?;
        for msg in doc.alerts() {
            alert(msg);
        }

        let state = SubmitState::after(&verdict);
        match verdict {
            Verdict::Accept => success(format!("Submission {}", state.as_str())),
            Verdict::Reject(msg) => return Err(AppError::SubmissionRejected(msg)),
        }
    }

    Ok(())
}
