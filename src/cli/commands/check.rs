use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::FormGuard;
use crate::errors::{AppError, AppResult};
use crate::models::{SubmitSnapshot, Verdict};
use crate::ui::messages::{alert, success};
use crate::utils::time::require_hhmm;

/// Validate a log in / log out pair typed on the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        login_pos,
        logout_pos,
        login,
        logout,
    } = cmd
    {
        //
        // 1. Resolve values: --in/--out win over positionals
        //
        let login = login
            .as_ref()
            .or(login_pos.as_ref())
            .ok_or_else(|| AppError::InvalidTime("missing log in time".to_string()))?;
        let logout = logout
            .as_ref()
            .or(logout_pos.as_ref())
            .ok_or_else(|| AppError::InvalidTime("missing log out time".to_string()))?;

        //
        // 2. Outside a native time control nothing guarantees zero padding
        //
        let snapshot = SubmitSnapshot::new(require_hhmm(login)?, require_hhmm(logout)?);

        //
        // 3. Validate
        //
        let guard = FormGuard::new(cfg.clone());
        match guard.on_submit(&snapshot) {
            Verdict::Accept => success(format!("Accepted: {} → {}", login, logout)),
            Verdict::Reject(msg) => {
                alert(&msg);
                return Err(AppError::SubmissionRejected(msg));
            }
        }
    }

    Ok(())
}
