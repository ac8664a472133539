//! The form guard: date window on page-ready, time order on submit.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Config;
use crate::core::page::PageContext;
use crate::errors::AppResult;
use crate::models::{DateWindow, SubmitSnapshot, Verdict};
use crate::utils::date;

/// One guard per page. Holds only the element ids and the rejection text.
#[derive(Debug, Clone, Default)]
pub struct FormGuard {
    cfg: Config,
}

impl FormGuard {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Page-ready hook: restrict the date control to today (local zone).
    pub fn on_ready<P: PageContext + ?Sized>(&self, page: &mut P) -> AppResult<DateWindow> {
        self.on_ready_for(page, date::today())
    }

    /// Same as [`on_ready`](Self::on_ready) with an explicit day.
    ///
    /// The date control is looked up before anything is written, so a
    /// missing control leaves the page untouched.
    pub fn on_ready_for<P: PageContext + ?Sized>(
        &self,
        page: &mut P,
        day: NaiveDate,
    ) -> AppResult<DateWindow> {
        let id = &self.cfg.date_field;
        page.value_of(id)?;

        let window = DateWindow::single(day);
        page.set_attribute(id, "min", &window.min_attr())?;
        page.set_attribute(id, "max", &window.max_attr())?;

        debug!(field = %id, min = %window.min_attr(), max = %window.max_attr(), "date window applied");
        Ok(window)
    }

    /// Submit hook. Pure: the verdict depends only on the snapshot.
    pub fn on_submit(&self, snapshot: &SubmitSnapshot) -> Verdict {
        let verdict = if snapshot.is_ordered() {
            Verdict::Accept
        } else {
            Verdict::Reject(self.cfg.reject_message.clone())
        };

        debug!(
            login = %snapshot.login_time,
            logout = %snapshot.logout_time,
            accepted = verdict.is_accept(),
            "submit validated"
        );
        verdict
    }

    /// Read both time controls from the page.
    pub fn snapshot<P: PageContext + ?Sized>(&self, page: &P) -> AppResult<SubmitSnapshot> {
        Ok(SubmitSnapshot::new(
            page.value_of(&self.cfg.login_field)?,
            page.value_of(&self.cfg.logout_field)?,
        ))
    }

    /// Host-side submit: snapshot, validate, alert on rejection.
    ///
    /// The caller turns `Verdict::Reject` into its own "prevent default".
    pub fn intercept_submit<P: PageContext + ?Sized>(&self, page: &mut P) -> AppResult<Verdict> {
        let snapshot = self.snapshot(page)?;
        let verdict = self.on_submit(&snapshot);
        if let Some(msg) = verdict.message() {
            page.alert(msg);
        }
        Ok(verdict)
    }
}
