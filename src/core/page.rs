//! Operations the guard needs from the page hosting the form.

use crate::errors::AppResult;

/// Host-side view of the form's controls.
///
/// Every lookup is by element id and fails with
/// [`AppError::MissingControl`](crate::errors::AppError::MissingControl)
/// when the element is absent.
pub trait PageContext {
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> AppResult<()>;

    fn value_of(&self, id: &str) -> AppResult<String>;

    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);

    fn has_control(&self, id: &str) -> bool {
        self.value_of(id).is_ok()
    }
}
