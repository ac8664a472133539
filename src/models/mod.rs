pub mod date_window;
pub mod snapshot;
pub mod verdict;

pub use date_window::DateWindow;
pub use snapshot::SubmitSnapshot;
pub use verdict::{SubmitState, Verdict};
