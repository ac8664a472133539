pub mod guard;
pub mod memory_page;
pub mod page;

pub use guard::FormGuard;
pub use memory_page::MemoryPage;
pub use page::PageContext;
