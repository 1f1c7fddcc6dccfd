mod layout;
mod memory;

pub use layout::PageLayout;
pub use memory::MemoryDocument;
