pub mod io;
pub mod source;

pub use io::atomic_write_str;
pub use source::DirDataSource;
