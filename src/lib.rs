pub mod batch;
pub mod bench;
pub mod config;
pub mod error;
pub mod shell;
pub mod store;

pub use batch::BatchRunner;
pub use store::FileStore;
