pub mod backup;
pub mod log;
pub mod repository;
pub mod state;
pub mod summary;
pub mod timer;
pub mod tracker;
