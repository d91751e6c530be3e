pub mod csv_store;
pub mod memory_store;
pub mod traits;
