pub mod memory;
pub mod mock;
pub mod system;
