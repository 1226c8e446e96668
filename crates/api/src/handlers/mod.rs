pub mod equipment;
pub mod reliability;
