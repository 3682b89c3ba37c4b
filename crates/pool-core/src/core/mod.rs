pub mod physics;
pub mod table;
pub mod time;
