pub mod attendance;
pub mod record;
pub mod student;
