//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument and issue exactly one statement.

pub mod attendance_repo;
pub mod record_repo;
pub mod student_repo;
pub mod subject_repo;

pub use attendance_repo::AttendanceRepo;
pub use record_repo::RecordRepo;
pub use student_repo::StudentRepo;
pub use subject_repo::SubjectRepo;
