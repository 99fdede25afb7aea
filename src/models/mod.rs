pub mod job_types;
pub mod view_types;
