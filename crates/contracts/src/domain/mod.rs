pub mod extraction;
pub mod log_record;
