pub mod accordion;
pub mod job_run_detail;
pub mod status_icon;
pub mod status_item;
pub mod typography;
