pub mod job_run;
pub mod status;

pub use job_run::*;
pub use status::*;
