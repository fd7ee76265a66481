pub mod job;
pub mod role;

pub use job::JobPosting;
pub use role::Role;
