pub mod domain;
pub mod infrastructure;
pub mod worker;

pub use domain::entities::{Job, JobRecord, JobStatus, JobType};
pub use domain::repository::JobRepository;
pub use worker::BackgroundWorker;
