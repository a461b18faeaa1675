pub mod anime;
pub mod jobs;
pub mod provider;
pub mod season;
pub mod seiyuu;
