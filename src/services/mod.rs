// Service exports
pub mod dataset;
pub mod postgres;

pub use dataset::{CollegeDataset, DatasetError};
pub use postgres::{PersonaCount, PostgresClient, PostgresError, SubmissionReceipt};
