pub mod ingestion;
pub mod reconciliation;
