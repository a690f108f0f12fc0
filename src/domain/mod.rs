mod dates;
mod labels;
pub mod models;
mod progress;
pub mod reconciled;
pub mod squad_list;
pub mod stats;

pub use dates::{deserialize_optional_date, parse_event_date};
pub use labels::platform_label;
pub use models::*;
pub use progress::IngestProgress;
pub use reconciled::{DuplicateVerdict, ReconciledTournament};
pub use squad_list::{SquadListDescriptor, VendorMetadata};
