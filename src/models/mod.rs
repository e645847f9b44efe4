pub mod activity;
pub mod category;
pub mod participant;
pub mod record;

pub use activity::{ActivityCode, ActivityInterval};
pub use category::{BehaviorCategory, CategoryTable, MetricKind};
pub use participant::ParticipantId;
pub use record::{FieldValue, Record, RecordTable};
