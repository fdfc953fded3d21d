pub mod store;

pub use store::{find_record, RecordStore};
