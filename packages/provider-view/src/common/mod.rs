// Common types shared by the provider domain and the presentation shell

pub mod entity_ids;
pub mod pagination;

pub use entity_ids::ProviderId;
pub use pagination::{page_labels, PageLabel, PaginationConfig};
