pub mod search_index;
pub mod tracing;

pub use search_index::{RecordedRequest, StubSearchIndex};
pub use tracing::{CapturedEvent, init_test_tracing};
