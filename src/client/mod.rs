pub mod http;
pub mod traits;
pub mod types;

pub use http::HttpAffordabilityClient;
pub use traits::AffordabilityApi;
pub use types::{AreaQuery, SuggestionRequest};
