pub mod json;
pub mod origin;
pub mod upstream;

pub use json::AppJson;
pub use origin::OriginDto;
pub use upstream::{UpstreamDto, UpstreamRemovalDto};
