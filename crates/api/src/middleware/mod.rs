pub mod panic;
pub mod request_id;

pub use panic::handle_panic;
pub use request_id::{propagate_request_id, REQUEST_ID_HEADER};
