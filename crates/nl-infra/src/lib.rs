pub mod content;
pub mod delivery;
pub mod time;

pub use content::{EmbeddedContentSource, FileContentSource};
pub use delivery::{EmailJsDelivery, SimulatedDelivery, DEFAULT_EMAILJS_ENDPOINT};
pub use time::TokioDisplayTimer;
