//! Message delivery adapters.

mod emailjs;
mod simulated;

pub use emailjs::{EmailJsDelivery, DEFAULT_EMAILJS_ENDPOINT};
pub use simulated::SimulatedDelivery;
