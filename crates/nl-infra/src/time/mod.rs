mod display_timer;

pub use display_timer::TokioDisplayTimer;
