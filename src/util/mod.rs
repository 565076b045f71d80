pub mod trace;

pub use trace::initialize_tracer;
