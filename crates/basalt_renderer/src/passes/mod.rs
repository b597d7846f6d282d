pub mod flat_pass;

pub use flat_pass::FlatPass;
