pub mod flat;
pub mod layout;

pub use flat::FlatPipeline;
pub use layout::PipelineLayouts;
