mod executor;

pub use executor::ItemPipeline;
