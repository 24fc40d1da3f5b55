pub mod aggregator;
pub mod assembler;
pub mod selector;
pub mod service;

pub use aggregator::{
    aggregate,
    AggregateOptions,
};
pub use assembler::assemble;
pub use selector::select_match;
pub use service::MatchingService;
