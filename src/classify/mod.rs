//! Rule-driven classification engine: named predicate masks evaluated once
//! per pass, ordered rules that write taxonomy values through them.

pub mod mapper;
pub mod registry;
pub mod rule;

pub use mapper::Mapper;
pub use registry::{build_registry, eval_predicate, Mask, Match, PredicateSpec, Registry};
pub use rule::{and_or_where, and_where, or_where, write_where, Rule};
