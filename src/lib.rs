pub mod adapters;
pub mod classify;
pub mod config;
pub mod constants;
pub mod csv_io;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod predicates;
pub mod rules;
pub mod stored_carbon;
pub mod table;
pub mod taxonomy;
