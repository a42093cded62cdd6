//! Named predicate tables, one per tool and classification pass.

pub mod elements;
pub mod materials;
pub mod refined;
