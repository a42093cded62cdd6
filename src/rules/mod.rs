//! Rule sets for the element and material passes, one module per export
//! format and pass. The pipeline assembles these into ordered lists; order
//! is load-bearing because later rules overwrite earlier writes.

pub mod oneclick_elements;
pub mod oneclick_materials;
pub mod refined_elements;
pub mod tally_elements;
pub mod tally_materials;
