pub mod rmsd;
pub mod element;
pub mod missing_values;
pub mod report;

pub use rmsd::{rmsd, Rmsd};
pub use element::Element;
pub use missing_values::MissingValues;
pub use report::RmsdReport;
