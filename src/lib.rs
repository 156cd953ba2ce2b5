pub mod error;
pub mod shape;
pub mod metric;
pub mod io;

// Convenience re-exports
pub use error::{MetricError, MetricResult};
pub use shape::Shape;
pub use metric::rmsd::{rmsd, Rmsd};
pub use metric::element::Element;
pub use metric::missing_values::MissingValues;
pub use metric::report::RmsdReport;
