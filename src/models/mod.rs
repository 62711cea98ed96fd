pub mod run;

pub use run::{ManifestLine, RunGrid, RunIter, RunSpec};
