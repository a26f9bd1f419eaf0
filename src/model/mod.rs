//! Data types produced by extraction.
//!
//! Everything here is derived from a single résumé text and is read-only
//! once built: the section map borrows from the input, the records own
//! their strings.

mod education;
mod record;
mod section;

pub use education::{DegreeRecord, EducationRecords};
pub use record::{ResumeRecord, NO_CERTIFICATION_DATA};
pub use section::{SectionKind, SectionMap};
