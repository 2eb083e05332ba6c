pub mod error;
pub mod report;
pub mod result_id;
pub mod trace;

pub use error::{Error, Result};
pub use report::*;
pub use result_id::ResultId;
pub use trace::*;
