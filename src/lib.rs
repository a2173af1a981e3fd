pub mod calc;
pub mod driver;
pub mod error;
pub mod options;
pub mod select;
pub mod sysfs;

pub use calc::{compute, Adjustment};
pub use driver::run;
pub use error::{Error, Result};
pub use options::{Args, Options};
pub use select::{select, Criteria, Selection};
pub use sysfs::{scan_dirs, Control, ControlClass};
