pub mod editor;
pub mod error;
pub mod export;
pub mod math;
pub mod sketch;

pub use editor::{EditOutcome, Editor, Mode};
pub use error::{PslgenError, Result};
pub use export::{save_poly, write_poly};
pub use sketch::{Loop, Sketch};
