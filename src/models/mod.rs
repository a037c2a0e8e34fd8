pub mod decision;
pub mod reading;
pub mod report;
pub mod state;

pub use decision::*;
pub use reading::*;
pub use report::*;
pub use state::*;
