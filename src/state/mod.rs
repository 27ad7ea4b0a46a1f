//! Application state module

mod address;
mod app_state;
mod autofill;
mod forms;
mod notice;
mod region;

pub use address::*;
pub use app_state::*;
pub use autofill::*;
pub use forms::*;
pub use notice::*;
pub use region::*;
