//! Game engine
//!
//! `HandSession` plays a single hand; `GameSeries` deals and orchestrates a whole
//! series. Both talk to the player only through a `Console`.

pub mod console;
mod series;
mod session;

pub use console::{Console, Notice, Prompt, Terminal};
pub use series::{GameSeries, SeriesState};
pub use session::{Attempt, END_HAND, HandSession, SessionState};
