//! Turning a weather record into a display-ready view state.

mod clock;
mod mapper;
mod theme;

pub use clock::{format_clock_time, format_current_date, format_day_of_week};
pub use mapper::{map_to_view_state, MalformedRecordError, ViewState};
pub use theme::{Theme, ThemeResolver, ThemeSelection, ThemeTableError};
