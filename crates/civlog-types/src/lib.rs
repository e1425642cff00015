pub mod columns;
pub mod error;
pub mod hours;
pub mod page;
pub mod record;
pub mod totals;
mod util;

pub use columns::ColumnMap;
pub use error::{FieldError, RowError};
pub use hours::Hours;
pub use page::{Page, PageNumber};
pub use record::{FlightRecord, RecordId};
pub use totals::PageTotals;
pub use util::*;
