mod executor;
pub use executor::{ExecutorKind, ScheduleClass};

mod ident;
pub use ident::{Kind, Name};
