//! Fixed-rate mortgage engine: derived payment figures and the lazy
//! month-by-month amortization schedule.

pub mod loan;
pub mod schedule;

pub use loan::{analyze_mortgage, Mortgage, MortgageInput, MortgageSummary};
pub use schedule::{
    build_schedule, AmortizationSchedule, ScheduleEntry, ScheduleOutput, ScheduleRow,
};
