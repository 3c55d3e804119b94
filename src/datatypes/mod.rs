mod numbering_plan_indicator;
mod type_of_number;

pub use numbering_plan_indicator::NumberingPlanIndicator;
pub use type_of_number::TypeOfNumber;
