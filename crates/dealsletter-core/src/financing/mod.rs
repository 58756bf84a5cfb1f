pub mod closing_costs;
pub mod defaults;
pub mod validation;

pub use closing_costs::{
    calculate_closing_costs, closing_costs_for_financing_type, ClosingCostBreakdown,
};
pub use defaults::{
    conventional_fallback, financing_defaults, BrrrrFinancingDefaults, FinancingDefaults,
    FinancingType, Strategy, StrategyFinancing,
};
pub use validation::{validate_financing_params, FinancingValidation};
