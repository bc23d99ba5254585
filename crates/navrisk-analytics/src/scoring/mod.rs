//! Fund scoring.

mod efficiency;

pub use efficiency::{
    efficiency_score, return_component, risk_adjusted_component, risk_penalty, EfficiencyInputs,
};
