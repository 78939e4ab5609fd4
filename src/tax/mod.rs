pub mod allocation;
pub mod compare;
pub mod exercised;
pub mod rates;
pub mod transfer;

pub use allocation::{
    resolve_sellable_units, Allocation, CapContext, EmploymentStatus, LimitingFactor,
};
pub use compare::{compare, Comparison, Recommendation};
pub use exercised::{calculate_exercised_sale, ExercisedInput, ExercisedSale};
pub use rates::{is_long_term, RateTable};
pub use transfer::{calculate_direct_transfer, DirectTransfer, TransferInput};
