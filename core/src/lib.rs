mod amount;
mod decimal;
pub mod units;

pub use amount::*;
pub use decimal::*;
pub use units::{
    to_display, to_native, try_to_display, try_to_native, AmountError, AmountInput,
    BAN_DECIMALS, MAX_SUPPLY,
};
