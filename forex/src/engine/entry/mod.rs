pub mod order;
pub mod pair;

pub use order::{MatchOutcome, Order, OrderAction, OrderId};
pub use pair::CurrencyPair;
