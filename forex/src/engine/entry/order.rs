use crate::engine::entry::CurrencyPair;
use rust_decimal::Decimal;
use std::fmt;

/// Order identifier, taken verbatim from the record file
pub type OrderId = i64;

/// Literal written in the report for orders without a counterpart
pub const REJECTED_TOKEN: &str = "REJECTED";

/// Side of an order as written in the record file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    Buy,
    Sell,
    /// Anything other than `BUY` / `SELL`, kept verbatim for the report.
    /// Such orders can never trade.
    Other(String),
}

impl OrderAction {
    /// Parses `BUY` / `SELL` exactly; any other text becomes [`OrderAction::Other`]
    pub fn parse(text: &str) -> Self {
        match text {
            "BUY" => OrderAction::Buy,
            "SELL" => OrderAction::Sell,
            other => OrderAction::Other(other.to_string()),
        }
    }

    /// True for `Buy` and `Sell`
    pub fn is_order_side(&self) -> bool {
        matches!(self, OrderAction::Buy | OrderAction::Sell)
    }

    /// The action as written in the report
    pub fn as_str(&self) -> &str {
        match self {
            OrderAction::Buy => "BUY",
            OrderAction::Sell => "SELL",
            OrderAction::Other(text) => text,
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final state of an order after the matching pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchOutcome {
    /// Not yet visited by the matcher
    #[default]
    Unresolved,
    /// Matched with the order carrying this id
    MatchedWith(OrderId),
    /// No eligible counterpart was found
    Rejected,
}

impl MatchOutcome {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, MatchOutcome::Unresolved)
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Unresolved => f.write_str("UNRESOLVED"),
            MatchOutcome::MatchedWith(id) => write!(f, "{}", id),
            MatchOutcome::Rejected => f.write_str(REJECTED_TOKEN),
        }
    }
}

/// A single buy or sell order loaded from the record file
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub account: String,
    pub pair: CurrencyPair,
    pub action: OrderAction,
    pub price: Decimal,
    outcome: MatchOutcome,
}

impl Order {
    /// Creates an unresolved order
    pub fn new(
        id: OrderId,
        account: String,
        pair: CurrencyPair,
        action: OrderAction,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            account,
            pair,
            action,
            price,
            outcome: MatchOutcome::Unresolved,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_resolved()
    }

    /// `(buy price, sell price)` of a trade between `self` and `other`, whichever
    /// operand is the buyer. `None` unless the two orders sit on opposite sides.
    pub fn buy_and_sell_prices(&self, other: &Order) -> Option<(Decimal, Decimal)> {
        match (&self.action, &other.action) {
            (OrderAction::Buy, OrderAction::Sell) => Some((self.price, other.price)),
            (OrderAction::Sell, OrderAction::Buy) => Some((other.price, self.price)),
            _ => None,
        }
    }

    // Outcomes only move out of `Unresolved`; the matcher is the only caller.
    pub(crate) fn match_with(&mut self, counterpart: OrderId) {
        debug_assert!(!self.is_resolved(), "order {} resolved twice", self.id);
        self.outcome = MatchOutcome::MatchedWith(counterpart);
    }

    pub(crate) fn reject(&mut self) {
        debug_assert!(!self.is_resolved(), "order {} resolved twice", self.id);
        self.outcome = MatchOutcome::Rejected;
    }
}
