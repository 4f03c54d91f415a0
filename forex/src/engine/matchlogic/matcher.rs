use crate::engine::entry::{MatchOutcome, Order};
use log::debug;

/// Read-only compatibility check between two distinct orders.
///
/// Two orders can trade when they quote the same pair from opposite valid
/// sides, are both unresolved, belong to different accounts, and the buyer's
/// price is at least the seller's price.
pub fn can_trade(a: &Order, b: &Order) -> bool {
    if a.pair != b.pair {
        return false;
    }
    if !a.action.is_order_side() || !b.action.is_order_side() || a.action == b.action {
        return false;
    }
    if a.is_resolved() || b.is_resolved() {
        return false;
    }
    if a.account == b.account {
        return false;
    }
    match a.buy_and_sell_prices(b) {
        Some((buy_price, sell_price)) => buy_price >= sell_price,
        None => false,
    }
}

/// Counts of final outcomes after a matching pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// Number of orders matched (twice the number of trades)
    pub matched: usize,
    pub rejected: usize,
}

impl MatchSummary {
    /// Counts the outcomes of `orders`; unresolved orders are not counted
    pub fn from_orders(orders: &[Order]) -> Self {
        orders
            .iter()
            .fold(MatchSummary::default(), |mut summary, order| {
                match order.outcome() {
                    MatchOutcome::MatchedWith(_) => summary.matched += 1,
                    MatchOutcome::Rejected => summary.rejected += 1,
                    MatchOutcome::Unresolved => {}
                }
                summary
            })
    }

    /// Number of committed trades; each trade resolves two orders
    pub fn trades(&self) -> usize {
        self.matched / 2
    }
}

/// Pairs compatible orders in a single pass over a list of orders
#[derive(Debug, Default)]
pub struct Matcher;

impl Matcher {
    /// Creates a new matcher. The matcher holds no state between passes.
    pub fn new() -> Self {
        Self
    }

    /// Commits a reciprocal match between `a` and `b` if they can trade.
    ///
    /// This mutates both orders: on success `a` is matched with `b.id` and `b`
    /// with `a.id`. Returns whether the match was committed.
    pub fn attempt_trade(&self, a: &mut Order, b: &mut Order) -> bool {
        if !can_trade(a, b) {
            return false;
        }
        a.match_with(b.id);
        b.match_with(a.id);
        debug!(
            "matched order {} ({} {} @ {}) with order {} ({} {} @ {})",
            a.id, a.account, a.action, a.price, b.id, b.account, b.action, b.price
        );
        true
    }

    /// Index form of [`attempt_trade`](Self::attempt_trade). Comparing an order
    /// with itself never commits anything.
    pub fn attempt_trade_at(&self, orders: &mut [Order], a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        let (low, high) = (a.min(b), a.max(b));
        let (head, tail) = orders.split_at_mut(high);
        let (first, second) = (&mut head[low], &mut tail[0]);
        if a < b {
            self.attempt_trade(first, second)
        } else {
            self.attempt_trade(second, first)
        }
    }

    /// Runs one full matching pass. On return no order is unresolved.
    pub fn match_orders(&self, orders: &mut [Order]) -> MatchSummary {
        let n = orders.len();
        for position in 0..n {
            for candidate in 0..n {
                self.attempt_trade_at(orders, position, candidate);
            }
            if !orders[position].is_resolved() {
                debug!("order {} has no counterpart", orders[position].id);
                orders[position].reject();
            }
        }
        MatchSummary::from_orders(orders)
    }
}
