//! # Pricing Engine
//!
//! Computes an order's total from its resolved lines, applying the premium
//! discount.
//!
//! Lines are accumulated in order. Each line whose product is
//! [`Premium`](crate::model::Category::PREMIUM) bumps a counter; once the
//! counter reaches [`PREMIUM_THRESHOLD`] the discount kicks in. How it is
//! applied depends on [`DiscountMode`]:
//!
//! - [`DiscountMode::Compounding`]: on the line where the threshold is reached,
//!   and on every premium line after it, the whole running total is reduced by
//!   [`PREMIUM_DISCOUNT`]. Four premium lines therefore discount twice.
//! - [`DiscountMode::WholeOrder`]: the final total is reduced once if the
//!   order has at least [`PREMIUM_THRESHOLD`] premium lines.

use crate::model::Product;
use std::str::FromStr;
use thiserror::Error;

/// Number of premium lines that unlocks the discount.
pub const PREMIUM_THRESHOLD: usize = 3;

/// Fraction taken off when the discount applies.
pub const PREMIUM_DISCOUNT: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscountMode {
    /// Re-applied to the running total on every premium line from the
    /// threshold onwards.
    #[default]
    Compounding,
    /// Applied once to the final total.
    WholeOrder,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown discount mode {0:?} (expected \"compounding\" or \"whole-order\")")]
pub struct UnknownDiscountMode(pub String);

impl FromStr for DiscountMode {
    type Err = UnknownDiscountMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compounding" => Ok(DiscountMode::Compounding),
            "whole-order" | "whole_order" => Ok(DiscountMode::WholeOrder),
            _ => Err(UnknownDiscountMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PricingEngine {
    mode: DiscountMode,
}

impl PricingEngine {
    pub fn new(mode: DiscountMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DiscountMode {
        self.mode
    }

    /// Total value of `(product, quantity)` lines, in the given order.
    pub fn total<'a>(&self, lines: impl IntoIterator<Item = (&'a Product, u32)>) -> f64 {
        let keep = 1.0 - PREMIUM_DISCOUNT;
        let mut total = 0.0;
        let mut premium_lines = 0;

        for (product, quantity) in lines {
            total += product.price * f64::from(quantity);
            if product.is_premium() {
                premium_lines += 1;
                if self.mode == DiscountMode::Compounding && premium_lines >= PREMIUM_THRESHOLD {
                    total *= keep;
                }
            }
        }

        if self.mode == DiscountMode::WholeOrder && premium_lines >= PREMIUM_THRESHOLD {
            total *= keep;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premium(id: u32, price: f64) -> Product {
        Product::new(id, format!("P{id}"), "Premium", price, 100)
    }

    fn budget(id: u32, price: f64) -> Product {
        Product::new(id, format!("B{id}"), "Budget", price, 100)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn plain_sum_without_premium_lines() {
        let (a, b) = (budget(1, 200.0), budget(2, 150.0));
        let total = PricingEngine::default().total([(&a, 2), (&b, 1)]);
        assert!(approx(total, 550.0));
    }

    #[test]
    fn two_premium_lines_get_no_discount() {
        let (p1, p2, b) = (premium(1, 100.0), premium(2, 100.0), budget(3, 200.0));
        for mode in [DiscountMode::Compounding, DiscountMode::WholeOrder] {
            let total = PricingEngine::new(mode).total([(&p1, 1), (&b, 3), (&p2, 2)]);
            assert!(approx(total, 900.0), "{mode:?}: {total}");
        }
    }

    #[test]
    fn third_premium_line_discounts_running_total() {
        let (p1, p2, p3) = (premium(1, 100.0), premium(2, 100.0), premium(3, 90.0));
        let total = PricingEngine::default().total([(&p1, 1), (&p2, 1), (&p3, 1)]);
        // 290 before discount
        assert!(approx(total, 261.0), "{total}");
    }

    #[test]
    fn lines_after_the_threshold_line_are_added_at_full_price() {
        let (p1, p2, p3, b) = (
            premium(1, 100.0),
            premium(2, 100.0),
            premium(3, 100.0),
            budget(4, 50.0),
        );
        // Budget line first: it is part of the running total when the third
        // premium line arrives, so it is discounted too.
        let before = PricingEngine::default().total([(&b, 1), (&p1, 1), (&p2, 1), (&p3, 1)]);
        assert!(approx(before, 315.0), "{before}");

        // Budget line after the threshold line: added undiscounted.
        let after = PricingEngine::default().total([(&p1, 1), (&p2, 1), (&p3, 1), (&b, 1)]);
        assert!(approx(after, 320.0), "{after}");
    }

    #[test]
    fn compounding_reapplies_on_every_later_premium_line() {
        let lines: Vec<Product> = (1..=4).map(|id| premium(id, 100.0)).collect();
        let priced = lines.iter().map(|p| (p, 1));

        let total = PricingEngine::new(DiscountMode::Compounding).total(priced);
        // (300 * 0.9 + 100) * 0.9
        assert!(approx(total, 333.0), "{total}");
    }

    #[test]
    fn whole_order_mode_discounts_once() {
        let lines: Vec<Product> = (1..=4).map(|id| premium(id, 100.0)).collect();
        let priced = lines.iter().map(|p| (p, 1));

        let total = PricingEngine::new(DiscountMode::WholeOrder).total(priced);
        assert!(approx(total, 360.0), "{total}");
    }

    #[test]
    fn discount_mode_parses_from_config_strings() {
        assert_eq!("compounding".parse::<DiscountMode>(), Ok(DiscountMode::Compounding));
        assert_eq!(" Whole-Order ".parse::<DiscountMode>(), Ok(DiscountMode::WholeOrder));
        assert_eq!(
            "once".parse::<DiscountMode>(),
            Err(UnknownDiscountMode("once".to_string()))
        );
    }
}
