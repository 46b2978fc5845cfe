//! The factory client.
//!
//! A [`Client`] is handed some [`CarFactory`] and asks it for one product of
//! each kind, then reports on them. It is written against the capability
//! traits only, so every factory takes the same code path and only the
//! reported values differ.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::models::Price;
use crate::traits::CarFactory;

// ============================================================================
// Client Report
// ============================================================================

/// What a client observed from one factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientReport {
    /// Price of the family car.
    pub family_price: Price,
    /// The family car's upgrade quote against the sports car.
    pub upgrade_message: String,
}

impl ClientReport {
    /// Returns the two output lines: the price, then the upgrade message.
    pub fn lines(&self) -> [String; 2] {
        [self.family_price.to_string(), self.upgrade_message.clone()]
    }
}

// ============================================================================
// Client
// ============================================================================

/// Runs against any factory without knowing which brand it makes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Client;

impl Client {
    /// Creates a new client.
    pub fn new() -> Self {
        Self
    }

    /// Requests both products from `factory` and reports on them.
    ///
    /// Calls, in order: `make_sports_car`, `make_family_car`, the family
    /// car's `price`, then its `upgrade_cost` with the sports car.
    #[instrument(skip_all)]
    pub fn run(&self, factory: &dyn CarFactory) -> ClientReport {
        let sports = factory.make_sports_car();
        let family = factory.make_family_car();

        let family_price = family.price();
        let upgrade_message = family.upgrade_cost(sports.as_ref());

        debug!(%family_price, "client run complete");

        ClientReport {
            family_price,
            upgrade_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{upgrade_message, FamilyCar, SportsCar};

    #[derive(Debug)]
    struct Roadster;

    impl SportsCar for Roadster {
        fn price(&self) -> Price {
            Price::dollars(30000)
        }
    }

    #[derive(Debug)]
    struct Estate;

    impl FamilyCar for Estate {
        fn price(&self) -> Price {
            Price::dollars(20000)
        }

        fn upgrade_cost(&self, other: &dyn SportsCar) -> String {
            upgrade_message(other.price() - self.price())
        }
    }

    #[derive(Debug)]
    struct TestFactory;

    impl CarFactory for TestFactory {
        fn make_sports_car(&self) -> Box<dyn SportsCar> {
            Box::new(Roadster)
        }

        fn make_family_car(&self) -> Box<dyn FamilyCar> {
            Box::new(Estate)
        }
    }

    #[test]
    fn test_run_reports_family_price_and_upgrade() {
        let report = Client::new().run(&TestFactory);
        assert_eq!(report.family_price, Price::dollars(20000));
        assert_eq!(
            report.upgrade_message,
            "To upgrade it would to a sports car, it would cost $10000"
        );
    }

    #[test]
    fn test_report_lines_order() {
        let report = Client::new().run(&TestFactory);
        let [first, second] = report.lines();
        assert_eq!(first, "20000");
        assert!(second.starts_with("To upgrade"));
    }
}
