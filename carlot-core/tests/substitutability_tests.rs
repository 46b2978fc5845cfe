//! Integration tests: the client takes one code path for every factory.

use std::sync::{Arc, Mutex};

use carlot_core::{upgrade_message, CarFactory, Client, FamilyCar, Price, SportsCar};

type CallLog = Arc<Mutex<Vec<&'static str>>>;

fn record(log: &CallLog, call: &'static str) {
    log.lock().unwrap().push(call);
}

#[derive(Debug)]
struct RecordingSports {
    log: CallLog,
    price: Price,
}

impl SportsCar for RecordingSports {
    fn price(&self) -> Price {
        record(&self.log, "sports.price");
        self.price
    }
}

#[derive(Debug)]
struct RecordingFamily {
    log: CallLog,
    price: Price,
}

impl FamilyCar for RecordingFamily {
    fn price(&self) -> Price {
        record(&self.log, "family.price");
        self.price
    }

    fn upgrade_cost(&self, other: &dyn SportsCar) -> String {
        record(&self.log, "family.upgrade_cost");
        upgrade_message(other.price() - self.price)
    }
}

#[derive(Debug)]
struct RecordingFactory {
    log: CallLog,
    sports_price: Price,
    family_price: Price,
}

impl RecordingFactory {
    fn new(sports: i64, family: i64) -> Self {
        Self {
            log: Arc::default(),
            sports_price: Price::dollars(sports),
            family_price: Price::dollars(family),
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.log.lock().unwrap().clone()
    }
}

impl CarFactory for RecordingFactory {
    fn make_sports_car(&self) -> Box<dyn SportsCar> {
        record(&self.log, "make_sports_car");
        Box::new(RecordingSports {
            log: Arc::clone(&self.log),
            price: self.sports_price,
        })
    }

    fn make_family_car(&self) -> Box<dyn FamilyCar> {
        record(&self.log, "make_family_car");
        Box::new(RecordingFamily {
            log: Arc::clone(&self.log),
            price: self.family_price,
        })
    }
}

#[test]
fn test_client_call_sequence_is_fixed() {
    let factory = RecordingFactory::new(26960, 22050);
    Client::new().run(&factory);

    assert_eq!(
        factory.calls(),
        vec![
            "make_sports_car",
            "make_family_car",
            "family.price",
            "family.upgrade_cost",
            "sports.price",
        ]
    );
}

#[test]
fn test_client_sequence_identical_across_factories() {
    let first = RecordingFactory::new(26960, 22050);
    let second = RecordingFactory::new(27205, 22100);

    let a = Client::new().run(&first);
    let b = Client::new().run(&second);

    assert_eq!(first.calls(), second.calls());
    assert_ne!(a, b, "only the reported values should differ");
}

#[test]
fn test_client_renders_negative_delta_as_is() {
    let factory = RecordingFactory::new(20000, 24910);
    let report = Client::new().run(&factory);
    assert!(report.upgrade_message.ends_with("$-4910"));
}
