#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;
use playbill::core::*;

fuzz_target!(|data: &[u8]| {
    // First four bytes: audience. Remainder: the play's genre string.
    if data.len() < 4 {
        return;
    }
    let audience = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let genre = String::from_utf8_lossy(&data[4..]).into_owned();

    let plays = HashMap::from([("play".to_string(), Play::new("Fuzzed", genre))]);
    let invoice = Invoice {
        customer: "Fuzz".into(),
        performances: vec![Performance::new("play", audience)],
    };

    // Rendering must not panic, and totals must agree with the engine.
    if let Ok(statement) = Statement::compute(&invoice, &plays, &PricingRules::default()) {
        let amount = calculate_amount(&invoice.performances[0], &plays["play"]).unwrap();
        assert_eq!(statement.total_amount, amount);
        let _ = statement.to_text();
    }
});
