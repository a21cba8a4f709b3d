use std::collections::HashMap;

use playbill::core::*;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=playbill=trace shows each priced performance
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    let plays = HashMap::from([
        ("hamlet".to_string(), Play::new("Hamlet", "tragedy")),
        ("as-like".to_string(), Play::new("As You Like It", "comedy")),
        ("othello".to_string(), Play::new("Othello", "tragedy")),
        ("henry-v".to_string(), Play::new("Henry V", "history")),
    ]);

    // ── 1. A valid invoice ────────────────────────────────────────────
    let invoice = InvoiceBuilder::new("BigCo")
        .performance("hamlet", 55)
        .performance("as-like", 35)
        .performance("othello", 40)
        .build(&plays)
        .unwrap();

    match render_statement(&invoice, &plays) {
        Ok(text) => print!("{text}"),
        Err(e) => eprintln!("Statement failed: {e}"),
    }

    // ── 2. Validation reports every problem at once ───────────────────
    println!("\n=== Validation Errors ===");
    let broken = InvoiceBuilder::new("SmallCo")
        .performance("macbeth", 20)
        .performance("henry-v", 53)
        .build_unchecked()
        .unwrap();
    for e in validate_invoice(&broken, &plays) {
        println!("  {e}");
    }

    // ── 3. Rendering aborts on the first bad performance ──────────────
    println!("\n=== Render Error ===");
    match render_statement(&broken, &plays) {
        Ok(text) => print!("{text}"),
        Err(e) => println!("  {e}"),
    }
}
