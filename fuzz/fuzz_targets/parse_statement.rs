#![no_main]

use libfuzzer_sys::fuzz_target;
use marcholdings::{parse_holdings, to_text, Holding, HoldingsParser, RecoveryMode};

fuzz_target!(|data: &[u8]| {
    let Ok(statement) = std::str::from_utf8(data) else {
        return;
    };

    // Errors are fine; panics are not
    if let Ok(holdings) = parse_holdings(statement) {
        for holding in &holdings {
            let _ = Holding::from_text(&to_text(holding));
        }
    }
    let _ = HoldingsParser::new()
        .with_recovery_mode(RecoveryMode::Permissive)
        .parse_with_context(statement);
});
