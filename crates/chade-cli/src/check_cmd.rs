use chade::RoundTripReport;
use chade::chade_core::{check_shift_jis_roundtrip, check_unicode_roundtrip};
use chade::chade_data::EncodingRsCodec;

use crate::cli::SelfCheck;

/// Mismatches listed before the output is cut short.
const MAX_LISTED: usize = 20;

pub fn run(check: SelfCheck) -> Result<(), i32> {
    let report = match check {
        SelfCheck::Utf => check_unicode_roundtrip(),
        SelfCheck::ShiftJis => check_shift_jis_roundtrip(&EncodingRsCodec),
    };
    print!("{}", summarize(&report));
    if report.is_clean() { Ok(()) } else { Err(1) }
}

fn summarize(report: &RoundTripReport) -> String {
    let mut out = format!(
        "Examined {} characters ({} skipped), {} mismatches\n",
        report.checked,
        report.skipped,
        report.mismatches.len()
    );
    for mismatch in report.mismatches.iter().take(MAX_LISTED) {
        out.push_str(&format!(
            "{}: {:04X} {}\n",
            mismatch.codec, mismatch.codepoint, mismatch.detail
        ));
    }
    if report.mismatches.len() > MAX_LISTED {
        out.push_str(&format!("... and {} more\n", report.mismatches.len() - MAX_LISTED));
    }
    out
}
