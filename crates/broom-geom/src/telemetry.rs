// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// Telemetry helpers for JSONL logging when the `telemetry` feature is
// enabled. Manually formats JSON to avoid a serde_json dependency; the
// emitted lines are fully determined by the counters, so identical runs
// produce identical output.

use std::io::Write as _;

// Best-effort: I/O errors are ignored, telemetry must never fail a caller.
fn emit(event: &str, boxes: usize, candidates: [usize; 2], pairs: usize, extra: &str) {
    let mut out = std::io::stdout().lock();
    let _ = write!(
        out,
        r#"{{"event":"{event}","boxes":{boxes},"candidates_x":{},"candidates_y":{},"pairs":{pairs}{extra}}}"#,
        candidates[0], candidates[1],
    );
    let _ = out.write_all(b"\n");
}

/// Emits one event after a full detection pass.
pub(crate) fn detect(boxes: usize, candidates: [usize; 2], pairs: usize) {
    emit("detect", boxes, candidates, pairs, "");
}

/// Emits one event after an incremental update, recording whether the
/// overlap set changed.
pub(crate) fn update(boxes: usize, candidates: [usize; 2], pairs: usize, changed: bool) {
    let extra = if changed {
        r#","changed":true"#
    } else {
        r#","changed":false"#
    };
    emit("update", boxes, candidates, pairs, extra);
}
