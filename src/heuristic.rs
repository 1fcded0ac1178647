/// Fewer samples than this cannot be told apart from normal posting.
pub const MIN_SAMPLES: usize = 7;

/// Average spacing under 6 hours across the recent series reads as
/// automated posting cadence.
pub const BOT_GAP_THRESHOLD_SECS: i64 = 6 * 3600;

/// Classify a post-timestamp series (epoch seconds, most-recent-first) as
/// bot-like. Pure and deterministic.
///
/// The divisor is the full series length, not the gap count; cached
/// `is_bot` flags were produced with this exact ratio, so it stays.
pub fn classify(timestamps: &[i64]) -> bool {
    if timestamps.len() < MIN_SAMPLES {
        return false;
    }

    let mut gap_sum: i64 = 0;
    for pair in timestamps.windows(2) {
        gap_sum += pair[0] - pair[1];
    }

    let mean_gap = gap_sum / timestamps.len() as i64;
    mean_gap < BOT_GAP_THRESHOLD_SECS
}
