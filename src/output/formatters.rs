//! Formatting utilities for terminal output

use crate::commands::FailedAttempt;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: the ratio is clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Length of a histogram bar scaled against the largest bucket
///
/// A non-zero count always gets at least one cell.
#[must_use]
pub fn histogram_bar_len(count: usize, max_count: usize, width: usize) -> usize {
    if max_count == 0 {
        0
    } else {
        (count * width / max_count).max(usize::from(count > 0))
    }
}

/// One diagnostic line per failed attempt: `answer: reason [g1, g2, ...]`
#[must_use]
pub fn format_failure(failure: &FailedAttempt) -> String {
    format!(
        "{}: {} [{}]",
        failure.answer,
        failure.reason,
        failure.guesses.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolveError;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn histogram_bar_scales_to_largest() {
        assert_eq!(histogram_bar_len(10, 10, 40), 40);
        assert_eq!(histogram_bar_len(5, 10, 40), 20);
        assert_eq!(histogram_bar_len(1, 1000, 40), 1);
        assert_eq!(histogram_bar_len(0, 10, 40), 0);
        assert_eq!(histogram_bar_len(0, 0, 40), 0);
    }

    #[test]
    fn failure_line_lists_guesses() {
        let failure = FailedAttempt {
            answer: "ghost".to_string(),
            guesses: vec!["salet".to_string(), "crane".to_string()],
            reason: SolveError::ExhaustedCandidates { round: 3 },
        };
        assert_eq!(
            format_failure(&failure),
            "ghost: no candidates left in round 3 [salet, crane]"
        );
    }
}
