use rushprobe_core::detect::{ChangeOutcome, RepeatOutcome};
use rushprobe_core::histogram::{MoveHistogram, MoveStats};
use rushprobe_core::model::Sample;

pub fn format_initial_text(first: &Sample) -> String {
    format!("Initial result: {}\n", first.value())
}

pub fn format_change_text(outcome: &ChangeOutcome) -> String {
    match outcome {
        ChangeOutcome::Changed {
            requests_since_first,
            current,
            ..
        } => format!(
            "\nResult changed after {requests_since_first} request(s)!\nNew result: {}\n",
            current.value()
        ),
        ChangeOutcome::Unchanged { attempts, .. } => {
            format!("\nNo change after {attempts} requests\n")
        }
    }
}

pub fn format_repeat_text(outcome: &RepeatOutcome) -> String {
    match outcome {
        RepeatOutcome::Repeated {
            first_seen,
            repeated_at,
            gap,
            sample,
        } => format!(
            "\nResult repeated! First seen at request {first_seen}, seen again at request {repeated_at} ({gap} request(s) apart)\n\
             Fingerprint: {}\nRepeated result: {}\n",
            sample.fingerprint(),
            sample.value()
        ),
        RepeatOutcome::AllUnique { attempts, unique } => {
            format!("\nNo repeat after {attempts} requests ({unique} unique results)\n")
        }
    }
}

pub fn format_distribution_text(histogram: &MoveHistogram) -> String {
    let mut out = String::from("Move distribution:\n");
    for (moves, count) in histogram.sorted_counts() {
        out.push_str(&format!("  {moves} moves: {count} boards\n"));
    }
    out
}

pub fn format_stats_text(stats: &MoveStats) -> String {
    format!(
        "Statistics:\n  Min moves: {}\n  Max moves: {}\n  Average moves: {:.2}\n",
        stats.min, stats.max, stats.mean
    )
}
