use quantumwaste::core::forest::model::DIFFICULTY_SCALE;
use quantumwaste::workflows::simulate::SimulationOutcome;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Renders a simulation outcome for the terminal: the optimized parameters,
/// the difficulty score, and a proportional bar per feature importance.
pub fn render_outcome(outcome: &SimulationOutcome) -> String {
    let mut out = String::new();

    let params = outcome
        .optimized_params
        .iter()
        .map(|p| format!("{:.4}", p))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "Optimized parameters: {}", params);

    let _ = writeln!(
        out,
        "Recycling difficulty: {:.2} / {:.0}  (0 = easy to recycle, {:.0} = extremely difficult)",
        outcome.recycling_difficulty, DIFFICULTY_SCALE, DIFFICULTY_SCALE
    );

    let _ = writeln!(out, "Feature importance:");
    let max_weight = outcome
        .feature_importances
        .values()
        .cloned()
        .fold(0.0_f64, f64::max);
    let name_width = outcome
        .feature_importances
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0);

    for (name, &weight) in &outcome.feature_importances {
        let filled = if max_weight > 0.0 {
            ((weight / max_weight) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {:<width$}  {:<bar$}  {:.3}",
            name,
            "█".repeat(filled),
            weight,
            width = name_width,
            bar = BAR_WIDTH,
        );
    }

    out
}
