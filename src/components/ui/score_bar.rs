use leptos::prelude::*;

/// Width style for the bar fill. The engine contract bounds scores to 0..100,
/// so the clamp only protects the markup, not the displayed number.
fn fill_style(score: f64) -> String {
    let width = score.clamp(0.0, 100.0);
    format!("width: {width}%")
}

/// Horizontal match-score bar with the score printed alongside.
#[component]
pub fn ScoreBar(score: f64) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="h-2.5 flex-1 rounded-full bg-gray-200">
                <div
                    class="h-2.5 rounded-full bg-gradient-to-r from-blue-500 to-green-500"
                    style=fill_style(score)
                ></div>
            </div>
            <span class="text-sm font-medium text-gray-700">{format!("{score}%")}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::fill_style;

    #[test]
    fn in_range_scores_map_to_percent_widths() {
        assert_eq!(fill_style(87.0), "width: 87%");
        assert_eq!(fill_style(0.0), "width: 0%");
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(fill_style(130.0), "width: 100%");
        assert_eq!(fill_style(-5.0), "width: 0%");
    }
}
