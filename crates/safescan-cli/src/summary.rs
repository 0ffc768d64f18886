use console::Style;
use safescan_core::display::{ResultView, ScoreBar};
use safescan_core::label::Label;

const BAR_WIDTH: usize = 30;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    track: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            track: Style::new().dim(),
        }
    }
}

/// Terminal colour closest to a label's palette colour.
fn label_style(label: Label) -> Style {
    match label {
        Label::Safe => Style::new().green(),
        Label::NsfwMild => Style::new().yellow(),
        Label::NsfwExplicit => Style::new().red(),
    }
}

/// Verdict style follows the category's label; unknown verdicts stay neutral.
fn verdict_style(view: &ResultView) -> Style {
    match view.category.label() {
        Some(label) => label_style(label).bold(),
        None => Style::new().bold().white(),
    }
}

fn render_bar(s: &Styles, bar: &ScoreBar) -> String {
    let filled = ((bar.width_fraction() * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!(
        "{}{}",
        label_style(bar.label).apply_to("\u{2588}".repeat(filled)),
        s.track.apply_to("\u{2591}".repeat(BAR_WIDTH - filled))
    )
}

pub fn print_result(name: &str, view: &ResultView) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("SafeScan Result"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();
    println!("  {:<10}{}", s.label.apply_to("Image"), s.value.apply_to(name));
    println!(
        "  {:<10}{}",
        s.label.apply_to("Verdict"),
        verdict_style(view).apply_to(&view.verdict)
    );
    println!("  {:<10}{}", "", s.label.apply_to(&view.confidence_text));
    println!();

    for bar in &view.bars {
        println!(
            "  {:<10}{} {:>6}",
            s.label.apply_to(bar.label.short_name()),
            render_bar(&s, bar),
            s.value.apply_to(&bar.text)
        );
    }
    println!();
}
