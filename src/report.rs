/// Console report of a cascade
/// One row per trophic level with rounded energies; efficiencies only when revealed

use crate::cascade::Cascade;
use crate::constants::DIAGRAM_TITLE;
use colored::Colorize;

pub fn render_report(cascade: &Cascade, reveal: bool, unit: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", DIAGRAM_TITLE.bold()));
    out.push_str(&format!(
        "☀️  Sun delivers {} {}\n\n",
        format!("{:.0}", cascade.root_energy()).yellow(),
        unit
    ));

    out.push_str(&format!(
        "   {:>3} {:<20} {:>10} {:>11} {:>10} {:>12} {:>14} {:>8}\n",
        "Lvl", "Level", "Input", "Transferred", "Loss", "Respiration", "Decomposition", "Eff(%)"
    ));
    out.push_str(&format!(
        "   {:->3} {:-<20} {:->10} {:->11} {:->10} {:->12} {:->14} {:->8}\n",
        "", "", "", "", "", "", "", ""
    ));

    for level in cascade.display_levels() {
        let efficiency = if reveal {
            format!("{:>8.1}", level.efficiency_percent).cyan()
        } else {
            format!("{:>8}", "?").dimmed()
        };
        out.push_str(&format!(
            "   {:>3} {:<20} {:>10} {} {:>10} {:>12} {:>14} {}\n",
            level.level.ordinal(),
            level.level.profile().display_name,
            level.input,
            format!("{:>11}", level.transferred).green(),
            level.total_loss,
            level.respiration,
            level.decomposition,
            efficiency,
        ));
    }

    let shown = cascade.display_levels();
    let respiration: u64 = shown.iter().map(|l| l.respiration).sum();
    let decomposition: u64 = shown.iter().map(|l| l.decomposition).sum();

    out.push('\n');
    out.push_str(&format!(
        "🔥 Respiration: {} {unit}   🍂 Decomposition: {} {unit}\n",
        respiration, decomposition,
    ));
    if reveal {
        out.push_str(&format!(
            "📉 Overall efficiency: {:.4}% ({:.0} of {:.0} {unit} reach past the apex predator)\n",
            cascade.overall_efficiency_percent(),
            cascade.final_energy(),
            cascade.root_energy(),
        ));
    }

    out
}
