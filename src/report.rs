use chrono::NaiveDateTime;
use posologia::{DoseMode, ExtractResult, Reminder, ScheduleRule, WeekdayMask, rank_reminders};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(result: &ExtractResult, reminders: &[Reminder], reference: NaiveDateTime, color: bool) {
    let palette = ansi::Palette::new(color);
    let lines = result.text.lines().filter(|l| !l.trim().is_empty()).count();
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚕  Processing prescription ({lines} lines)"), ansi::CYAN))
    );

    println!("\n{}", palette.paint("━━━ Medications ━━━", ansi::GRAY));
    if result.medications.is_empty() {
        println!("{}", palette.dim("  No medications recognized"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • Every line was classified as prescription boilerplate");
        println!("  • No extraction pattern matched and the fallbacks found no candidate word");
        println!("\n{}", palette.dim("  Tip: Set POSOLOGIA_DEBUG=1 to see per-line classification details"));
    } else {
        print_medications(result, &palette);
    }

    if !reminders.is_empty() {
        println!("\n{}", palette.paint("━━━ Schedules ━━━", ansi::GRAY));
        for reminder in reminders {
            print_schedule(reminder, &palette);
        }

        println!("\n{}", palette.paint("━━━ Next doses ━━━", ansi::GRAY));
        let ranked = rank_reminders(reminders, reference);
        if ranked.is_empty() {
            println!("{}", palette.dim("  All schedules exhausted"));
        }
        for (reminder, due) in ranked {
            println!(
                "  {} {} {}",
                palette.paint(due.format("%Y-%m-%d %H:%M").to_string(), ansi::YELLOW),
                palette.dim("│"),
                palette.bold(palette.paint(&reminder.medication.name, ansi::GREEN)),
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", result.elapsed), ansi::GREEN));
    println!();
}

fn print_medications(result: &ExtractResult, palette: &ansi::Palette) {
    for (idx, med) in result.medications.iter().enumerate() {
        let latent = if med.latent { palette.dim(" (latent)") } else { String::new() };
        println!(
            "  {} {}{}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(&med.name, ansi::GREEN)),
            latent,
        );
        println!(
            "      {} {}  {} {}  {} {}",
            palette.dim("dose:"),
            palette.paint(med.dosage.as_deref().unwrap_or("-"), ansi::BLUE),
            palette.dim("│ freq:"),
            palette.paint(med.frequency.as_deref().unwrap_or("-"), ansi::BLUE),
            palette.dim("│ duration:"),
            palette.paint(med.duration.as_deref().unwrap_or("-"), ansi::BLUE),
        );
        println!(
            "      {} {}  {} {}",
            palette.dim("rule:"),
            palette.paint(med.rule, ansi::CYAN),
            palette.dim("│ line:"),
            palette.dim(&med.source_line),
        );
    }
}

fn print_schedule(reminder: &Reminder, palette: &ansi::Palette) {
    let rule = &reminder.rule;
    println!(
        "  {} {} {}",
        palette.bold(palette.paint(&reminder.medication.name, ansi::GREEN)),
        palette.dim("│"),
        palette.paint(fmt_cadence(rule), ansi::BLUE),
    );
    println!(
        "      {} {} {} {}{}",
        palette.dim("from:"),
        palette.paint(rule.start_date.to_string(), ansi::YELLOW),
        palette.dim("to:"),
        palette.paint(rule.end_date.to_string(), ansi::YELLOW),
        if rule.skip_days > 0 {
            palette.dim(format!("  (every {} days)", rule.skip_days + 1))
        } else {
            String::new()
        },
    );
    if rule.weekdays != WeekdayMask::all() {
        println!("      {} {}", palette.dim("weekdays:"), palette.paint(fmt_weekdays(rule.weekdays), ansi::YELLOW));
    }
    println!("      {}", palette.dim(&rule.note));
}

fn fmt_cadence(rule: &ScheduleRule) -> String {
    match rule.mode {
        DoseMode::OnceDaily => format!("1x/dia às {}", rule.first_dose.format("%H:%M")),
        DoseMode::TwiceDaily => {
            let times = rule.dose_times();
            let times: Vec<String> = times.iter().map(|t| t.format("%H:%M").to_string()).collect();
            format!("2x/dia às {}", times.join(" e "))
        }
        DoseMode::Periodic => {
            format!("a cada {}h desde {}", rule.interval_hours.unwrap_or(24), rule.first_dose.format("%H:%M"))
        }
    }
}

fn fmt_weekdays(mask: WeekdayMask) -> String {
    const NAMES: &[(WeekdayMask, &str)] = &[
        (WeekdayMask::MONDAY, "seg"),
        (WeekdayMask::TUESDAY, "ter"),
        (WeekdayMask::WEDNESDAY, "qua"),
        (WeekdayMask::THURSDAY, "qui"),
        (WeekdayMask::FRIDAY, "sex"),
        (WeekdayMask::SATURDAY, "sáb"),
        (WeekdayMask::SUNDAY, "dom"),
    ];
    NAMES
        .iter()
        .filter(|(bit, _)| mask.contains(*bit))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(",")
}
