use daypulse_core::advice::{parse_advice, Block, Span};
use daypulse_core::charts::{radar_points, series_lines, series_rows, stat_cards};
use daypulse_core::dashboard::{
    DashboardData, NO_ADVICE_MESSAGE, NO_ENTRIES_MESSAGE, NO_TRENDS_MESSAGE,
};
use daypulse_core::domain::{AdviceOutput, Category, RawInput};
use daypulse_core::journal::{teaser, EntryView};
use daypulse_core::time::display_date;
use serde_json::json;

pub fn print_dashboard(user: &str, data: &DashboardData) {
    let title = format!("Dashboard for {user}");
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));

    print_snapshot(data);
    print_stats(data);
    print_series(data);
    print_advice(data);
    print_journal(data);
}

/// The same view data the text renderer draws from, as one JSON document.
pub fn json_payload(data: &DashboardData) -> serde_json::Value {
    json!({
        "latest": data.latest_notation.as_ref().map(|n| json!({
            "date": n.date,
            "radar": radar_points(n),
        })),
        "stats": stat_cards(&data.stats),
        "series": {
            "lines": series_lines(),
            "rows": series_rows(&data.history),
        },
        "advice": data.advice.as_ref().map(|a| json!({
            "date": a.date,
            "blocks": parse_advice(&a.output),
        })),
        "journal": data.journal.entries(),
    })
}

fn print_snapshot(data: &DashboardData) {
    let Some(latest) = &data.latest_notation else {
        return;
    };

    println!("\nToday's scores ({})", latest.date);
    for point in radar_points(latest) {
        match point.value {
            Some(v) => println!("  {:<10} {v:>2}/{}", point.category, point.full_mark),
            None => println!("  {:<10}  -", point.category),
        }
    }
}

fn print_stats(data: &DashboardData) {
    let cards = stat_cards(&data.stats);
    if cards.is_empty() {
        return;
    }

    println!("\nLast 30 days");
    for card in cards {
        println!(
            "  {:<16} avg {:>4}  min {}  max {}  trend {}",
            card.label, card.average, card.min, card.max, card.trend
        );
    }
}

fn print_series(data: &DashboardData) {
    println!("\nTrends");
    if !data.has_trends() {
        println!("  {NO_TRENDS_MESSAGE}");
        return;
    }

    let lines = series_lines();
    let header: Vec<&str> = lines.iter().map(|l| l.key).collect();
    println!("  {:<6} {}", "date", header.join(" "));

    for row in series_rows(&data.history) {
        let cells: Vec<String> = lines
            .iter()
            .zip(row.values.iter())
            .map(|(line, v)| {
                let cell = v.map_or_else(|| "-".to_string(), |v| v.to_string());
                format!("{cell:>width$}", width = line.key.len())
            })
            .collect();
        println!("  {:<6} {}", row.date, cells.join(" "));
    }
}

fn print_advice(data: &DashboardData) {
    println!("\nAI recommendation");
    let Some(advice) = &data.advice else {
        println!("  {NO_ADVICE_MESSAGE}");
        return;
    };

    print!("{}", advice_text(&parse_advice(&advice.output)));
    println!("  (generated {})", display_date(&advice.date));
}

fn advice_text(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { text } => {
                out.push_str(&format!("  {text}\n  {}\n", "-".repeat(text.chars().count())));
            }
            Block::Paragraph { spans } => {
                out.push_str("  ");
                for span in spans {
                    match span {
                        Span::Plain(text) => out.push_str(text),
                        Span::Emphasis(text) => out.push_str(&format!("*{text}*")),
                    }
                }
                out.push('\n');
            }
        }
    }
    out
}

fn print_journal(data: &DashboardData) {
    println!("\nJournal");
    if data.journal.is_empty() {
        println!("  {NO_ENTRIES_MESSAGE}");
        return;
    }

    for index in 0..data.journal.len() {
        match data.journal.view(index) {
            Some(EntryView::Collapsed { date, teaser }) => {
                println!("  {} | {teaser}", display_date(date));
            }
            Some(EntryView::Expanded { date, fields }) => {
                println!("  {}", display_date(date));
                for (label, text) in fields {
                    println!("    {label}: {text}");
                }
            }
            None => {}
        }
    }
}

/// Full seven-field view of a single entry (the `--latest` mode).
pub fn print_entry(entry: &RawInput) {
    println!("{}", display_date(&entry.date));
    for category in Category::ALL {
        println!("  {}: {}", category.label(), entry.field(category));
    }
}

pub fn print_journal_list(entries: &[RawInput]) {
    if entries.is_empty() {
        println!("{NO_ENTRIES_MESSAGE}");
        return;
    }
    for entry in entries {
        println!(
            "{} | {}",
            display_date(&entry.date),
            teaser(entry.field(Category::Spiritual))
        );
    }
}

pub fn print_advice_log(history: &[AdviceOutput]) {
    if history.is_empty() {
        println!("{NO_ADVICE_MESSAGE}");
        return;
    }
    for (i, advice) in history.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", display_date(&advice.date));
        print!("{}", advice_text(&parse_advice(&advice.output)));
    }
}
