//! Interactive dream journal console.
//!
//! # Responsibility
//! - Collect user input, invoke the core service, render results.
//! - Perform boundary validation: empty dream text and empty symbol
//!   name/meaning are rejected with a soft message before reaching core.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use dreamvista_core::{
    core_version, default_log_level, init_logging, split_keywords, AnalyzeOptions, DreamService,
    NewSymbol, SymbolMatch,
};
use log::info;

#[derive(Parser)]
#[command(
    name = "dreamvista",
    version,
    about = "Dream journal and interpretation console"
)]
struct Args {
    /// Path of the JSON backing document.
    #[arg(long, default_value = "dream_vista_data.json")]
    data_file: PathBuf,

    /// Directory for rolling log files; file logging stays off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

type Lines = io::Lines<io::StdinLock<'static>>;

fn main() {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    info!(
        "event=app_start module=cli status=ok version={} data_file={}",
        core_version(),
        args.data_file.display()
    );

    println!("DreamVista {} - dream interpretation companion", core_version());
    let mut service = DreamService::open(&args.data_file);
    let mut lines = io::stdin().lock().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Enter your choice (1-5): ") else {
            break;
        };
        match choice.as_str() {
            "1" => interpret(&mut service, &mut lines),
            "2" => add_symbol(&mut service, &mut lines),
            "3" => show_statistics(&service),
            "4" => search(&service, &mut lines),
            "5" => {
                println!("Sweet dreams!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("Main menu:");
    println!("  1. Interpret a dream");
    println!("  2. Add a custom symbol");
    println!("  3. View dream statistics");
    println!("  4. Search dreams by symbol");
    println!("  5. Exit");
}

/// Reads one trimmed input line; `None` means stdin is closed.
fn prompt(lines: &mut Lines, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

fn interpret(service: &mut DreamService, lines: &mut Lines) {
    let Some(dream_text) = prompt(lines, "Describe your dream: ") else {
        return;
    };
    if dream_text.is_empty() {
        println!("Please describe your dream!");
        return;
    }

    let mood_before = prompt(lines, "Mood before sleep (optional): ")
        .filter(|mood| !mood.is_empty());
    let recurring = prompt(lines, "Recurring dream? (y/N): ")
        .map(|answer| answer.eq_ignore_ascii_case("y"))
        .unwrap_or(false);

    let options = AnalyzeOptions {
        persist: true,
        mood_before,
        recurring,
    };
    let matches = service.analyze_dream_with(&dream_text, &options);
    render_matches(&matches);
}

fn render_matches(matches: &[SymbolMatch]) {
    if matches.is_empty() {
        println!("No specific symbols found in your dream.");
        println!("Try describing your dream with more detail!");
        return;
    }

    println!();
    println!("Dream interpretation results:");
    for (index, matched) in matches.iter().enumerate() {
        let symbol = &matched.symbol;
        println!("[{}] Symbol: {}", index + 1, symbol.symbol.to_uppercase());
        println!("    Category: {}", symbol.category);
        println!("    Meaning: {}", symbol.meaning);
        println!("    Emotional tone: {}", symbol.emotional_tone);
        println!(
            "    Relevance: {}",
            "*".repeat(usize::from(matched.relevance / 2))
        );
    }
}

fn add_symbol(service: &mut DreamService, lines: &mut Lines) {
    println!();
    println!("Add a new symbol");
    let Some(symbol) = prompt(lines, "Symbol name: ") else {
        return;
    };
    let Some(meaning) = prompt(lines, "Meaning: ") else {
        return;
    };
    if symbol.is_empty() || meaning.is_empty() {
        println!("Symbol name and meaning are required.");
        return;
    }
    let emotional_tone = prompt(lines, "Emotional tone: ").unwrap_or_default();
    let category = prompt(lines, "Category: ").unwrap_or_default();
    let keywords = prompt(lines, "Keywords (comma-separated): ")
        .map(|raw| split_keywords(&raw))
        .unwrap_or_default();

    let request = NewSymbol {
        symbol: symbol.clone(),
        meaning,
        emotional_tone,
        category,
        keywords,
    };
    match service.add_symbol(&request) {
        Ok(_) => println!("Symbol '{symbol}' added successfully!"),
        Err(err) => println!("Could not add symbol: {err}."),
    }
}

fn show_statistics(service: &DreamService) {
    let stats = service.statistics();

    println!();
    println!("Dream statistics");
    println!("Total dreams recorded: {}", stats.total_dreams);

    if stats.common_symbols.is_empty() {
        println!("No symbols matched yet.");
        return;
    }

    println!("Most common symbols:");
    for entry in &stats.common_symbols {
        println!("  - {}: {} times", entry.symbol, entry.frequency);
    }
    println!("Emotional tone distribution:");
    for entry in &stats.emotional_tones {
        println!("  - {}: {}", entry.emotional_tone, entry.count);
    }
}

fn search(service: &DreamService, lines: &mut Lines) {
    let Some(symbol) = prompt(lines, "Enter symbol to search: ") else {
        return;
    };
    if symbol.is_empty() {
        println!("Please enter a symbol to search.");
        return;
    }

    let hits = service.search_by_symbol(&symbol);
    if hits.is_empty() {
        println!("No dreams found with symbol '{symbol}'.");
        return;
    }

    println!("Found {} dreams with '{symbol}':", hits.len());
    for hit in hits.iter().take(5) {
        println!();
        println!("  Date: {}", hit.dream.dream_date);
        println!("  Dream: {}", preview(&hit.dream.dream_text));
    }
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 100;
    if text.chars().count() <= MAX_CHARS {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(MAX_CHARS).collect();
    clipped.push_str("...");
    clipped
}
