use clap::Parser;
use crossterm::style::Stylize;
use dialect_core::persistence::DEFAULT_LEXICON_PATH;
use dialect_core::trace_init::init_tracing;
use dialect_core::{Analysis, DialectEngine};
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tunisian_engine", about = "Tunisian Arabizi transliteration and cultural tagging")]
struct Cli {
    /// Cultural lexicon JSON file (created with seed data if missing)
    #[arg(long, default_value = DEFAULT_LEXICON_PATH)]
    lexicon: PathBuf,
    /// Print each analysis as JSON
    #[arg(long)]
    json: bool,
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let engine = DialectEngine::from_file_or_seed(&cli.lexicon);

    println!("{}", "Tunisian dialect engine. Type 'exit' to quit.".bold());
    println!("Commands: :enrich  :list  :norm <text>  :ctx category|name");
    println!("          :add category|name|meaning|context|var1,var2");
    println!("---------------------------------------------------------------");

    let mut out = stdout();
    print!("> ");
    out.flush()?;
    for line in stdin().lock().lines() {
        let input = line?;
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {}
            ":enrich" => report(engine.tagger().enrich_lexicon(), "lexicon enriched"),
            ":list" => print_lexicon(&engine),
            s if s.starts_with(":norm ") => {
                println!("{}", engine.transliterator().normalize_tunisian_text(&s[6..]));
            }
            s if s.starts_with(":ctx ") => print_context(&engine, &s[5..]),
            s if s.starts_with(":add ") => add_entity(&engine, &s[5..]),
            s if s.starts_with(':') => println!("{} unknown command '{}'", "!".red(), s),
            s => {
                let analysis = engine.analyze(s);
                if cli.json {
                    match serde_json::to_string_pretty(&analysis) {
                        Ok(json) => println!("{json}"),
                        Err(e) => eprintln!("[ERROR] Could not encode analysis: {e}"),
                    }
                } else {
                    print_analysis(&analysis);
                }
            }
        }
        print!("> ");
        out.flush()?;
    }

    if let Some(path) = engine.tagger().lexicon_path() {
        println!("\nLexicon kept at '{}'", path.display());
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    let mix = &analysis.script_mix;
    println!(
        "{} {} (arabic {:.1}%, latin {:.1}%{})",
        "Script:".cyan(),
        mix.primary_script,
        mix.arabic_percent,
        mix.latin_percent,
        if mix.is_mixed { ", mixed" } else { "" }
    );
    println!("{} {}", "Transliteration ->".cyan(), analysis.transliteration);

    if analysis.entities.is_empty() {
        println!("\nNo cultural entities found.");
    }
    for suggestion in &analysis.suggestions {
        println!("  {} {}", "*".green(), suggestion);
    }
    if let Some(explanation) = &analysis.explanation {
        println!("\n{explanation}");
    }
}

fn print_lexicon(engine: &DialectEngine) {
    for (category, entities) in engine.tagger().lexicon_snapshot().categories() {
        println!("{}", category.bold());
        for (name, record) in entities {
            println!("  {} - {}", name, record.meaning);
        }
    }
}

fn print_context(engine: &DialectEngine, args: &str) {
    let Some((category, name)) = args.split_once('|') else {
        println!("usage: :ctx category|name");
        return;
    };
    match engine.tagger().get_cultural_context(name.trim(), category.trim()) {
        Some(record) => {
            println!("{}: {}", "Meaning".cyan(), record.meaning);
            println!("{}: {}", "Context".cyan(), record.context);
            if !record.variations.is_empty() {
                println!("{}: {}", "Variations".cyan(), record.variations.join(", "));
            }
        }
        None => println!("No context for '{}' in '{}'", name.trim(), category.trim()),
    }
}

fn add_entity(engine: &DialectEngine, args: &str) {
    let fields: Vec<&str> = args.split('|').map(str::trim).collect();
    let [category, name, meaning, context, rest @ ..] = fields.as_slice() else {
        println!("usage: :add category|name|meaning|context|var1,var2");
        return;
    };
    let variations: Vec<String> = rest
        .first()
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();
    report(
        engine
            .tagger()
            .add_cultural_entity(category, name, meaning, context, variations),
        "entity saved",
    );
}

fn report(ok: bool, what: &str) {
    if ok {
        println!("{} {}", "ok".green(), what);
    } else {
        println!("{} {} failed (see log)", "!".red(), what);
    }
}
