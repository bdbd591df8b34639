use clap::{Arg, ArgAction, Command, value_parser};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use wordmt::{
    Translator, TranslatorConfig, load_alignment_memory_from_file, load_corpus_from_file,
    load_corpus_from_parallel_files,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("wordmt")
        .version("0.1.0")
        .about("Suggest translations from a word aligned parallel corpus")
        .arg(
            Arg::new("sentence")
                .help("Source sentence to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .short('c')
                .help("JSON corpus file: [[source, target], ...]"),
        )
        .arg(
            Arg::new("source-text")
                .long("source-text")
                .help("Plain text source side of a line aligned corpus")
                .requires("target-text"),
        )
        .arg(
            Arg::new("target-text")
                .long("target-text")
                .help("Plain text target side of a line aligned corpus")
                .requires("source-text"),
        )
        .arg(
            Arg::new("memory")
                .long("memory")
                .short('m')
                .help("JSON alignment memory file: [{\"source\": ..., \"target\": ...}, ...]"),
        )
        .arg(
            Arg::new("suggestions")
                .long("suggestions")
                .short('n')
                .help("Number of suggestions (default: WORDMT_MAX_SUGGESTIONS or 1)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("ngram-length")
                .long("ngram-length")
                .help("Longest n-gram to align (default: WORDMT_MAX_NGRAM_LENGTH or 3)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show what was loaded and debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .short('t')
                .help("Print the prediction table instead of suggestions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print output as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let default_directive = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_directive.parse()?),
        )
        .init();

    let sentence = matches
        .get_one::<String>("sentence")
        .ok_or("Missing sentence")?;

    let mut config = TranslatorConfig::from_env()?;
    if let Some(&length) = matches.get_one::<usize>("ngram-length") {
        config.engine.max_ngram_length = length;
    }
    if let Some(&count) = matches.get_one::<usize>("suggestions") {
        config.max_suggestions = count;
    }

    let mut translator = Translator::with_config(config)?;

    // 1. Load corpus
    if let Some(path) = matches.get_one::<String>("corpus") {
        let corpus = load_corpus_from_file(Path::new(path))?;
        if verbose {
            println!("📚 Loaded {} sentence pairs from {}", corpus.len(), path);
        }
        translator.append_corpus(&corpus);
    }
    if let (Some(source), Some(target)) = (
        matches.get_one::<String>("source-text"),
        matches.get_one::<String>("target-text"),
    ) {
        let corpus = load_corpus_from_parallel_files(Path::new(source), Path::new(target))?;
        if verbose {
            println!(
                "📚 Loaded {} sentence pairs from {} / {}",
                corpus.len(),
                source,
                target
            );
        }
        translator.append_corpus(&corpus);
    }

    // 2. Load alignment memory
    if let Some(path) = matches.get_one::<String>("memory") {
        let memory = load_alignment_memory_from_file(Path::new(path))?;
        if verbose {
            println!("🧠 Loaded {} approved alignments from {}", memory.len(), path);
        }
        for entry in &memory {
            if let Err(e) = translator.append_alignment_memory_from_text(&entry.source, &entry.target)
            {
                eprintln!("⚠️  Skipping alignment {:?} -> {:?}: {}", entry.source, entry.target, e);
            }
        }
    }

    if verbose {
        println!("📝 Source: \"{}\"", sentence);
        println!();
    }

    // 3. Translate
    let max_suggestions = translator.default_max_suggestions();
    if matches.get_flag("table") {
        let table = translator.translate_verbose(sentence, max_suggestions)?;
        if matches.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&table)?);
        } else {
            for entry in &table {
                let predictions: Vec<String> =
                    entry.predictions.iter().map(|p| p.to_string()).collect();
                println!("{}\t{}", entry.key, predictions.join(" "));
            }
        }
        return Ok(());
    }

    let suggestions = translator.translate_default(sentence)?;
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else if suggestions.is_empty() {
        eprintln!("No suggestions: nothing in the sentence is known");
    } else {
        for suggestion in &suggestions {
            println!("{}", suggestion);
        }
    }

    Ok(())
}
