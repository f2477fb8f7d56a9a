use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use mwl_phonemizer::{Dialect, G2P, PhonemizeOptions};

#[derive(Parser)]
#[command(name = "mwl-phonemize", about = "Transcribe Mirandese text into phonemes")]
struct Args {
    /// Text to phonemize (read from stdin when omitted)
    text: Option<String>,

    /// Dialect: central, raiano or sendinese
    #[arg(short, long, default_value = "central")]
    dialect: String,

    /// Skip the exception lexicon and use the rules only
    #[arg(long)]
    no_lookup: bool,

    /// Drop optional phones instead of keeping their content
    #[arg(long)]
    drop_optional: bool,

    /// Keep stress marks and syllable boundaries from the lexicon
    #[arg(long)]
    keep_stress: bool,

    /// Print the token breakdown as JSON
    #[arg(long)]
    tokens: bool,
}

fn run(args: Args) -> mwl_phonemizer::Result<()> {
    let dialect: Dialect = args.dialect.parse()?;
    let options = PhonemizeOptions::default()
        .with_word_lookup(!args.no_lookup)
        .with_optional_phones(!args.drop_optional)
        .with_stress_marks(args.keep_stress);

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let g2p = G2P::new(dialect).with_options(options);
    if args.tokens {
        let (_, tokens) = g2p.phonemize_tokens(&text);
        let words: Vec<_> = tokens.into_iter().filter(|tk| tk.is_word()).collect();
        let json = serde_json::to_string_pretty(&words).map_err(io::Error::other)?;
        println!("{json}");
    } else {
        println!("{}", g2p.phonemize(&text));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
