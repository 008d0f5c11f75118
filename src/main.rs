//! glosa - Render editorial markup as plain text

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;

use glosa::{Locale, MarkupNode, RenderContext, parse_markup_bytes, render, shorten};

#[derive(Parser)]
#[command(name = "glosa")]
#[command(version, about = "Render editorial markup as plain text", long_about = None)]
#[command(after_help = "EXAMPLES:
    glosa letter.xml                 Render with straight quotes
    glosa -l de letter.xml           Render with German quotation marks
    glosa -l en -n 80 letter.xml     Render an 80-character teaser
    glosa --fragments letter.xml     Show the rendered fragments as JSON")]
struct Cli {
    /// Input file (XML), or - for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Locale for quotation marks (de, en; anything else uses straight quotes)
    #[arg(short, long, env = "GLOSA_LOCALE", default_value = "")]
    locale: String,

    /// Shorten the output to about this many characters
    #[arg(short = 'n', long, value_name = "CHARS", conflicts_with_all = ["fragments", "tree"])]
    max_length: Option<usize>,

    /// Print the rendered fragments as a JSON array
    #[arg(long, conflicts_with = "tree")]
    fragments: bool,

    /// Print the parsed markup tree as JSON
    #[arg(long)]
    tree: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let document = load(&cli.input)?;
    let ctx = RenderContext::new(Locale::from_code(&cli.locale));
    log::info!("rendering {} with locale {:?}", cli.input, ctx.locale);

    if cli.tree {
        let json = serde_json::to_string_pretty(&document).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let fragments = render(&document, ctx);

    if cli.fragments {
        let json = serde_json::to_string_pretty(&fragments).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let text = fragments.concat();
    match cli.max_length {
        Some(max_length) => println!("{}", shorten(&text, max_length)),
        None => println!("{text}"),
    }

    Ok(())
}

fn load(input: &str) -> Result<MarkupNode, String> {
    let bytes = if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| format!("stdin: {e}"))?;
        buf
    } else {
        std::fs::read(input).map_err(|e| format!("{input}: {e}"))?
    };

    parse_markup_bytes(&bytes).map_err(|e| format!("{input}: {e}"))
}
