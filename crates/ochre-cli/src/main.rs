//! Theme swatch preview - prints how a theme styles each capture kind.

use anyhow::{Context, bail};
use clap::Parser;
use ochre::{CaptureKind, Font, StyleAttribute, Theme, builtin};
use std::path::Path;

/// Preview how an ochre theme styles each capture kind.
#[derive(Debug, Parser)]
#[command(name = "ochre", version)]
struct Args {
    /// Theme to preview: a built-in name or a path to a TOML theme file
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// List built-in themes and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.list {
        for theme in builtin::all() {
            println!(
                "{}  [{}]",
                theme.name,
                if theme.is_dark { "dark" } else { "light" }
            );
        }
        return Ok(());
    }

    let loaded;
    let theme: &Theme = match args.theme.as_str() {
        "light" | "pageflow-light" => builtin::pageflow_light(),
        "dark" | "pageflow-dark" => builtin::pageflow_dark(),
        other => {
            let path = Path::new(other);
            if path.is_file() {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read theme file `{other}`"))?;
                loaded = Theme::from_toml(&source)
                    .with_context(|| format!("failed to parse theme file `{other}`"))?;
                &loaded
            } else if let Some(theme) = builtin::by_name(other) {
                theme
            } else {
                bail!("unknown theme `{other}` (try --list, or pass a TOML file path)");
            }
        }
    };

    print_swatches(theme);
    Ok(())
}

fn print_swatches(theme: &Theme) {
    println!(
        "{}  [{}]",
        theme.name,
        if theme.is_dark { "dark" } else { "light" }
    );
    println!(
        "background {}  line-highlight {}  selection {}  insertion-point {}",
        theme.background.to_hex(),
        theme.line_highlight.to_hex(),
        theme.selection.to_hex(),
        theme.insertion_point.to_hex(),
    );
    println!();

    let base = Font::new("Menlo", 12.0);
    print_row("(plain text)", None, theme, &base);
    for &kind in CaptureKind::ALL {
        print_row(kind.as_name(), Some(kind), theme, &base);
    }
}

fn print_row(label: &str, capture: Option<CaptureKind>, theme: &Theme, base: &Font) {
    let attribute = theme.attribute(capture);
    let font = theme.font_for(capture, base);

    let mut traits = String::new();
    if font.traits.bold {
        traits.push_str("  bold");
    }
    if font.traits.italic {
        traits.push_str("  italic");
    }

    println!(
        "{}{label:<18}{}  {}{traits}",
        attribute.ansi(),
        StyleAttribute::ANSI_RESET,
        attribute.color.to_hex(),
    );
}
