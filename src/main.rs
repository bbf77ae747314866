// SPDX-License-Identifier: MIT
//
// puml-theme — automatic theme selection for PlantUML diagrams.
//
// This is the main binary that wires together all the crates:
//
//   pt-classify → topic-to-theme classification (keyword scoring)
//   pt-catalog  → the supported-theme catalog, descriptions, categories
//   pt-inject   → !theme directive injection into PlantUML source
//
// Commands:
//
//   pick <topic> [--content <text>] [--style <hint>]
//       Classify a topic and print the chosen theme plus the reason.
//
//   themes
//       Print the full theme catalog with descriptions.
//
//   inject <theme> [file]
//       Read PlantUML source from the file (or stdin when omitted) and
//       print it with the theme directive injected.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use pt_classify::select_theme;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("pick") => pick(&args[1..]),
        Some("themes") => print!("{}", pt_catalog::list_themes_formatted()),
        Some("inject") => inject(&args[1..]),
        Some(other) => {
            eprintln!("puml-theme: unknown command '{other}'");
            usage_and_exit();
        }
        None => usage_and_exit(),
    }
}

fn usage_and_exit() -> ! {
    eprintln!("usage: puml-theme <command>");
    eprintln!();
    eprintln!("  pick <topic> [--content <text>] [--style <hint>]");
    eprintln!("  themes");
    eprintln!("  inject <theme> [file]");
    process::exit(1);
}

// ── pick ────────────────────────────────────────────────────────────────────

fn pick(args: &[String]) {
    let Some(topic) = args.first() else {
        eprintln!("puml-theme: pick needs a topic");
        process::exit(1);
    };

    let mut content: Option<&str> = None;
    let mut style: Option<&str> = None;

    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        let Some(value) = rest.next() else {
            eprintln!("puml-theme: {flag} needs a value");
            process::exit(1);
        };
        match flag.as_str() {
            "--content" => content = Some(value),
            "--style" => style = Some(value),
            _ => {
                eprintln!("puml-theme: unknown flag '{flag}'");
                process::exit(1);
            }
        }
    }

    let selection = select_theme(topic, content, style);
    println!("theme:    {}", selection.theme);
    println!("category: {}", pt_catalog::category_of(selection.theme).name());
    println!("reason:   {}", selection.description);
}

// ── inject ──────────────────────────────────────────────────────────────────

fn inject(args: &[String]) {
    let Some(theme) = args.first() else {
        eprintln!("puml-theme: inject needs a theme name");
        process::exit(1);
    };

    let source = match args.get(1) {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("puml-theme: {path}: {e}");
            process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("puml-theme: stdin: {e}");
                process::exit(1);
            }
            buf
        }
    };

    print!("{}", pt_inject::replace_theme(&source, theme));
}
