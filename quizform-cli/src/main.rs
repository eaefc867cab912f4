// Command-line interface for quizform
//
// Compiles Markdown-like documents carrying question specifications into HTML forms.
//
// Usage:
//  quizform <input> [--to <format>] [-o <file>] [--title <title>]   - Render a document (default)
//  quizform render <input> ...                                      - Same as above (explicit)
//  quizform inspect <input>                                         - Dump the parsed fields as JSON
//  quizform generate-css                                            - Print the baseline stylesheet
//  quizform --list-formats                                          - List output formats
//
// Extra Parameters:
//
// Configuration overrides and format parameters are passed as --extra-<name> <value>.
// Known keys update the loaded configuration, the rest go to the output format.
// Example:
//  quizform quiz.md -o quiz.html --extra-policy strict --extra-submit-label Send

use clap::{Arg, ArgAction, Command, ValueHint};
use quizform::formats::html::{HtmlFormat, HtmlOptions};
use quizform::formats::json::serialize_fields;
use quizform::{transform, FormDocument, FormatRegistry, TracingDiagnostics};
use quizform_config::{Loader, PolicyConfig, QuizformConfig};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SUBCOMMANDS: &[&str] = &["render", "inspect", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("quizform")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile question specifications into HTML forms")
        .long_about(
            "quizform turns documents carrying question specifications into HTML forms.\n\n\
            A paragraph whose first line reads `code [-> Label] [*]= <element>` becomes a\n\
            form field; every other paragraph is published as Markdown.\n\n\
            Commands:\n  \
            - render:       Compile a document (default command)\n  \
            - inspect:      Dump the parsed fields as JSON\n  \
            - generate-css: Print the baseline stylesheet\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            quizform quiz.md                           # HTML page to stdout\n  \
            quizform quiz.md -o quiz.html              # HTML page to a file\n  \
            quizform quiz.md --to json                 # Compiled document as JSON\n  \
            quizform inspect quiz.md                   # Parsed fields only\n  \
            quizform quiz.md --extra-strict            # Abort on the first malformed field",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quizform.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Compile a document into a form (default command)")
                .long_about(
                    "Compile a document into HTML forms.\n\n\
                    The document is split into slides at headings. Slides holding at\n\
                    least one field are wrapped in a <form> element.\n\n\
                    The output format is taken from --to, then from the extension of\n\
                    the -o file, and defaults to html.\n\n\
                    Examples:\n  \
                    quizform render quiz.md -o quiz.html\n  \
                    quizform quiz.md --title \"Week 3\"        # 'render' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (html, json)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Document title (defaults to the configured title, then the file name)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed fields of a document as JSON")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Document title")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the default CSS used for HTML pages")
                .long_about(
                    "Outputs the baseline CSS embedded in every HTML page.\n\n\
                    Save it, customize it, and pass it back with --extra-css to\n\
                    extend the default styles.\n\n\
                    Examples:\n  \
                    quizform generate-css > custom.css",
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means "render"
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Error: an input file is required");
                std::process::exit(1);
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let title = sub_matches.get_one::<String>("title").map(|s| s.as_str());
            handle_render_command(input, to, output, title, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Error: an input file is required");
                std::process::exit(1);
            };
            let title = sub_matches.get_one::<String>("title").map(|s| s.as_str());
            handle_inspect_command(input, title, &config);
        }
        Some(("generate-css", _)) => {
            print!("{}", quizform::formats::get_default_css());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Title precedence: `--title`, then `[document] title`, then the input file stem.
fn resolve_title(input: &str, explicit: Option<&str>, config: &QuizformConfig) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| config.document.title.clone())
        .or_else(|| {
            Path::new(input)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "form".to_string())
}

fn compile_file(input: &str, title: Option<&str>, config: &QuizformConfig) -> FormDocument {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let title = resolve_title(input, title, config);

    transform(
        &source,
        &title,
        &config.render_options(),
        config.policy(),
        &mut TracingDiagnostics,
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    title: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &QuizformConfig,
) {
    let mut registry = FormatRegistry::default();
    registry.register(HtmlFormat::new(html_options_from_config(config)));

    let format = to
        .map(str::to_string)
        .or_else(|| output.and_then(|path| registry.detect_format_from_filename(path)))
        .unwrap_or_else(|| "html".to_string());
    if let Err(e) = registry.get(&format) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let doc = compile_file(input, title, config);

    let result = registry
        .serialize_with_options(&doc, &format, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            tracing::info!(output = path, format = %format, "wrote document");
        }
        None => print!("{result}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, title: Option<&str>, config: &QuizformConfig) {
    let doc = compile_file(input, title, config);
    let json = serialize_fields(&doc).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {name:<8} {}", format.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> QuizformConfig {
    let loader = Loader::new().with_optional_file("quizform.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn html_options_from_config(config: &QuizformConfig) -> HtmlOptions {
    let options = HtmlOptions::new(config.form_options());
    match &config.html.custom_css {
        Some(path) => {
            let css = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading CSS file '{}': {e}", path.display());
                std::process::exit(1);
            });
            options.with_custom_css(css)
        }
        None => options,
    }
}

fn apply_config_overrides(config: &mut QuizformConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["textarea-rows", "rows"]) {
        config.render.default_textarea_rows = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid row count '{raw}' for --extra-textarea-rows");
            std::process::exit(1);
        });
    }
    if let Some(raw) = take_override(extra_params, &["placeholder"]) {
        config.render.placeholder_label = raw;
    }

    if let Some(raw) = extra_params.remove("policy") {
        config.document.policy = match raw.to_lowercase().as_str() {
            "strict" => PolicyConfig::Strict,
            "lenient" => PolicyConfig::Lenient,
            other => {
                eprintln!("Invalid policy '{other}' for --extra-policy (strict, lenient)");
                std::process::exit(1);
            }
        };
    }
    if let Some(raw) = extra_params.remove("strict") {
        if parse_bool_arg("strict", &raw) {
            config.document.policy = PolicyConfig::Strict;
        }
    }

    if let Some(raw) = extra_params.remove("method") {
        config.form.method = raw;
    }
    if let Some(raw) = extra_params.remove("action") {
        config.form.action = raw;
    }
    if let Some(raw) = take_override(extra_params, &["submit-label", "submit"]) {
        config.form.submit_label = raw;
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.html.custom_css = Some(path.into());
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
