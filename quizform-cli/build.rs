use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs, keep the two identical
// Build scripts can't access src/ modules
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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    generate_to(Bash, &mut cmd, "quizform", &outdir)?;
    generate_to(Zsh, &mut cmd, "quizform", &outdir)?;
    generate_to(Fish, &mut cmd, "quizform", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
