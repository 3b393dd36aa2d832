use std::{
    fs,
    io,
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use keylang::{
    config::{BlockStyle, LanguageConfig},
    error::ConfigError,
    interpreter::core::Interpreter,
};
use log::{LevelFilter, debug};

/// keylang runs programs written in a small scripting language whose
/// keywords, comment marker, file extension and block style you choose.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run. Its name must end with the language's extension.
    file: PathBuf,

    /// JSON language definition to start from instead of the defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How blocks are delimited.
    #[arg(long, value_enum)]
    style: Option<BlockStyle>,

    /// Required source file extension, without the dot.
    #[arg(long)]
    extension: Option<String>,

    /// Marker that starts a comment.
    #[arg(long, value_name = "MARKER")]
    comment: Option<String>,

    /// Columns per indentation level.
    #[arg(long, value_name = "COLUMNS")]
    indent_width: Option<usize>,

    /// Renames a keyword, e.g. `-k if=wenn`. May be repeated.
    #[arg(short, long = "keyword", value_name = "CONSTRUCT=WORD")]
    keywords: Vec<String>,

    /// Log more; repeat for more detail (logs go to stderr).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Builds the language definition: defaults or the `--config` file, then
    /// the command line overrides.
    fn language(&self) -> Result<LanguageConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => LanguageConfig::from_file(path)?,
            None => LanguageConfig::default(),
        };

        if let Some(style) = self.style {
            config.block_style = style;
        }
        if let Some(extension) = &self.extension {
            config.extension.clone_from(extension);
        }
        if let Some(comment) = &self.comment {
            config.comment_marker.clone_from(comment);
        }
        if let Some(width) = self.indent_width {
            config.indent_width = width;
        }
        for raw in &self.keywords {
            config.keywords.apply_override(raw)?;
        }

        config.normalize();
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .format_timestamp(None)
                              .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match args.language() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ConfigError: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = config.check_extension(&args.file) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", args.file.display());
            return ExitCode::FAILURE;
        },
    };
    debug!("loaded {} ({} bytes)", args.file.display(), source.len());

    let stdout = io::stdout();
    let mut interpreter = match Interpreter::new(config, io::stdin().lock(), stdout.lock()) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            eprintln!("ConfigError: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = interpreter.run(&source) {
        drop(interpreter);
        println!("{}: {e}", e.label());
    }

    ExitCode::SUCCESS
}
