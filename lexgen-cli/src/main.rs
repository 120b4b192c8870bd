mod rules;

use clap::{Parser, Subcommand, ValueEnum};
use lexgen::{Lexer, LexerError};
use lexgen_draw::ascii::AsciiArtDrawer;
use lexgen_draw::svg::SvgDrawer;
use lexgen_draw::{draw_graph, OffsetScaleDrawer};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

const DEFAULT_MAX_STATES: usize = 10_000;
const CANVAS_SIZE: f32 = 400.0;

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read rule file {0}: {1}")]
    ReadRuleFile(PathBuf, io::Error),
    #[error("malformed rule on line {0} of {1}: expected \"name\\tpattern\"")]
    MalformedRule(usize, PathBuf),
    #[error("could not write output file {0}: {1}")]
    WriteOutput(PathBuf, io::Error),
    #[error(transparent)]
    Lexer(#[from] LexerError),
}

/// Compiles regex rules to automata and renders them, or tokenizes input
/// against a rule set.
#[derive(Debug, Parser)]
#[command(name = "lexgen-cli", version)]
struct Cli {
    /// Where rendered automata are written. Defaults to stdout.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Rendering backend for the default regex-to-image loop.
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Svg,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tokenizes a line of input against a rule set: the default rule
    /// set, or one supplied as a file of "name<TAB>pattern" lines.
    Tokenize {
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Command::Tokenize { rules }) => run_tokenize(rules.as_deref()),
        None => run_diagnostic_loop(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// §6's CLI surface: read single-line regex text from stdin, `quit`
/// terminates, every other line compiles and renders.
fn run_diagnostic_loop(cli: &Cli) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line_no = 0usize;

    write!(stdout, "> ").ok();
    stdout.flush().ok();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        line_no += 1;
        if line.trim() == "quit" {
            break;
        }
        if line.trim().is_empty() {
            write!(stdout, "> ").ok();
            stdout.flush().ok();
            continue;
        }

        match compile_and_render(line.as_bytes(), cli.format) {
            Ok(rendered) => match &cli.output {
                Some(path) => {
                    fs::write(path, &rendered).map_err(|e| CliError::WriteOutput(path.clone(), e))?;
                    println!("wrote {}", path.display());
                }
                None => println!("{rendered}"),
            },
            Err(err) => {
                tracing::warn!(line = line_no, "{err}");
                println!("error: {err}");
            }
        }
        write!(stdout, "> ").ok();
        stdout.flush().ok();
    }
    Ok(())
}

fn compile_and_render(pattern: &[u8], format: Format) -> Result<String, CliError> {
    let lexer = Lexer::compile(&[(pattern, "rule")], DEFAULT_MAX_STATES)?;
    let artifact = lexer.dfa().graph_artifact();
    Ok(match format {
        Format::Ascii => {
            let mut drawer = AsciiArtDrawer::new(120, 60);
            let mut offset = OffsetScaleDrawer {
                offset: lexgen_draw::pos2::pos2(60.0, 30.0),
                scale: lexgen_draw::pos2::pos2(1.0, 1.0),
                drawer: &mut drawer,
            };
            draw_graph(&artifact, &mut offset, |r| lexer.rule_name(Some(r)).to_string());
            drawer.render()
        }
        Format::Svg => {
            let mut drawer = SvgDrawer::new(CANVAS_SIZE, CANVAS_SIZE);
            let mut offset = OffsetScaleDrawer {
                offset: lexgen_draw::pos2::pos2(CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0),
                scale: lexgen_draw::pos2::pos2(6.0, 6.0),
                drawer: &mut drawer,
            };
            draw_graph(&artifact, &mut offset, |r| lexer.rule_name(Some(r)).to_string());
            drawer.to_svg_string()
        }
    })
}

/// The functional equivalent of the original source's `test_lexer`
/// interactive loop: tokenize one line of stdin against a rule set and
/// print `(start, rule-name-or-"?")` pairs.
fn run_tokenize(rule_file: Option<&std::path::Path>) -> Result<(), CliError> {
    let named_rules = match rule_file {
        Some(path) => load_rule_file(path)?,
        None => rules::default_rules()
            .into_iter()
            .map(|(r, name)| (r, name.to_string()))
            .collect(),
    };

    let regexes: Vec<_> = named_rules.iter().map(|(r, _)| r.clone()).collect();
    let names: Vec<_> = named_rules.iter().map(|(_, n)| n.clone()).collect();
    let lexer = Lexer::from_regexes(&regexes, &names, DEFAULT_MAX_STATES)?;
    tracing::info!(rule_count = regexes.len(), "lexer compiled");

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim() == "quit" {
            break;
        }
        for segment in lexer.scan(line.as_bytes()) {
            println!("({}, {})", segment.start, lexer.rule_name(segment.rule));
        }
    }
    Ok(())
}

fn load_rule_file(path: &std::path::Path) -> Result<Vec<(lexgen::regex::Regex, String)>, CliError> {
    let contents = fs::read_to_string(path).map_err(|e| CliError::ReadRuleFile(path.to_path_buf(), e))?;
    let mut out = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (name, pattern) = line
            .split_once('\t')
            .ok_or_else(|| CliError::MalformedRule(i + 1, path.to_path_buf()))?;
        let regex = lexgen::regex::Regex::parse(pattern.as_bytes()).map_err(LexerError::from)?;
        out.push((regex, name.to_string()));
    }
    Ok(out)
}
