//! CLI tool for converting the marked region of a LaTeX letter to plaintext.

mod select;

use anyhow::{Context, Result};
use clap::Parser;
use plaintextify_core::{
    region::{DEFAULT_BEGIN_MARKER, DEFAULT_END_MARKER},
    ConversionReport, LetterPlaintextifier, RegionMarkers,
};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Convert a LaTeX letter into plaintext for pasting into web forms.
#[derive(Parser, Debug)]
#[command(name = "plaintextify")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input LaTeX file (default: pick from --dir)
    input: Option<PathBuf>,

    /// Directory to search when no input file is given
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Extension of candidate files in --dir
    #[arg(short, long, default_value = "tex")]
    ext: String,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Print a JSON conversion report
    #[arg(long)]
    json: bool,

    /// Bullet glyph for list items
    #[arg(short, long, default_value = "*")]
    bullet: String,

    /// Marker opening the region to convert
    #[arg(long, default_value = DEFAULT_BEGIN_MARKER)]
    begin_marker: String,

    /// Marker closing the region to convert
    #[arg(long, default_value = DEFAULT_END_MARKER)]
    end_marker: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let converter = LetterPlaintextifier::new()
        .with_markers(RegionMarkers::new(&args.begin_marker, &args.end_marker))
        .with_bullet_glyph(args.bullet.as_str());

    let input_path = match &args.input {
        Some(path) => path.clone(),
        // stdout carries --print and --json output
        None => match choose_input(
            &args.dir,
            &args.ext,
            &mut io::stdin().lock(),
            &mut io::stderr(),
        )? {
            Some(path) => path,
            None => {
                println!("No .{} files found in {}", args.ext, args.dir.display());
                return Ok(());
            }
        },
    };

    if args.verbose {
        eprintln!("Processing: {}", input_path.display());
    }

    let plaintext = converter
        .convert_file(&input_path)
        .with_context(|| format!("Failed to convert {}", input_path.display()))?;

    let mut report = ConversionReport::new(input_path.display().to_string(), &plaintext);

    if args.print {
        print!("{}", plaintext.text);
    } else {
        let output_path = get_output_path(&input_path, args.output.as_ref())?;
        write_output(&output_path, &plaintext.text)?;
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
        report = report.with_output(output_path.display().to_string());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    Ok(())
}

/// Pick the input file from `dir` when none was given.
///
/// Several candidates are offered on `prompt` and chosen from `input`.
/// Returns None when there is nothing to convert.
fn choose_input<R: BufRead, W: Write>(
    dir: &Path,
    ext: &str,
    input: &mut R,
    prompt: &mut W,
) -> Result<Option<PathBuf>> {
    let mut candidates = select::find_candidates(dir, ext)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    match candidates.len() {
        0 => Ok(None),
        1 => Ok(candidates.pop()),
        _ => {
            let index = select::prompt_selection(&candidates, input, prompt)
                .context("Failed to read selection")?;
            Ok(Some(candidates.swap_remove(index)))
        }
    }
}

/// Determine the output path for a converted letter.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.txt", stem);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match input_path.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
