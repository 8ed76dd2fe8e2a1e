//! vision-hocr CLI - hOCR output from saved text recognition responses

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use vision_hocr::{
    detect, normalize_languages, HocrOptions, JsonFormat, JsonResponseRecognizer, PageOcr,
    PageOutcome, PageOutput, PageRequest, RecognitionResponse, Recognizer,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "vision-hocr")]
#[command(version)]
#[command(about = "Convert Cloud Vision text recognition results to hOCR", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one page image and its saved response to .hocr and .txt
    Page {
        /// Page image
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// 1-based page number used in element ids
        #[arg(short, long, default_value = "1")]
        page: u32,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Convert every image in a directory, in parallel
    Batch {
        /// Directory of page images; pages are numbered in file name order
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write empty-page output for an image without recognition
    Skip {
        /// Page image
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// 1-based page number used in element ids
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Output directory (next to the image if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Language hints (e.g. "eng", "pt-BR")
        #[arg(short, long = "lang", value_name = "LANG")]
        languages: Vec<String>,
    },

    /// Show how language hints are normalized
    Langs {
        /// Language hints
        #[arg(value_name = "LANG", required = true)]
        languages: Vec<String>,
    },

    /// Show a summary of a saved recognition response
    Info {
        /// Response JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Dump the page tree as JSON instead
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct CommonArgs {
    /// Directory holding saved responses (next to each image if not specified)
    #[arg(short, long, value_name = "DIR", env = "VISION_HOCR_RESPONSES")]
    responses: Option<PathBuf>,

    /// Output directory (next to each image if not specified)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Language hints (e.g. "eng", "pt-BR")
    #[arg(short, long = "lang", value_name = "LANG")]
    languages: Vec<String>,

    /// Recognition time budget in seconds
    #[arg(long, value_name = "SECS", env = "VISION_HOCR_TIMEOUT")]
    timeout: Option<u64>,

    /// Value of the ocr-system meta tag
    #[arg(long, value_name = "NAME", env = "VISION_HOCR_OCR_SYSTEM")]
    ocr_system: Option<String>,
}

impl CommonArgs {
    fn recognizer(&self) -> JsonResponseRecognizer {
        match &self.responses {
            Some(dir) => JsonResponseRecognizer::with_dir(dir),
            None => JsonResponseRecognizer::new(),
        }
    }

    fn hocr_options(&self) -> HocrOptions {
        let options = HocrOptions::new();
        match &self.ocr_system {
            Some(system) => options.with_ocr_system(system),
            None => options,
        }
    }

    fn request(&self, image: &Path, page: u32) -> PageRequest {
        let mut request = PageRequest::new(image, page).with_languages(self.languages.clone());
        if let Some(secs) = self.timeout {
            request = request.with_timeout(Duration::from_secs(secs));
        }
        if let Some(ref dir) = self.output {
            request = request.with_output_dir(dir);
        }
        request
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Page {
            image,
            page,
            common,
        } => cmd_page(&image, page, &common),
        Commands::Batch { dir, common } => cmd_batch(&dir, &common),
        Commands::Skip {
            image,
            page,
            output,
            languages,
        } => cmd_skip(&image, page, output.as_deref(), languages),
        Commands::Langs { languages } => {
            cmd_langs(&languages);
            Ok(())
        }
        Commands::Info {
            input,
            json,
            compact,
        } => cmd_info(&input, json, compact),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_page(image: &Path, page: u32, common: &CommonArgs) -> CliResult {
    check_image(image)?;

    let recognizer = common.recognizer();
    let ocr = PageOcr::new(&recognizer).with_options(common.hocr_options());
    let request = common.request(image, page);
    log::debug!(
        "Page {} of {} with {}",
        page,
        image.display(),
        recognizer.name()
    );
    let output = ocr.process_page(&request)?;

    print_outcome(image, &output);
    println!("  {} {}", "├─".dimmed(), request.output_hocr.display());
    println!("  {} {}", "└─".dimmed(), request.output_text.display());

    Ok(())
}

fn cmd_batch(dir: &Path, common: &CommonArgs) -> CliResult {
    let mut images: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && detect::is_image(path))
        .collect();
    images.sort();
    log::debug!("Found {} images in {}", images.len(), dir.display());

    if images.is_empty() {
        println!("{} {}", "No images found in".yellow(), dir.display());
        return Ok(());
    }

    let requests: Vec<PageRequest> = images
        .iter()
        .zip(1u32..)
        .map(|(image, page)| common.request(image, page))
        .collect();

    let recognizer = common.recognizer();
    let ocr = PageOcr::new(&recognizer).with_options(common.hocr_options());

    let pb = ProgressBar::new(requests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages")?
            .progress_chars("#>-"),
    );

    let results = ocr.process_pages_with(&requests, |_| pb.inc(1));
    pb.finish_and_clear();

    let mut failed = 0;
    for (image, result) in images.iter().zip(&results) {
        match result {
            Ok(output) => print_outcome(image, output),
            Err(e) => {
                failed += 1;
                println!("{} {}: {}", "Failed".red(), image.display(), e);
            }
        }
    }

    let fallbacks = results
        .iter()
        .filter(|r| matches!(r, Ok(o) if o.outcome.is_fallback()))
        .count();
    println!(
        "\n{} {} pages, {} empty, {} failed",
        "Done!".green().bold(),
        results.len(),
        fallbacks,
        failed
    );

    if failed > 0 {
        return Err(format!("{} pages failed", failed).into());
    }
    Ok(())
}

fn cmd_skip(image: &Path, page: u32, output: Option<&Path>, languages: Vec<String>) -> CliResult {
    check_image(image)?;

    let recognizer = JsonResponseRecognizer::new();
    let ocr = PageOcr::new(&recognizer);
    let mut request = PageRequest::new(image, page).with_languages(languages);
    if let Some(dir) = output {
        request = request.with_output_dir(dir);
    }
    let output = ocr.skip_page(&request)?;

    print_outcome(image, &output);
    Ok(())
}

fn cmd_langs(languages: &[String]) {
    let normalized = normalize_languages(languages);

    for language in languages {
        match vision_hocr::parser::normalize_language(language) {
            Some(tag) => println!("{} {} {}", language, "->".dimmed(), tag.green()),
            None => println!("{} {} {}", language, "->".dimmed(), "dropped".red()),
        }
    }

    println!();
    if normalized.is_empty() {
        println!("{}", "No language hint will be sent".yellow());
    } else {
        println!("{}: {}", "Hints".bold(), normalized.join(", "));
    }
}

fn cmd_info(input: &Path, json: bool, compact: bool) -> CliResult {
    let response = RecognitionResponse::from_path(input)?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        let page = vision_hocr::parser::build_tree(&response.into_checked()?, 1)?;
        println!("{}", vision_hocr::render::to_json(&page.document, format)?);
        return Ok(());
    }

    println!("{}", "Response Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());

    if let Some(ref status) = response.error {
        if !status.is_ok() {
            println!("{}: {}", "Error".bold(), status.to_string().red());
            return Ok(());
        }
    }

    println!("{}: {}", "Pages".bold(), response.pages().len());
    if let Some(first) = response.pages().first() {
        println!("{}: {}x{}", "Size".bold(), first.width, first.height);
    }

    let page = vision_hocr::parser::build_tree(&response, 1)?;
    let stats = page.document.stats();

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Blocks".bold(), stats.blocks);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraphs);
    println!("{}: {} ({} empty)", "Lines".bold(), stats.lines, stats.empty_lines);
    println!("{}: {}", "Words".bold(), stats.words);
    match page.document.page.content_bbox() {
        Some(bbox) => println!("{}: {}", "Content area".bold(), bbox),
        None => println!("{}: {}", "Content area".bold(), "none".dimmed()),
    }
    println!("{}: {}", "Characters".bold(), page.transcript.chars().count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "vision-hocr".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Cloud Vision to hOCR converter");
    println!();
    println!("License: MIT");
}

fn check_image(image: &Path) -> CliResult {
    let info = detect::probe_image(image)?;
    log::debug!("{}: {}", image.display(), info);
    Ok(())
}

fn print_outcome(image: &Path, output: &PageOutput) {
    let label = match output.outcome {
        PageOutcome::Recognized => "Recognized".green(),
        PageOutcome::Fallback { .. } => "Empty page".yellow(),
        PageOutcome::Skipped => "Skipped".yellow(),
    };
    println!(
        "{} page {} ({}, {} words)",
        label,
        output.page_number,
        image.display(),
        output.stats.words
    );
    if let PageOutcome::Fallback { ref reason } = output.outcome {
        println!("  {} {}", "reason:".dimmed(), reason);
    }
}
