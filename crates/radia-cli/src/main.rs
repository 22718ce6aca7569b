use clap::{Parser, Subcommand};
use radia_cli::{parse_canvas_size, parse_hex_color, parse_variant};
use radia_core::color::Rgb;
use radia_core::models::{CanvasSize, Variant};
use radia_core::palette::{analogous_colors, complementary_colors, random_palette, Palette};
use radia_core::render::{render_surface, THUMBNAIL_SIZE};
use radia_core::verbose_println;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Parser)]
#[command(name = "radia")]
#[command(version, about = "Radial gradient artwork generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a gradient composition to a PNG
    Render {
        /// Palette document to load
        #[arg(short, long, value_name = "FILE")]
        palette: Option<PathBuf>,

        /// First palette color (also paints the fourth gradient stop)
        #[arg(long, value_name = "HEX", value_parser = parse_hex_color)]
        color1: Option<Rgb>,

        /// Second palette color
        #[arg(long, value_name = "HEX", value_parser = parse_hex_color)]
        color2: Option<Rgb>,

        /// Third palette color
        #[arg(long, value_name = "HEX", value_parser = parse_hex_color)]
        color3: Option<Rgb>,

        /// Fifth palette color (the sixth stop is always white)
        #[arg(long, value_name = "HEX", value_parser = parse_hex_color)]
        color5: Option<Rgb>,

        /// Layout variant: swoosh, sunrise, or move
        #[arg(long, value_name = "VARIANT", value_parser = parse_variant)]
        variant: Option<Variant>,

        /// Canvas size as WIDTHxHEIGHT
        #[arg(short, long, value_name = "WxH", value_parser = parse_canvas_size)]
        size: Option<CanvasSize>,

        /// Shift the four interior gradient stops, in percent
        #[arg(long, value_name = "PERCENT", default_value = "0.0")]
        stop_offset: f32,

        /// Output file
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Enable verbose output
        #[arg(long)]
        verbose: bool,
    },

    /// Render the three 100x100 variant previews
    Thumbs {
        /// Palette document to load
        #[arg(short, long, value_name = "FILE")]
        palette: Option<PathBuf>,

        /// Shift the four interior gradient stops, in percent
        #[arg(long, value_name = "PERCENT", default_value = "0.0")]
        stop_offset: f32,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Enable verbose output
        #[arg(long)]
        verbose: bool,
    },

    /// Generate and inspect palette documents
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },

    /// Render multiple palette documents with shared settings
    Batch {
        /// Palette document files
        #[arg(value_name = "INPUTS")]
        inputs: Vec<PathBuf>,

        /// Layout variant: swoosh, sunrise, or move
        #[arg(long, value_name = "VARIANT", value_parser = parse_variant)]
        variant: Option<Variant>,

        /// Canvas size as WIDTHxHEIGHT
        #[arg(short, long, value_name = "WxH", value_parser = parse_canvas_size)]
        size: Option<CanvasSize>,

        /// Shift the four interior gradient stops, in percent
        #[arg(long, value_name = "PERCENT", default_value = "0.0")]
        stop_offset: f32,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Enable verbose output
        #[arg(long)]
        verbose: bool,
    },
}

#[derive(Subcommand)]
enum PaletteAction {
    /// Derive a palette from a base color or draw one at random
    Generate {
        /// Scheme: complementary, analogous, or random
        #[arg(long, value_name = "SCHEME", default_value = "random")]
        scheme: String,

        /// Base color for the derived schemes
        #[arg(long, value_name = "HEX", value_parser = parse_hex_color)]
        base: Option<Rgb>,

        /// Seed the random scheme for reproducible output
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Save the palette document to a file
        #[arg(short = 'o', long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Show the colors of a palette document
    Show {
        /// Palette document file
        document: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            palette,
            color1,
            color2,
            color3,
            color5,
            variant,
            size,
            stop_offset,
            out,
            verbose,
        } => cmd_render(
            palette,
            color1,
            color2,
            color3,
            color5,
            variant,
            size,
            stop_offset,
            out,
            verbose,
        ),

        Commands::Thumbs {
            palette,
            stop_offset,
            out,
            verbose,
        } => cmd_thumbs(palette, stop_offset, out, verbose),

        Commands::Palette { action } => match action {
            PaletteAction::Generate {
                scheme,
                base,
                seed,
                save,
            } => cmd_palette_generate(scheme, base, seed, save),
            PaletteAction::Show { document } => cmd_palette_show(document),
        },

        Commands::Batch {
            inputs,
            variant,
            size,
            stop_offset,
            out,
            threads,
            verbose,
        } => cmd_batch(inputs, variant, size, stop_offset, out, threads, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_render(
    palette_path: Option<PathBuf>,
    color1: Option<Rgb>,
    color2: Option<Rgb>,
    color3: Option<Rgb>,
    color5: Option<Rgb>,
    variant: Option<Variant>,
    size: Option<CanvasSize>,
    stop_offset: f32,
    out: Option<PathBuf>,
    verbose: bool,
) -> Result<(), String> {
    radia_core::config::set_verbose(verbose);
    radia_core::config::log_config_usage();

    let defaults = &radia_core::config::radia_config_handle().config.defaults;

    let mut palette = if let Some(path) = palette_path {
        println!("Loading palette from {}...", path.display());
        radia_core::palette_io::load_palette(&path)?
    } else {
        defaults.palette()
    };
    if let Some(color) = color1 {
        palette.color1 = color;
    }
    if let Some(color) = color2 {
        palette.color2 = color;
    }
    if let Some(color) = color3 {
        palette.color3 = color;
    }
    if let Some(color) = color5 {
        palette.color5 = color;
    }

    let variant = variant.unwrap_or(defaults.variant);
    let size = size.unwrap_or_else(|| defaults.size());
    let out_path = out.unwrap_or_else(|| PathBuf::from(radia_core::exporters::IMAGE_FILE_NAME));

    println!("Rendering {} composition...", variant);
    println!("  Canvas: {}x{}", size.width, size.height);
    verbose_println!(
        "[radia] palette: {} {} {} {}",
        palette.color1,
        palette.color2,
        palette.color3,
        palette.color5
    );

    let surface = render_surface(&palette, variant, size.width, size.height, stop_offset);

    println!("Exporting to PNG...");
    radia_core::exporters::export_png(&surface, &out_path)?;

    println!("Done! Gradient saved to: {}", out_path.display());
    Ok(())
}

fn cmd_thumbs(
    palette_path: Option<PathBuf>,
    stop_offset: f32,
    out: Option<PathBuf>,
    verbose: bool,
) -> Result<(), String> {
    radia_core::config::set_verbose(verbose);
    radia_core::config::log_config_usage();

    let defaults = &radia_core::config::radia_config_handle().config.defaults;

    let palette = if let Some(path) = palette_path {
        println!("Loading palette from {}...", path.display());
        radia_core::palette_io::load_palette(&path)?
    } else {
        defaults.palette()
    };

    let out_dir = out.unwrap_or_else(|| PathBuf::from("."));
    if !out_dir.exists() {
        std::fs::create_dir_all(&out_dir)
            .map_err(|e| format!("Failed to create output directory: {}", e))?;
    }

    println!(
        "Rendering {}x{} previews, one per variant...",
        THUMBNAIL_SIZE, THUMBNAIL_SIZE
    );
    for variant in Variant::ALL {
        let surface = render_surface(
            &palette,
            variant,
            THUMBNAIL_SIZE,
            THUMBNAIL_SIZE,
            stop_offset,
        );
        let path = out_dir.join(format!("thumb-{}.png", variant.name()));
        radia_core::exporters::export_png(&surface, &path)?;
        println!("  {} -> {}", variant, path.display());
    }

    println!("Done! Previews saved to: {}", out_dir.display());
    Ok(())
}

fn cmd_palette_generate(
    scheme: String,
    base: Option<Rgb>,
    seed: Option<u64>,
    save: Option<PathBuf>,
) -> Result<(), String> {
    let defaults = &radia_core::config::radia_config_handle().config.defaults;

    let palette = match scheme.to_lowercase().as_str() {
        "random" => {
            println!("Generating random palette...");
            match seed {
                Some(seed) => random_palette(&mut StdRng::seed_from_u64(seed)),
                None => random_palette(&mut rand::thread_rng()),
            }
        }
        "complementary" => {
            let base = base.ok_or_else(|| "The complementary scheme needs --base".to_string())?;
            println!("Generating complementary palette from {}...", base);
            let [color1, color2, color3] = complementary_colors(base);
            Palette::new(color1, color2, color3, defaults.color5)
        }
        "analogous" => {
            let base = base.ok_or_else(|| "The analogous scheme needs --base".to_string())?;
            println!("Generating analogous palette from {}...", base);
            let [color1, color2, color3] = analogous_colors(base);
            Palette::new(color1, color2, color3, defaults.color5)
        }
        other => {
            return Err(format!(
                "Unknown scheme '{}': expected complementary, analogous, or random",
                other
            ))
        }
    };

    println!("\nPalette:");
    println!("  color1: {}", palette.color1);
    println!("  color2: {}", palette.color2);
    println!("  color3: {}", palette.color3);
    println!("  color5: {}", palette.color5);

    if let Some(save_path) = save {
        radia_core::palette_io::save_palette(&palette, &save_path)?;
        println!("\nPalette saved to: {}", save_path.display());
    }

    Ok(())
}

fn cmd_palette_show(document: PathBuf) -> Result<(), String> {
    println!("Loading palette: {}", document.display());
    let palette = radia_core::palette_io::load_palette(&document)?;

    println!("\nPalette:");
    println!("  color1: {}  (also paints the fourth gradient stop)", palette.color1);
    println!("  color2: {}", palette.color2);
    println!("  color3: {}", palette.color3);
    println!("  color5: {}  (the sixth stop is always #ffffff)", palette.color5);
    println!();
    Ok(())
}

fn cmd_batch(
    inputs: Vec<PathBuf>,
    variant: Option<Variant>,
    size: Option<CanvasSize>,
    stop_offset: f32,
    out: Option<PathBuf>,
    threads: Option<usize>,
    verbose: bool,
) -> Result<(), String> {
    radia_core::config::set_verbose(verbose);
    radia_core::config::log_config_usage();

    if inputs.is_empty() {
        return Err("No palette documents specified".to_string());
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel rendering", num_threads);
    }

    let defaults = &radia_core::config::radia_config_handle().config.defaults;
    let variant = variant.unwrap_or(defaults.variant);
    let size = size.unwrap_or_else(|| defaults.size());

    // Determine output directory
    let output_dir = out.unwrap_or_else(|| PathBuf::from("."));
    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create output directory: {}", e))?;
    }

    println!(
        "\nRendering {} palettes at {}x{} ({})...\n",
        inputs.len(),
        size.width,
        size.height,
        variant
    );

    // Progress tracking
    let rendered_count = AtomicUsize::new(0);
    let total_files = inputs.len();

    // Render documents in parallel
    let results: Vec<Result<PathBuf, String>> = inputs
        .par_iter()
        .map(|input| {
            let palette = radia_core::palette_io::load_palette(input)?;

            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("gradient");
            let output_path = output_dir.join(format!("{}.png", stem));

            let surface = render_surface(&palette, variant, size.width, size.height, stop_offset);
            radia_core::exporters::export_png(&surface, &output_path)?;

            // Update progress
            let count = rendered_count.fetch_add(1, Ordering::SeqCst) + 1;
            println!(
                "[{}/{}] Rendered: {} -> {}",
                count,
                total_files,
                input.display(),
                output_path.display()
            );

            Ok(output_path)
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for (input, result) in inputs.iter().zip(results.iter()) {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => {
                errors.push((input.clone(), e.clone()));
            }
        }
    }

    println!("\n========================================");
    println!("BATCH RENDER COMPLETE");
    println!("========================================");
    println!("  Successful: {}", success_count);
    println!("  Failed:     {}", errors.len());
    println!("  Output dir: {}", output_dir.display());

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, error) in &errors {
            println!("  {}: {}", path.display(), error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("{} palette(s) failed to render", errors.len()))
    }
}
