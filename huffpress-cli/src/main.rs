//! Huffpress CLI
//!
//! A Pure Rust Huffman stream compressor: single-file compress,
//! decompress, and header inspection.

use clap::{Parser, Subcommand};
use huffpress_huffman::{FrequencyTable, compress_stream, decompress_stream};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default extension for compressed files.
const EXTENSION: &str = "huf";

#[derive(Parser)]
#[command(name = "huffpress")]
#[command(author, version, about = "Pure Rust Huffman stream compressor")]
#[command(long_about = "
Huffpress compresses a single byte stream with a static Huffman code.
The frequency table travels in the file header, so decompression needs
nothing but the compressed file itself.

Examples:
  huffpress compress notes.txt
  huffpress compress notes.txt archived/notes.txt.huf
  huffpress decompress notes.txt.huf
  huffpress info notes.txt.huf
  huffpress info --json notes.txt.huf
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (defaults to the input name with `.huf` appended)
        output: Option<PathBuf>,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (defaults to the input name without `.huf`)
        output: Option<PathBuf>,
    },

    /// Show information from a compressed file's header
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => cmd_compress(&input, output),
        Commands::Decompress { input, output } => cmd_decompress(&input, output),
        Commands::Info { file, json } => cmd_info(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(input: &Path, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| default_compressed_name(input));

    let mut reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(&output)?);

    let payload_bits = compress_stream(&mut reader, &mut writer)?;
    writer.flush()?;

    let in_size = std::fs::metadata(input)?.len();
    let out_size = std::fs::metadata(&output)?.len();

    println!("Compressed {} -> {}", input.display(), output.display());
    println!("  Input size: {} bytes", in_size);
    println!(
        "  Output size: {} bytes ({} header + {} body)",
        out_size,
        FrequencyTable::ENCODED_LEN,
        payload_bits.div_ceil(8)
    );
    if in_size > 0 {
        println!(
            "  Compression ratio: {:.1}%",
            (1.0 - out_size as f64 / in_size as f64) * 100.0
        );
    }

    Ok(())
}

fn cmd_decompress(input: &Path, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let output = match output {
        Some(path) => path,
        None => default_decompressed_name(input)?,
    };

    let mut reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(&output)?);

    let bytes = decompress_stream(&mut reader, &mut writer)?;
    writer.flush()?;

    println!("Decompressed {} -> {}", input.display(), output.display());
    println!("  Output size: {} bytes", bytes);

    Ok(())
}

fn cmd_info(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(file)?);
    let table = FrequencyTable::read_from(&mut reader)?;
    let size = std::fs::metadata(file)?.len();

    if json {
        println!(
            r#"{{"file":"{}","size":{},"header_bytes":{},"original_size":{},"distinct_bytes":{}}}"#,
            file.display()
                .to_string()
                .replace('\\', "\\\\")
                .replace('"', "\\\""),
            size,
            FrequencyTable::ENCODED_LEN,
            table.input_len(),
            table.distinct_bytes()
        );
        return Ok(());
    }

    println!("File: {}", file.display());
    println!("Format: Huffman stream");
    println!(
        "Size: {} bytes ({} header + {} body)",
        size,
        FrequencyTable::ENCODED_LEN,
        size.saturating_sub(FrequencyTable::ENCODED_LEN as u64)
    );
    println!();
    println!("Header:");
    println!("  Original size: {} bytes", table.input_len());
    println!("  Distinct byte values: {}", table.distinct_bytes());
    if table.input_len() > 0 {
        println!(
            "  Compression ratio: {:.1}%",
            (1.0 - size as f64 / table.input_len() as f64) * 100.0
        );
    }

    Ok(())
}

/// `notes.txt` -> `notes.txt.huf`
fn default_compressed_name(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// `notes.txt.huf` -> `notes.txt`; anything else needs an explicit output.
fn default_decompressed_name(input: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if input.extension().and_then(|e| e.to_str()) == Some(EXTENSION) {
        Ok(input.with_extension(""))
    } else {
        Err(format!(
            "cannot derive an output name from {} (no .{} extension); pass one explicitly",
            input.display(),
            EXTENSION
        )
        .into())
    }
}
