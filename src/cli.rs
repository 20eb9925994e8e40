use clap::Parser;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_PREFIX, FILLED_PREFIX_MARKER, HEADER_FILE_NAME};
use crate::emit::{emit, emit_header, EmitConfig, OutputFormat};
use crate::errors::{Error, Result};
use crate::types::finite_non_negative;
use crate::{build_geometry, ConvertConfig, SvgSource};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// Input SVG file, or directory to search for SVG files
    #[arg(short, long = "in")]
    input: String,

    /// Output directory for generated sources
    #[arg(short, long, default_value = "generated")]
    out: String,

    /// Symbol name prefix
    ///
    /// A prefix containing `_f_` marks a filled icon set and enables --group.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Normalize the larger viewBox extent to this size (0 = keep viewBox)
    #[arg(long, default_value = "0")]
    size: u32,

    /// Curve flattening tolerance, in source units
    #[arg(long, default_value = "0.25")]
    flatness: f64,

    /// Pre-rounding upscale factor applied to all coordinates
    #[arg(long, default_value = "1")]
    upscale: u32,

    /// Process only the first N files (0 = all)
    #[arg(long, default_value = "0")]
    limit: usize,

    /// Emit all subpaths of an icon as one path with segment breaks
    ///
    /// Useful for filled icons with holes.
    #[arg(long)]
    group: bool,

    /// Output format
    #[arg(long, default_value = "c")]
    format: OutputFormat,
}

/// Top-level configuration used by the `svgpoly` command-line process.
///
/// Front-end settings (input and output locations, file limit) are stored
/// directly in this struct; per-icon settings are in the embedded
/// `ConvertConfig` and `EmitConfig`.
#[derive(Clone, Debug)]
pub struct Config {
    /// SVG file or directory of SVG files
    pub input_path: String,
    /// Directory receiving generated files; created if missing
    pub output_dir: String,
    /// Maximum number of files to process, 0 for no limit
    pub limit: usize,
    pub convert: ConvertConfig,
    pub emit: EmitConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        let flatness = finite_non_negative("flatness", args.flatness)?;
        let mut group = args.group;
        if args.prefix.contains(FILLED_PREFIX_MARKER) && !group {
            log::debug!("prefix '{}' implies --group", args.prefix);
            group = true;
        }
        Ok(Self {
            input_path: args.input,
            output_dir: args.out,
            limit: args.limit,
            convert: ConvertConfig {
                size: args.size,
                flatness,
                upscale: args.upscale.max(1),
            },
            emit: EmitConfig {
                prefix: args.prefix,
                group,
                format: args.format,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// SVG files to process for `input`, sorted by path.
///
/// A file is returned as-is; a directory is searched recursively for
/// `*.svg` files (case-insensitive).
pub fn collect_svg_files(input: &Path) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(input)?;
    let mut files = Vec::new();
    if meta.is_dir() {
        for entry in WalkDir::new(input) {
            let entry = entry.map_err(Error::from_err)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_svg = entry
                .file_name()
                .to_string_lossy()
                .to_ascii_lowercase()
                .ends_with(".svg");
            if is_svg {
                files.push(entry.into_path());
            }
        }
    } else {
        files.push(input.to_owned());
    }
    if files.is_empty() {
        return Err(Error::Cli("no svg files found".into()));
    }
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

fn icon_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Write `contents` to `path` via a temporary file.
fn write_output(path: &Path, contents: &str) -> Result<()> {
    let mut out_temp = NamedTempFile::new()?;
    out_temp.write_all(contents.as_bytes())?;
    out_temp.flush()?;
    // Copy content rather than rename (by .persist()) since this
    // could cross filesystems.
    fs::copy(out_temp.path(), path)?;
    Ok(())
}

/// Convert a single SVG file, returning the rendered output.
fn convert_file(path: &Path, name: &str, config: &Config) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let source = SvgSource::from_reader(&mut reader)
        .map_err(|e| Error::Message(format!("{}: {e}", path.display())))?;
    let icon = build_geometry(&source, &config.convert);
    log::trace!(
        "{name}: {} subpaths, {} points",
        icon.subpaths.len(),
        icon.point_count()
    );
    if !icon.warnings.is_empty() {
        log::warn!("{}: {}", path.display(), icon.warnings.join(", "));
    }
    emit(name, &icon, &config.emit)
}

/// Run the `svgpoly` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    let mut files = collect_svg_files(Path::new(&config.input_path))?;
    if config.limit > 0 {
        files.truncate(config.limit);
    }
    let out_dir = Path::new(&config.output_dir);
    fs::create_dir_all(out_dir)?;

    let ext = config.emit.format.extension();
    let mut names = Vec::with_capacity(files.len());
    for file in &files {
        let name = icon_name(file);
        let output = convert_file(file, &name, &config)?;
        let target = out_dir.join(format!("{name}.{ext}"));
        write_output(&target, &output)?;
        log::info!("{} -> {}", file.display(), target.display());
        names.push(name);
    }

    if config.emit.format == OutputFormat::C {
        let header = emit_header(&names, &config.emit.prefix, config.convert.upscale);
        let target = out_dir.join(HEADER_FILE_NAME);
        write_output(&target, &header)?;
        log::info!("wrote {} ({} icons)", target.display(), names.len());
    }

    Ok(())
}
