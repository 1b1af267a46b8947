//! Command-line encoder/decoder for KIS containers.

use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use argh::FromArgs;
use kisimg::{ContainerInfo, DecodeRequest, EncodeRequest, Framing, KisError, SizeRecovery};

#[derive(FromArgs)]
/// Encode images to and decode images from KIS bit-plane containers.
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Encode(EncodeArgs),
    Decode(DecodeArgs),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "encode")]
/// Encode a BMP image into a KIS container.
struct EncodeArgs {
    /// input BMP image (24/32-bit direct color)
    #[argh(positional)]
    input: PathBuf,

    /// output path; `.kis` is appended if missing
    #[argh(positional)]
    output: PathBuf,

    /// wrap the payload in a BMP-compatible header instead of the minimal one
    #[argh(switch)]
    bitmap: bool,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "decode")]
/// Decode a KIS container back into a BMP image.
struct DecodeArgs {
    /// input `.kis` or BMP-wrapped container
    #[argh(positional)]
    input: PathBuf,

    /// output path; `.bmp` is appended if missing
    #[argh(positional)]
    output: PathBuf,

    /// payload bytes are already in plane-stream order (skip the byte-order
    /// reversal)
    #[argh(switch)]
    reversed: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    let result = match args.command {
        Command::Encode(encode) => run_encode(encode),
        Command::Decode(decode) => run_decode(decode),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_encode(args: EncodeArgs) -> Result<(), Box<dyn Error>> {
    let data = fs::read(&args.input)?;
    let grid = kisimg::bmp::decode(&data, None)?;

    let request = if args.bitmap {
        EncodeRequest::bitmap()
    } else {
        EncodeRequest::kis()
    };
    let encoded = request.encode(grid.pixels(), grid.width, grid.height)?;

    let output = force_extension(&args.output, "kis");
    fs::write(&output, encoded)?;
    println!(
        "encoded {}x{} image to {}",
        grid.width,
        grid.height,
        output.display()
    );
    Ok(())
}

fn run_decode(args: DecodeArgs) -> Result<(), Box<dyn Error>> {
    let data = fs::read(&args.input)?;

    let info = ContainerInfo::from_bytes(&data)?;
    match info.framing {
        Framing::Bitmap => println!("input is a BMP-wrapped container"),
        _ => println!("input is a minimal KIS container"),
    }

    let decoded = match DecodeRequest::new(&data)
        .payload_reversed(args.reversed)
        .decode()
    {
        Ok(decoded) => decoded,
        Err(KisError::PayloadSizeMismatch { expected, actual }) => {
            let kind = if actual < expected { "short" } else { "long" };
            eprintln!(
                "payload is {} bytes too {kind}: expected {expected}, got {actual}",
                expected.abs_diff(actual)
            );
            if !confirm_recovery()? {
                return Err("aborting, no output written".into());
            }
            DecodeRequest::new(&data)
                .payload_reversed(args.reversed)
                .with_recovery(SizeRecovery::PadOrTruncate)
                .decode()?
        }
        Err(err) => return Err(err.into()),
    };

    let bmp = kisimg::bmp::encode(decoded.pixels(), decoded.width, decoded.height)?;
    let output = force_extension(&args.output, "bmp");
    fs::write(&output, bmp)?;
    println!(
        "decoded {}x{} image to {}",
        decoded.width,
        decoded.height,
        output.display()
    );
    Ok(())
}

/// Ask on stdin whether to pad/truncate the payload. Anything but an
/// answer starting with `y` declines.
fn confirm_recovery() -> Result<bool, io::Error> {
    eprintln!(
        "If the expected size is very large, this should NOT be done; \
         likely the image needs converting to a proper BMP first."
    );
    eprint!("Attempt to truncate/pad the payload? [y/N] ");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim_start().to_ascii_lowercase().starts_with('y'))
}

fn force_extension(path: &Path, extension: &str) -> PathBuf {
    let matches = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if matches {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }
}
