//! namefs CLI Client
//!
//! Command-line interface for expressing interests against a namefs server.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;
use std::time::Duration;

use clap::{Parser, Subcommand};
use namefs::network::{decode_data, encode_interest, read_frame, write_frame, FrameType};
use namefs::response::{DirListing, FileInfo};
use namefs::{Name, NamefsError, Result};

/// namefs CLI
#[derive(Parser, Debug)]
#[command(name = "namefs-cli")]
#[command(about = "CLI for the namefs named-data filesystem server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:6363")]
    server: String,

    /// Routable prefix prepended to paths
    #[arg(short, long, default_value = "/ndn/namefs")]
    prefix: String,

    /// Response timeout in milliseconds
    #[arg(short, long, default_value = "3000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List a directory
    Ls {
        /// Directory path, e.g. /docs
        path: String,
    },

    /// Fetch the file descriptor for a path
    Stat {
        /// File path, e.g. /docs/a.txt
        path: String,

        /// Pin a specific version instead of the current one
        #[arg(short, long)]
        version: Option<u64>,
    },

    /// Fetch one segment of a versioned file
    Get {
        /// File path, e.g. /docs/a.txt
        path: String,

        /// File version
        #[arg(short, long)]
        version: u64,

        /// Segment number
        #[arg(short = 'n', long, default_value = "0")]
        segment: u64,
    },
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let name = build_name(args)?;
    let (response_name, content) = express(args, &name)?;

    match &args.command {
        Commands::Ls { .. } => {
            let listing: DirListing = bincode::deserialize(&content)
                .map_err(|e| NamefsError::Serialization(e.to_string()))?;
            for entry in &listing.entries {
                let kind = if entry.is_directory() { "d" } else { "f" };
                println!("{} {}", kind, entry.path);
            }
        }
        Commands::Stat { .. } => {
            let info: FileInfo = bincode::deserialize(&content)
                .map_err(|e| NamefsError::Serialization(e.to_string()))?;
            println!("name:     {}", response_name);
            println!("version:  {}", info.version);
            println!("size:     {}", info.size);
            println!("segments: {}", info.total_segments);
        }
        Commands::Get { .. } => {
            use std::io::Write;
            std::io::stdout().write_all(&content)?;
        }
    }
    Ok(())
}

/// Build the interest name for the requested operation
fn build_name(args: &Args) -> Result<Name> {
    let (path, version, segment) = match &args.command {
        Commands::Ls { path } => (path, None, None),
        Commands::Stat { path, version } => (path, *version, None),
        Commands::Get {
            path,
            version,
            segment,
        } => (path, Some(*version), Some(*segment)),
    };

    let uri = format!("{}{}", args.prefix.trim_end_matches('/'), path);
    let mut name = Name::from_uri(&uri)?;
    if let Some(v) = version {
        name = name.append_version(v);
    }
    if let Some(s) = segment {
        name = name.append_segment(s);
    }
    Ok(name)
}

/// Send one interest and wait for the matching data frame
fn express(args: &Args, name: &Name) -> Result<(Name, Vec<u8>)> {
    let stream = TcpStream::connect(&args.server)
        .map_err(|e| NamefsError::Network(format!("connect to {}: {}", args.server, e)))?;
    stream.set_read_timeout(Some(Duration::from_millis(args.timeout_ms)))?;

    let mut writer = BufWriter::new(stream.try_clone()?);
    let mut reader = BufReader::new(stream);

    write_frame(&mut writer, &encode_interest(name))?;

    let frame = match read_frame(&mut reader) {
        Ok(frame) => frame,
        Err(NamefsError::Io(ref e))
            if matches!(
                e.kind(),
                std::io::ErrorKind::WouldBlock
                    | std::io::ErrorKind::TimedOut
                    | std::io::ErrorKind::UnexpectedEof
            ) =>
        {
            // Silence is the protocol's negative answer
            return Err(NamefsError::Network(format!(
                "no response for {} (not found or timed out)",
                name
            )));
        }
        Err(e) => return Err(e),
    };

    if frame.frame_type != FrameType::Data {
        return Err(NamefsError::Protocol(format!(
            "expected data frame, got {:?}",
            frame.frame_type
        )));
    }
    decode_data(&frame.payload)
}
