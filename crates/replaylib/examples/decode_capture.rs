//! Decode a capture file and print one summary line per replay command.
//!
//! Works on both Sub-GHz `.sub` captures and infrared `.ir` remote files;
//! the file is sniffed with each decoder's structural validator.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p replaylib --example decode_capture -- /path/to/doorbell.sub
//! ```

use anyhow::{bail, Context};

use replaylib::{infrared, subghz};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: decode_capture <file>")?;
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {path}"))?;

    if subghz::is_valid(&content) {
        let commands = subghz::decode_file(&content, &path)?;
        println!("{}: {} replay command(s)", path, commands.len());
        for line in subghz::summarize(&commands) {
            println!("  {line}");
        }
    } else if infrared::is_valid(&content) {
        let commands = infrared::decode_file(&content, &path)?;
        println!("{}: {} button(s)", path, commands.len());
        for name in infrared::function_names(&commands) {
            println!("  {name}");
        }
    } else {
        bail!("{path} is not a recognized capture file");
    }

    Ok(())
}
