use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hirc-dec")]
#[command(
    version,
    about = "Convert a HIRC recording to whitespace-delimited decimal bytes"
)]
struct Args {
    /// Recording to convert; the output is written next to it as `<name>-decimal.hirc`
    source: PathBuf,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let conversion = hirc_dec::convert_file(&args.source)?;
    println!(
        "{} ({} bytes)",
        conversion.destination.display(),
        conversion.bytes
    );

    Ok(())
}
