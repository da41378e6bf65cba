//! Generate a full PL2 container from a GIMP palette file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::process::ExitCode;

use pl2::gpl::GimpPalette;
use pl2::Pl2;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(gpl_path), Some(pl2_path), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: pl2-from-gpl <palette.gpl> <output.pl2>");
        return ExitCode::from(2);
    };

    if let Err(error) = run(&gpl_path, &pl2_path) {
        eprintln!("pl2-from-gpl: {}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(gpl_path: &str, pl2_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(gpl_path)?);
    let palette = GimpPalette::read(&mut reader)?;

    let pl2 = Pl2::with_palette(palette.colors());

    let mut writer = BufWriter::new(File::create(pl2_path)?);
    pl2.encode(&mut writer)?;
    writer.flush()?;

    Ok(())
}
