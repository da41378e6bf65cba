//! Extract the base palette of a PL2 container as a GIMP palette file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::process::ExitCode;

use pl2::gpl::GimpPalette;
use pl2::Pl2;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(pl2_path), gpl_path, None) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: pl2-to-gpl <input.pl2> [palette.gpl]");
        return ExitCode::from(2);
    };

    if let Err(error) = run(&pl2_path, gpl_path.as_deref()) {
        eprintln!("pl2-to-gpl: {}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(pl2_path: &str, gpl_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(pl2_path)?);
    let pl2 = Pl2::decode(&mut reader)?;

    let palette = GimpPalette::from_palette(&pl2.base_palette);

    // Without an output path, the palette goes to standard output.
    match gpl_path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            palette.write(&mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            palette.write(&mut stdout.lock())?;
        }
    }

    Ok(())
}
