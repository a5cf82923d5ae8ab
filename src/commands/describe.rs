use crate::cli::{Cli, MafInput};
use crate::maf::{AlleleSummary, MafLoader, MafSchema, MafTable};
use crate::utils::Result;
use std::io::{self, BufWriter, Write};
use std::time;

pub fn describe(args: Cli) -> Result<()> {
    let start_timer = time::Instant::now();

    let table = load_table(&args.input()?)?;
    let summary = AlleleSummary::from_table(&table).map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_report(&mut writer, &summary)?;

    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}

pub fn load_table(input: &MafInput) -> Result<MafTable> {
    let loader = MafLoader::new(MafSchema::default());
    let table = match input {
        MafInput::File(path) => loader.load_file(path),
        MafInput::Dir(dir) => loader.load_dir(dir),
    };
    table.map_err(|e| e.to_string())
}

pub fn write_report<W: Write>(writer: &mut W, summary: &AlleleSummary) -> Result<()> {
    write!(writer, "{}", summary)
        .and_then(|_| writer.flush())
        .map_err(|e| format!("Failed to write report: {}", e))
}
