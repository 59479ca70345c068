pub mod assess;
pub mod schema;
pub mod slabs;

use crate::input::TaxReturnInput;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a tax return input record (JSON) from a file, or stdin with "-"
pub fn read_input(path: &Path) -> anyhow::Result<TaxReturnInput> {
    let input = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else {
        read_from_file(path)?
    };
    input.income.validate()?;
    Ok(input)
}

fn read_from_file(path: &Path) -> anyhow::Result<TaxReturnInput> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

fn read_from_stdin() -> anyhow::Result<TaxReturnInput> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    Ok(serde_json::from_slice(&buffer)?)
}
