/// Simple example demonstrating how to use the interestring library

use anyhow::Result;
use interestring::utils::output_formatter::format_results;
use interestring::{load_tld_set, Annotator};

fn main() -> Result<()> {
    // Lines as a strings tool would print them
    let lines = [
        "FLOSS static ASCII strings",
        "(ascii) ADVAPI32.dll",
        "(ascii) RegSetValueExA",
        r"(16-le) Software\Microsoft\Windows\CurrentVersion\Run",
        "(ascii) http://update.example.com/gate.php",
        "(stack16) %s\\%s.tmp",
    ];

    let suffixes = load_tld_set(None)?;
    let annotator = Annotator::new(&suffixes);

    let results = annotator.annotate_strings(&lines, false, 1)?;
    for row in format_results(&results, 60, false) {
        println!("{}", row);
    }

    Ok(())
}
