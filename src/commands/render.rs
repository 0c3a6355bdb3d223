use std::path::Path;

use anyhow::Result;

use crate::input::read_options;

pub fn run(input: Option<&Path>) -> Result<()> {
    let options = read_options(input)?;
    let document = calevent_core::render_document(&options)?;

    // The document has no trailing line ending of its own
    print!("{}\r\n", document);

    Ok(())
}
