use std::path::Path;

use anyhow::{bail, Context, Result};
use itertools::Itertools;

use tarpack_lib::prelude::*;

/// Pack the given files and directories into a ustar archive. Inputs are
/// stored under the names given on the command line, so pass
/// archive-relative, forward-slash paths.
#[tokio::main]
async fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect_vec();
    let (output, inputs) = match args.split_first() {
        Some((output, inputs)) if !inputs.is_empty() => (output, inputs),
        _ => bail!("usage: tarpack <output.tar> <input>..."),
    };

    let mut builder = ArchiveBuilder::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            builder.add_dir(input.clone());
        } else {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("unable to open {}", input))?;
            builder.add_file(input.clone(), file);
        }
    }

    let count = builder.len();
    let archive = builder.build().await?;
    tokio::fs::write(output, &archive)
        .await
        .with_context(|| format!("unable to write {}", output))?;

    println!(
        "{}: {} entries, {} bytes ({})",
        output,
        count,
        archive.len(),
        CONTENT_TYPE
    );
    Ok(())
}
