//! Fold command implementation

use bundle_manifest::error::Result;
use bundle_manifest::fold_lines;

use super::helpers::read_text;
use crate::cli::FoldArgs;

pub fn run(args: FoldArgs) -> Result<()> {
    let text = read_text(&args.path)?;
    // CRLF input is folded as LF
    print!("{}", fold_lines(&text.replace("\r\n", "\n")));
    Ok(())
}
