use anyhow::Result;
use vergen::EmitBuilder;

// Short SHA only; the CLI prints it with --debug.
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
