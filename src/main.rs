use anyhow::Result;
use clap::Parser;
use launcher_icons::output_plan::{self, OutputPlan};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "launcher-icons",
    about = "Render the split-circle launcher icon for every Android mipmap density"
)]
struct Args {
    /// Android resource directory to write into.
    #[clap(short, long, value_name = "DIR", default_value = "android/app/src/main/res")]
    output: PathBuf,

    /// Print the files that would be generated as JSON and exit.
    #[clap(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        println!("{}", OutputPlan::android().to_json()?);
        return Ok(());
    }

    let written = output_plan::generate_all(&args.output)?;
    println!("\nDone! Generated {} files.", written.len());
    Ok(())
}
