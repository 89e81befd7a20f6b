use anyhow::Context;
use cfftables::tables::context::Tables;
use clap::Parser;

/// plan the best-known cover-free family tables and write them as csv
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// largest d to tabulate
    d_max: usize,
    /// largest row count to tabulate
    t_max: usize,
    /// column-count ceiling
    n_max: u64,
    /// output folder for the d_<k>.csv files
    #[arg(long, default_value = "tables")]
    out: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cfftables::init();
    log::info!(
        "{:<32}d<={} t<={} n<={}",
        "planning tables",
        args.d_max,
        args.t_max,
        args.n_max
    );
    let tables = Tables::create(args.d_max, args.t_max, args.n_max);
    std::fs::create_dir_all(&args.out).context("create output folder")?;
    tables.write_csv(&args.out).context("write csv catalogues")?;
    log::info!("{:<32}{}", "finished", args.out.display());
    Ok(())
}
