//! Command line interface for building the isochart dataset

mod cli;

// standard library
use std::error::Error;
use std::process::ExitCode;

// isochart crates
use isochart::dataset::{assemble, merge, AbundanceTable, ElementTable};
use isochart::decay::{run_batch, Batch, Criteria};
use isochart::ensdf::{Archive, ElementIndex, Iaea, NuclideSource};

// external crates
use clap::Parser;
use cli::{BuildArgs, Cli, Command, PrefetchArgs};
use log::{error, info};

type BoxResult<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Build(args) => build(args),
        Command::Prefetch(args) => prefetch(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) -> BoxResult<()> {
    stderrlog::new()
        .modules([
            "isochart",
            "isochart_dataset",
            "isochart_decay",
            "isochart_ensdf",
        ])
        .verbosity(cli.verbose as usize + 2)
        .quiet(cli.quiet)
        .show_module_names(false)
        .init()?;
    Ok(())
}

fn build(args: BuildArgs) -> BoxResult<()> {
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()?;
    }

    let elements = ElementTable::read_json(&args.elements)?;
    let abundances = AbundanceTable::read_json(&args.abundance)?;
    let index = elements.index();

    let criteria = Criteria {
        min_branch: args.min_branch,
        tolerance: args.tolerance,
    };

    let progress = !args.no_progress;
    let batch = match &args.source.archive {
        Some(path) => {
            info!("Reading nuclides from {}", path.display());
            process(&Archive::read(path)?, &index, &criteria, progress)?
        }
        None => {
            info!("Querying the IAEA chart of nuclides");
            process(&Iaea::connect()?, &index, &criteria, progress)?
        }
    };
    batch.log_summary();

    let isotopes = merge(batch.records, &abundances, &index)?;
    assemble(&elements, isotopes).write_json(&args.output, args.pretty)?;
    Ok(())
}

fn process<S: NuclideSource>(
    source: &S,
    index: &ElementIndex,
    criteria: &Criteria,
    progress: bool,
) -> BoxResult<Batch> {
    let ids = source.indexed()?;
    Ok(run_batch(source, &ids, index, criteria, progress))
}

fn prefetch(args: PrefetchArgs) -> BoxResult<()> {
    let archive = Iaea::connect()?.prefetch(!args.no_progress);

    let binary = args.binary || args.output.extension().is_some_and(|ext| ext == "bin");
    if binary {
        archive.write_binary(&args.output)?;
    } else {
        archive.write_json(&args.output)?;
    }

    info!(
        "Wrote {} nuclides to {}",
        archive.len(),
        args.output.display()
    );
    Ok(())
}
