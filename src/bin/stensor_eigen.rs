use mechtensor::prelude::*;
use mechtensor::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "stensor_eigen",
    about = "Computes the eigenvalues and eigenvectors of a symmetric tensor"
)]
struct Options {
    /// Space dimension (1, 2 or 3)
    ndim: usize,

    /// Components ordered as xx, yy, zz, √2·xy, √2·xz, √2·yz (3, 4 or 6 values)
    #[structopt(allow_hyphen_values = true)]
    components: Vec<f64>,

    /// JSON file with the solver settings
    #[structopt(long)]
    settings: Option<String>,

    /// Ordering of the eigenvalues (unsorted, ascending or descending)
    #[structopt(long)]
    ordering: Option<EigenOrdering>,

    /// Prints the results in JSON format
    #[structopt(long)]
    json: bool,
}

fn run<const N: usize>(options: &Options, settings: &Settings) -> Result<(), StrError>
where
    Stensor<N>: SymmetricEigenSolver,
{
    let s = Stensor::<N>::from_slice(&options.components)?;
    let res = s.eigen_decompose(true, settings);
    if options.json {
        let json = serde_json::to_string_pretty(&res).map_err(|_| "cannot serialize the results")?;
        println!("{}", json);
        return Ok(());
    }
    println!("eigenvalues = {:?}", res.values);
    match res.vectors {
        Some(v) => {
            println!("eigenvectors (columns) =");
            for row in &v {
                println!("  {:>22.15e} {:>22.15e} {:>22.15e}", row[0], row[1], row[2]);
            }
        }
        None => println!("eigenvectors are undefined"),
    }
    Ok(())
}

fn main() -> Result<(), StrError> {
    // logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // parse options
    let options = Options::from_args();

    // settings
    let mut settings = match &options.settings {
        Some(path) => Settings::read_json(path)?,
        None => Settings::new(),
    };
    if let Some(ordering) = options.ordering {
        settings.set_ordering(ordering)?;
    }

    // decompose
    match options.ndim {
        1 => run::<1>(&options, &settings),
        2 => run::<2>(&options, &settings),
        3 => run::<3>(&options, &settings),
        _ => Err("the space dimension must be 1, 2 or 3"),
    }
}
