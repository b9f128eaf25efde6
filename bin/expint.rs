use expint::reference::{self, Group};
use expint::expint;

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use snafu::{ensure, ResultExt, Snafu};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;


#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Parameters {
    #[serde(default = "param_defaults::orders")]
    orders: Vec<i32>,

    #[serde(default)]
    x: Grid,

    #[serde(default = "param_defaults::precision")]
    precision: usize,               // digits after the decimal point

    #[serde(default = "param_defaults::tolerance")]
    tolerance: f64,                 // relative, for --check
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            orders: param_defaults::orders(),
            x: Grid::default(),
            precision: param_defaults::precision(),
            tolerance: param_defaults::tolerance(),
        }
    }
}


#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    #[serde(default = "param_defaults::grid_start")]
    start: f64,

    #[serde(default = "param_defaults::grid_end")]
    end: f64,

    #[serde(default = "param_defaults::grid_steps")]
    steps: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            start: param_defaults::grid_start(),
            end: param_defaults::grid_end(),
            steps: param_defaults::grid_steps(),
        }
    }
}


mod param_defaults {
    pub fn orders() -> Vec<i32> {
        vec![0, 1, 2, 3, 5, 10]
    }

    pub fn precision() -> usize {
        17
    }

    pub fn tolerance() -> f64 {
        1e-12
    }

    pub fn grid_start() -> f64 {
        0.0
    }

    pub fn grid_end() -> f64 {
        4.0
    }

    pub fn grid_steps() -> usize {
        41
    }
}


#[derive(Debug, Snafu)]
enum AppError {
    #[snafu(display("could not open parameter file '{}': {}", path.display(), source))]
    OpenParams { path: PathBuf, source: std::io::Error },

    #[snafu(display("invalid parameter file '{}': {}", path.display(), source))]
    ParseParams { path: PathBuf, source: serde_yaml::Error },

    #[snafu(display("invalid x grid: {}", reason))]
    InvalidGrid { reason: &'static str },

    #[snafu(display("{} of {} reference cases failed", failed, total))]
    CheckFailed { failed: usize, total: usize },
}


fn load_parameters(path: &Path) -> Result<Parameters, AppError> {
    let file = std::fs::File::open(path).context(OpenParamsSnafu { path })?;
    let params: Parameters = serde_yaml::from_reader(file).context(ParseParamsSnafu { path })?;

    info!(path = %path.display(), "loaded parameters");
    Ok(params)
}

fn build_grid(grid: &Grid) -> Result<Array1<f64>, AppError> {
    ensure!(grid.steps > 0, InvalidGridSnafu { reason: "steps must be positive" });
    ensure!(grid.start.is_finite() && grid.end.is_finite(), InvalidGridSnafu { reason: "bounds must be finite" });
    ensure!(grid.start <= grid.end, InvalidGridSnafu { reason: "start must not exceed end" });

    Ok(Array1::linspace(grid.start, grid.end, grid.steps))
}

fn compute_table(orders: &[i32], xs: &Array1<f64>) -> Array2<f64> {
    Array2::from_shape_fn((orders.len(), xs.len()), |(i, j)| expint(orders[i], xs[j]))
}


fn print_point(n: i32, x: f64, precision: usize) {
    println!("expint({}, {}) = {:.*}", n, x, precision, expint(n, x));
}

fn print_table(orders: &[i32], xs: &Array1<f64>, table: &Array2<f64>, precision: usize) {
    let width = precision + 8;

    print!("{:>10}", "x");
    for n in orders {
        print!(" {:>width$}", format!("E_{}(x)", n), width = width);
    }
    println!();

    for (j, x) in xs.iter().enumerate() {
        print!("{:>10.4}", x);
        for value in table.column(j) {
            print!(" {:>width$.prec$}", value, width = width, prec = precision);
        }
        println!();
    }
}

fn run_reference(params: &Parameters, check: bool) -> Result<(), AppError> {
    let mut failed: usize = 0;
    let mut group = None;

    println!("test expint(n, x):");

    for case in reference::CASES {
        if group != Some(case.group) {
            println!("* {}", case.group.describe());
            group = Some(case.group);
        }

        let value = expint(case.n, case.x);
        let ok = case.check(value, params.tolerance);

        match case.group {
            Group::Illegal => print!("  + expint({}, {:.1}) = {}", case.n, case.x, value),
            _ => print!("  + expint({}, {:.1}) = {:.*} (should be {})",
                        case.n, case.x, params.precision, value, case.expected),
        }

        if check {
            print!(" [{}]", if ok { "ok" } else { "FAILED" });
        }
        println!();

        if !ok {
            failed += 1;
            debug!(n = case.n, x = case.x, value, expected = %case.expected, "reference mismatch");
        }
    }

    ensure!(!check || failed == 0, CheckFailedSnafu { failed, total: reference::CASES.len() });
    Ok(())
}

fn plot_table(orders: &[i32], xs: &Array1<f64>, table: &Array2<f64>) {
    use gnuplot::{AutoOption, AxesCommon, Caption, Figure};

    let mut fig = Figure::new();
    let ax = fig.axes2d();
    ax.set_x_range(AutoOption::Fix(xs[0]), AutoOption::Fix(xs[xs.len() - 1]));
    ax.set_y_range(AutoOption::Fix(0.0), AutoOption::Fix(2.0));

    for (n, row) in orders.iter().zip(table.outer_iter()) {
        let (x, y): (Vec<f64>, Vec<f64>) = xs.iter()
            .zip(row.iter())
            .filter(|(_, v)| v.is_finite())
            .map(|(x, v)| (*x, *v))
            .unzip();

        let caption = format!("E_{}(x)", n);
        ax.lines(x, y, &[Caption(&caption)]);
    }

    if let Err(err) = fig.show() {
        error!("failed to launch gnuplot: {:?}", err);
    }
}


fn run(matches: &ArgMatches) -> Result<(), AppError> {
    let params = match matches.get_one::<PathBuf>("params") {
        Some(path) => Some(load_parameters(path)?),
        None => None,
    };

    let check = matches.get_flag("check");
    let show = matches.get_flag("show");
    let point = matches.get_one::<i32>("n").copied().zip(matches.get_one::<f64>("x").copied());

    let table_requested = params.is_some();
    let params = params.unwrap_or_default();

    if let Some((n, x)) = point {
        print_point(n, x, params.precision);
    } else if table_requested || show {
        let xs = build_grid(&params.x)?;
        let table = compute_table(&params.orders, &xs);

        info!(orders = params.orders.len(), points = xs.len(), "evaluated table");

        if table_requested {
            print_table(&params.orders, &xs, &table, params.precision);
        }

        if show {
            plot_table(&params.orders, &xs, &table);
        }
    }

    if check || (point.is_none() && !table_requested && !show) {
        run_reference(&params, check)?;
    }

    Ok(())
}


fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn app() -> Command<'static> {
    Command::new("Generalized exponential integral E_n(x)")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .allow_negative_numbers(true)
        .arg(Arg::new("n")
                .help("The order of the integral")
                .value_name("N")
                .value_parser(clap::value_parser!(i32))
                .requires("x"))
        .arg(Arg::new("x")
                .help("The argument in the integrand")
                .value_name("X")
                .value_parser(clap::value_parser!(f64)))
        .arg(Arg::new("params")
                .help("The table parameters to use (as yaml file)")
                .value_name("PARAMS")
                .short('p')
                .long("params")
                .value_parser(clap::value_parser!(PathBuf)))
        .arg(Arg::new("check")
                .help("Compare against the reference values and fail on mismatch")
                .short('c')
                .long("check")
                .action(ArgAction::SetTrue))
        .arg(Arg::new("show")
                .help("Whether to plot the table or not")
                .short('s')
                .long("show")
                .action(ArgAction::SetTrue))
        .arg(Arg::new("verbose")
                .help("Increase logging verbosity")
                .short('v')
                .action(ArgAction::Count))
}

fn main() {
    let matches = app().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        error!("{}", err);
        std::process::exit(1);
    }
}
