/* ************************************************************************ **
** This file is part of fixed-linalg, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Walks through the vector and matrix API, printing each result.

#[macro_use]
extern crate log;

use fixed_linalg::{Matrix, RowVector, ColumnVector};

use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() {
    wrap_result_main(|| {
        let matches = clap::App::new("fixed-linalg-demo")
            .about("Exercises the fixed-size vector and matrix types.")
            .args(&[
                clap::Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .help("also show trace-level log messages"),
                clap::Arg::with_name("log_file")
                    .long("log-file")
                    .value_name("PATH")
                    .takes_value(true)
                    .help("copy log messages to this file"),
            ])
            .get_matches();

        setup_global_logger(matches.is_present("verbose"), matches.value_of("log_file"))?;
        run_vectors();
        run_matrices();
        Ok(())
    });
}

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> Result<()>,
{
    main().unwrap_or_else(|e| {
        // the logger may not be up yet, so don't rely on it
        eprintln!("error: {}", e);
        error!("{}", e);
        std::process::exit(1);
    });
}

fn setup_global_logger(verbose: bool, path: Option<&str>) -> Result<()> {
    use fern::colors::{Color, ColoredLevelConfig};
    use log::LevelFilter;
    use std::time::Instant;

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Red)
        .info(Color::Cyan)
        .debug(Color::Yellow)
        .trace(Color::White);

    let start = Instant::now();
    let mut fern = fern::Dispatch::new()
        .format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_millis(),
                record.target(),
                colors.color(record.level()),
                message))
        })
        .level(LevelFilter::Info)
        .level_for("fixed_linalg", match verbose {
            true => LevelFilter::Trace,
            false => LevelFilter::Debug,
        })
        .chain(std::io::stdout());

    if let Some(path) = path {
        fern = fern.chain(fern::log_file(Path::new(path))?);
    }

    fern.apply().map_err(|e| e.to_string())?;
    Ok(())
}

fn run_vectors() {
    let mut a = RowVector::from_array([-5.0f64, -6.0]);
    let b = RowVector::<f64, 2>::filled(2.0);
    let c = ColumnVector::from_array([1.0f64, 2.0, 3.0, 4.0, 5.0]);
    let d = c.transpose();

    info!("row vector a");
    println!("{}", a);
    println!("{}", a.magnitude());
    println!("{}", a.normal().magnitude());
    a.normalize();
    println!("{}", a);

    info!("row vector b");
    println!("{}", b);

    info!("a + b");
    println!("{}", a + b);

    info!("column vector c, scaled");
    println!("{}", c * 2.0);

    info!("c transposed, scaled");
    println!("{}", d * 2.0);

    info!("normalizing the zero vector");
    match RowVector::<f64, 3>::default().try_normal() {
        Ok(v) => println!("{}", v),
        Err(e) => warn!("{}", e),
    }
}

fn run_matrices() {
    let big = Matrix::<f64, 3, 3>::filled(5.0);
    let small = Matrix::<f64, 2, 2>::resized_from(&big);

    info!("2x2 copied from a 3x3 of fives");
    println!("{}", small);

    info!("3x3 copied from a 2x2 of sevens");
    println!("{}", Matrix::<f64, 3, 3>::resized_from(&Matrix::<f64, 2, 2>::filled(7.0)));

    let m: Matrix<f64, 2, 3> = Matrix::from_fn(|r, c| (r * 3 + c) as f64);
    info!("m (2x3) times its transpose");
    println!("{}", m * m.transpose());

    info!("(m + 1) / 2");
    println!("{}", (m + 1.0) / 2.0);
}
