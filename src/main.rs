use failure::{bail, format_err, Error};
use log::*;
use simple_logger;

use std::env;
use std::str::FromStr;

use minmax::*;

const USAGE: &str = "usage: minmax <min|max|min_t|max_t> <x> <y>";

fn main() -> Result<(), Error> {
    let level = match env::var("MINMAX_LOG") {
        Ok(v) => Level::from_str(&v).map_err(|_| format_err!("bad MINMAX_LOG value: {}", v))?,
        Err(_) => Level::Info,
    };
    simple_logger::init_with_level(level)?;
    info!("starting");

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match run(&args) {
        Ok(v) => v,
        Err(e) => {
            error!("{}", e);
            return Err(e);
        }
    };
    println!("{}", result);
    info!("done");
    Ok(())
}

fn run(args: &[String]) -> Result<String, Error> {
    if args.len() != 3 {
        bail!(USAGE);
    }
    let (op, x, y) = (args[0].as_str(), &args[1], &args[2]);
    debug!("{}({}, {})", op, x, y);
    let out = match op {
        "min" => min(x.parse::<i64>()?, y.parse::<i64>()?).to_string(),
        "max" => max(x.parse::<i64>()?, y.parse::<i64>()?).to_string(),
        "min_t" => try_min_t::<i32, _, _>(x.parse::<i64>()?, y.parse::<i64>()?)?.to_string(),
        "max_t" => try_max_t::<i32, _, _>(x.parse::<i64>()?, y.parse::<i64>()?)?.to_string(),
        _ => bail!("unknown operation {:?}; {}", op, USAGE),
    };
    Ok(out)
}
