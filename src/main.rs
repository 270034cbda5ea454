use miette::{miette, IntoDiagnostic, WrapErr};

use weatherdat::{observations, smallest_spread};

fn main() -> miette::Result<()> {
    let file = std::env::args()
        .nth(1)
        .ok_or_else(|| miette!("usage: weatherdat <file>"))?;

    let content = std::fs::read_to_string(&file)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not read `{file}`"))?;

    match smallest_spread(observations(content.lines())) {
        Some(observation) => println!(
            "day {} has the smallest temperature spread ({:.1})",
            observation.day,
            observation.spread()
        ),
        None => println!("`{file}` contains no parseable observations"),
    }

    Ok(())
}
