use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use strainer::filter::{filter, LazyFilter};
use strainer::hero::{default_roster, load_roster, names, Hero};
use strainer::ops::{add, calculate, subtract, MathOp, MathOpGeneric};
use strainer::predicate::{matches, not};
use strainer::settings::Settings;
use strainer::timing::{as_millis_f64, measure_value, measure_void, report, Stopwatch};
use strainer::workload::{calculate_some_result, count_to};

fn main() -> ExitCode {
    // settings come first since they carry the fallback log filter
    let settings = Settings::load();
    let log = settings.as_ref().map(|s| s.log.clone()).unwrap_or_else(|_| Settings::default().log);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log)))
        .init();

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "could not load settings");
            return ExitCode::FAILURE;
        }
    };
    info!(?settings, "starting");

    function_values();
    let roster = match &settings.roster {
        Some(path) => match load_roster(path) {
            Ok(roster) => roster,
            Err(e) => {
                error!(error = %e, path = %path.display(), "could not load roster");
                return ExitCode::FAILURE;
            }
        },
        None => default_roster(),
    };
    if let Err(e) = filtering(&roster) {
        error!(error = %e, "filtering failed");
        return ExitCode::FAILURE;
    }
    timing(settings.workload_iterations);
    ExitCode::SUCCESS
}

fn function_values() {
    let f: MathOp = subtract;
    println!("{}", f(20, 3));
    let g: MathOp = add;
    println!("{}", g(20, 3));

    // the strategy is passed in as a value
    println!("{}", calculate(23, 3, subtract));
    println!("{}", calculate(12, 3, |x, y| x * y));

    let or: MathOpGeneric<bool> = |x, y| x || y;
    println!("{}", calculate(true, false, or));
    println!("{}", calculate("A".to_owned(), "B".to_owned(), |x, y| x + &y));
}

fn filtering(roster: &[Hero]) -> strainer::Result<()> {
    println!("{}", names(filter(roster, |h| h.has_last_name())));
    println!("{}", names(roster.iter().lazy_filter(|h| h.can_fly())));
    println!("{}", names(filter(roster, not(matches::<&Hero>("^H")?))));

    let villains: Vec<_> = filter(["Homelander", "The Deep", "Stormfront"], matches::<&str>("^H")?).collect();
    println!("{}", villains.join(", "));
    let evens: Vec<_> = filter([1, 2, 3, 4, 5], |n| n % 2 == 0).map(|n| n.to_string()).collect();
    println!("{}", evens.join(", "));
    Ok(())
}

fn timing(iterations: u64) {
    let mut watch = Stopwatch::start_new();
    count_to(iterations);
    println!("{}", as_millis_f64(watch.stop()));

    let elapsed = measure_void(|| count_to(iterations));
    println!("{}", report("count_to", elapsed));

    let (result, elapsed) = measure_value(|| calculate_some_result(iterations));
    println!("{}", report("calculate_some_result", elapsed));
    println!("The result is {result}");
}
