use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use trilogic::tasks;
use trilogic::trit::Trit;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let mut task = tasks::neutral_or_x_equals_true();
    info!("task = {}", task);

    let free = task.value_slots()[1];
    for value in Trit::ALL {
        task.set_value(free, value)?;
        let result = task.evaluate()?;
        info!("X = {} gives {} (answer: {})", value, result, task.answer());
        if result == task.answer() {
            info!("X = {} solves the task", value);
        }
    }

    Ok(())
}
