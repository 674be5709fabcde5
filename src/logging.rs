use tracing_subscriber::{
    field::MakeExt,
    filter::{EnvFilter, ParseError},
};

use crate::config;

pub fn set_up(verbosity: u8) -> Result<(), ParseError> {
    let formatter = tracing_subscriber::fmt::format::debug_fn(|writer, field, value| {
        write!(writer, "{}: {:?}", field, value)
    })
    .delimited(", ");

    let level = max_level(verbosity);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!(
            "warn,{}={level},bankist_lib={level}",
            config::BIN_NAME
        ))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .fmt_fields(formatter)
        .init();

    Ok(())
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
