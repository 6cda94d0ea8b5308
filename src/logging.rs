//! Process-wide logger: syslog for installed daemons, stderr while
//! developing.

#[cfg(not(debug_assertions))]
pub fn init_logging() -> Result<(), String> {
    use syslog::{BasicLogger, Facility, Formatter3164};

    // only 3164 has log crate integration
    let formatter = Formatter3164 {
        facility: Facility::LOG_DAEMON,
        process: "notefuld".into(),
        ..Default::default()
    };
    let logger = syslog::unix(formatter)
        .map_err(|e| format!("cannot connect to syslog: {e}"))?;
    log::set_boxed_logger(Box::new(BasicLogger::new(logger)))
        .map_err(|e| format!("cannot install the syslog logger: {e}"))?;
    log::set_max_level(log::LevelFilter::Info);
    Ok(())
}

#[cfg(debug_assertions)]
pub fn init_logging() -> Result<(), String> {
    use env_logger::Env;

    env_logger::Builder::from_env(Env::default().default_filter_or("noteful=debug,info"))
        .try_init()
        .map_err(|e| format!("cannot install the stderr logger: {e}"))
}
