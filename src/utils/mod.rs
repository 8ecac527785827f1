pub(crate) mod logging;

pub(crate) use logging::init_logging;
