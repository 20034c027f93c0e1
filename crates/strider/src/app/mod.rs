mod bootstrap;
mod controller;

pub(crate) use bootstrap::build_app;
