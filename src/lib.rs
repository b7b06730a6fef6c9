pub(crate) mod error;
pub mod hive;
pub mod options;
pub mod replay;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log;

    pub use crate::{
        error::{Error, Kind, Result},
        hive::*,
        options::{ExpansionOptions, Options},
        replay::{GameRecord, ReplayError, ReplayStore},
    };
}
