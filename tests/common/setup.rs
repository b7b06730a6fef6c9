use hive_engine::prelude::*;

pub fn setup() -> Result<()>
{
    env_logger::try_init().map_err(|_| Error::new(Kind::Internal, "Could not initialize logger.".into()))
}
