use crate::{cli::Cli, ConfigProvider};

use super::{bill::BillService, ServiceResult};

pub struct Service<Config>
where
    Config: ConfigProvider,
{
    config: Config,
}

impl<Config> Service<Config>
where
    Config: ConfigProvider,
{
    pub fn new(config: Config) -> Service<Config> {
        Service { config }
    }

    pub fn run(&self, args: Cli) -> ServiceResult {
        BillService::new(&self.config).run(args)
    }
}
