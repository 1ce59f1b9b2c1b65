use anyhow::Result;

use crate::{
    cli::Cli,
    domain::{BillRequest, DEFAULT_NUM_PEOPLE},
    ConfigProvider,
};

use super::format::FormatService;

pub(super) struct BillService<'c, Config>
where
    Config: ConfigProvider,
{
    config: &'c Config,
}

impl<'c, Config> BillService<'c, Config>
where
    Config: ConfigProvider,
{
    pub fn new(config: &'c Config) -> BillService<'c, Config> {
        BillService { config }
    }

    pub fn run(&self, args: Cli) -> Result<()> {
        let request = self.request(args);
        request.validate()?;

        let amount = request.amount_owed()?;
        tracing::debug!(amount = amount.value(), "computed amount owed");
        FormatService::amount(amount);
        Ok(())
    }

    /// Builds the request, taking the head count from the flag, then the
    /// config file, then the default.
    fn request(&self, args: Cli) -> BillRequest {
        if !args.rest.is_empty() {
            tracing::warn!("ignoring extra positional arguments: {:?}", args.rest);
        }

        let num_people = args
            .num_people
            .or_else(|| self.config.num_people())
            .unwrap_or(DEFAULT_NUM_PEOPLE);
        let request = BillRequest::new(args.principal, args.splits, num_people);
        tracing::debug!(
            principal = ?request.principal(),
            splits = ?request.splits(),
            num_people = request.num_people(),
            "resolved bill request"
        );
        request
    }
}
