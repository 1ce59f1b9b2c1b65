mod amount;
mod bill;
mod config;
mod error;

pub(crate) use amount::parse_amount;
pub(crate) use amount::Amount;
pub(crate) use bill::BillRequest;
pub(crate) use bill::DEFAULT_NUM_PEOPLE;
pub(crate) use config::Config;
pub(crate) use error::BillError;
