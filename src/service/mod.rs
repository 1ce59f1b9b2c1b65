mod bill;
mod completions;
mod format;
mod service;

pub(crate) use completions::CompletionService;
pub(crate) use format::FormatService;
pub(crate) use service::Service;

pub(crate) type ServiceResult = Result<(), anyhow::Error>;
