use lambda_runtime::{error::HandlerError, lambda, Context};
use rusoto_core::Region;
use std::error::Error;
use tokio::runtime::Runtime;

mod auth;
mod config;
mod event;
mod handler;
mod storage;

use crate::{
    config::Config,
    event::{Event, Response},
    handler::Writer,
    storage::S3Store,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = Config::from_env()?;
    if config.token.is_none() {
        log::warn!("slackToken is not set, requests will not be verified");
    }
    log::info!("writing to bucket {}", config.bucket);

    let writer = Writer::new(config, S3Store::new(Region::default()));
    let mut rt = Runtime::new()?;
    let handler = move |event: Event, _: Context| -> Result<Response, HandlerError> {
        match rt.block_on(writer.handle(event)) {
            Ok(response) => Ok(response),
            Err(never) => match never {},
        }
    };
    lambda!(handler);
    Ok(())
}
