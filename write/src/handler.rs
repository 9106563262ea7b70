use crate::{
    auth,
    config::Config,
    event::{Event, Response},
    storage::{ObjectStore, PutObject},
};
use futures::{future, Future};
use std::convert::Infallible;

pub type ResponseFuture = Box<dyn Future<Item = Response, Error = Infallible> + Send>;

/// Writes the test object on behalf of verified requests
pub struct Writer<S> {
    config: Config,
    store: S,
}

impl<S> Writer<S>
where
    S: ObjectStore,
{
    pub fn new(config: Config, store: S) -> Self {
        Writer { config, store }
    }

    /// Resolves to exactly one response per event. Storage failures are
    /// reported in the message of a 200 response, never as an error.
    pub fn handle(&self, event: Event) -> ResponseFuture {
        if let Some(secret) = &self.config.token {
            if let Err(err) = auth::verify(event.body.as_ref().map(String::as_str), secret) {
                log::warn!("rejecting request: {}", err);
                return Box::new(future::ok(Response::forbidden()));
            }
        }

        let bucket = self.config.bucket.clone();
        let object = PutObject::fixed(bucket.as_str());
        log::info!("writing {} to {}", object.key, object.bucket);
        Box::new(self.store.put_object(object).then(move |result| {
            let message = match result {
                Ok(receipt) => {
                    log::info!("wrote to {} {}", bucket, receipt);
                    format!("Wrote successfully to {} {}", bucket, receipt)
                }
                Err(err) => {
                    log::error!("failed to write to {}: {:?}", bucket, err);
                    format!("Something went wrong {}", err)
                }
            };
            Ok::<_, Infallible>(Response::ok(message, &event))
        }))
    }
}
