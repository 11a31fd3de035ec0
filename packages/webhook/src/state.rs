use std::sync::Arc;

use roppou_resolver::Resolver;

use crate::line::ReplyClient;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub reply_client: ReplyClient,
    pub channel_secret: Arc<str>,
}
