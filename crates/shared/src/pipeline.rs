use std::sync::Arc;

use futures::future;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, warn};

use crate::converter::ItemConverter;
use crate::hackernews::ItemSource;
use crate::models::Story;

/// Fans out one fetch-and-convert task per story id and funnels the
/// successful conversions into a single channel.
///
/// A task that fails at any stage is logged and dropped; it never aborts the
/// rest of the batch. The receiver therefore yields at most one story per
/// id, in completion order, and closes only once every task has finished.
pub struct StoryCollector<S> {
    source: Arc<S>,
    converter: ItemConverter,
}

impl<S> StoryCollector<S>
where
    S: ItemSource + 'static,
{
    pub fn new(source: Arc<S>, converter: ItemConverter) -> Self {
        Self { source, converter }
    }

    /// Spawns one task per id, carrying the id's 1-based position in `ids`
    /// as the story rank. Returns the receiving end of the result channel;
    /// stories arrive in completion order, not rank order.
    pub fn spawn(&self, ids: Vec<i64>) -> UnboundedReceiver<Story> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut handles = Vec::with_capacity(ids.len());
        for (index, id) in ids.into_iter().enumerate() {
            let rank = index as i64 + 1;
            let source = Arc::clone(&self.source);
            let converter = self.converter;
            let tx = tx.clone();

            handles.push(tokio::spawn(async move {
                let item = match source.item(id).await {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(id, error = %e, "unable to fetch item");
                        return;
                    }
                };
                debug!(
                    id,
                    posted_at = ?item.posted_at(),
                    "fetched item"
                );

                let story = match converter.convert(rank, &item) {
                    Ok(story) => story,
                    Err(e) => {
                        warn!(id, rank, error = %e, "unable to convert item to story");
                        return;
                    }
                };

                // fails only if the caller dropped the receiver early, in
                // which case the story is simply discarded
                let _ = tx.send(story);
            }));
        }

        // Hold the last sender until every task has reached its terminal
        // emit-or-skip decision, so the channel closes exactly once, after
        // all of them.
        tokio::spawn(async move {
            for joined in future::join_all(handles).await {
                if let Err(e) = joined {
                    warn!(error = %e, "story task did not finish");
                }
            }
            drop(tx);
        });

        rx
    }

    /// Drains the whole batch into a vector, in completion order.
    pub async fn collect(&self, ids: Vec<i64>) -> Vec<Story> {
        let mut rx = self.spawn(ids);
        let mut stories = Vec::new();
        while let Some(story) = rx.recv().await {
            stories.push(story);
        }
        stories
    }
}
