use std::sync::mpsc::{Receiver, Sender};

use anyhow::Result;
use futures::future::join_all;
use tokio::runtime::Runtime;

use crate::indexer::IndexerClient;
use crate::models::{EnrichedToken, TokenRecord, VisibilityList};

pub enum GalleryCommand {
    /// Fetch the shared confirmed-NSFW list. Issued once at startup.
    FetchVisibilityList,
    /// Fetch ownership for `address` and fan out per-token metadata.
    /// `generation` is issued by the data store and echoed back so stale
    /// responses from a superseded request can be discarded.
    LoadTokens { address: String, generation: u64 },
    Shutdown,
}

#[derive(Debug)]
pub enum DataChange {
    VisibilityLoaded(VisibilityList),
    TokensLoaded {
        generation: u64,
        tokens: Vec<EnrichedToken>,
    },
    TokensLoadFailed {
        generation: u64,
    },
}

/// Background fetch worker. Owns its own tokio runtime on a dedicated
/// thread; commands arrive over the channel and results go back to the UI
/// thread as `DataChange`s. The two fetch families (visibility list,
/// ownership+metadata) run as independent tasks and are not ordered
/// relative to each other.
pub struct GalleryWorker {
    client: IndexerClient,
    data_tx: Sender<DataChange>,
    command_rx: Receiver<GalleryCommand>,
}

impl GalleryWorker {
    pub fn new(
        client: IndexerClient,
        data_tx: Sender<DataChange>,
        command_rx: Receiver<GalleryCommand>,
    ) -> Self {
        Self {
            client,
            data_tx,
            command_rx,
        }
    }

    pub fn run(self) {
        let rt = Runtime::new().expect("Failed to create runtime");
        tracing::debug!("gallery worker thread started");

        while let Ok(command) = self.command_rx.recv() {
            match command {
                GalleryCommand::FetchVisibilityList => {
                    let client = self.client.clone();
                    let data_tx = self.data_tx.clone();
                    rt.spawn(async move {
                        match client.fetch_visibility_list().await {
                            Ok(list) => {
                                tracing::info!(entries = list.len(), "visibility list loaded");
                                let _ = data_tx.send(DataChange::VisibilityLoaded(list));
                            }
                            // Non-fatal: the store keeps its empty default and
                            // no token is treated as flagged.
                            Err(e) => tracing::warn!("failed to fetch visibility list: {:#}", e),
                        }
                    });
                }
                GalleryCommand::LoadTokens {
                    address,
                    generation,
                } => {
                    let client = self.client.clone();
                    let data_tx = self.data_tx.clone();
                    rt.spawn(async move {
                        match load_and_enrich(&client, &address).await {
                            Ok(tokens) => {
                                let _ = data_tx.send(DataChange::TokensLoaded { generation, tokens });
                            }
                            Err(e) => {
                                tracing::warn!("failed to load tokens for {}: {:#}", address, e);
                                let _ = data_tx.send(DataChange::TokensLoadFailed { generation });
                            }
                        }
                    });
                }
                GalleryCommand::Shutdown => break,
            }
        }

        tracing::debug!("gallery worker thread stopped");
    }
}

async fn load_and_enrich(client: &IndexerClient, address: &str) -> Result<Vec<EnrichedToken>> {
    let records = client.tokens_for_owner(address).await?;
    Ok(enrich(client, records).await)
}

/// Concurrent metadata fan-out. An individual fetch failure degrades that
/// single token to its un-enriched record; the batch itself never fails.
pub async fn enrich(client: &IndexerClient, records: Vec<TokenRecord>) -> Vec<EnrichedToken> {
    join_all(records.into_iter().map(|record| {
        let client = client.clone();
        async move {
            let live = match record.token_uri.as_deref() {
                Some(uri) => match client.fetch_metadata(uri).await {
                    Ok(metadata) => Some(metadata),
                    Err(e) => {
                        tracing::debug!(token_id = %record.token_id, "metadata fetch failed: {:#}", e);
                        None
                    }
                },
                None => None,
            };
            EnrichedToken { record, live }
        }
    }))
    .await
}
