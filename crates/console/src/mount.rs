//! Asynchronous region mounting.
//!
//! A region's view unit may load lazily. Until the loader resolves the region
//! shows a placeholder; regions resolve independently and in any order. An
//! empty variant never starts a loader.

use std::future::Future;

use tokio::sync::watch;
use tracing::debug;

use crate::composer::{Region, RegionVariant};

/// What a region currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountState<V> {
    /// No variant for this region.
    Empty,
    /// Loader still running.
    Placeholder,
    Ready(V),
}

#[derive(Debug)]
pub struct RegionMount<V> {
    region: Region,
    variant: RegionVariant,
    rx: Option<watch::Receiver<Option<V>>>,
}

impl<V> RegionMount<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Start loading `variant` into `region` on the current tokio runtime.
    pub fn spawn<F>(region: Region, variant: RegionVariant, loader: F) -> Self
    where
        F: Future<Output = V> + Send + 'static,
    {
        if variant.is_empty() {
            return Self::empty(region);
        }

        let (tx, rx) = watch::channel(None);
        tokio::spawn(async move {
            let view = loader.await;
            if tx.send(Some(view)).is_ok() {
                debug!(%region, ?variant, "region ready");
            }
        });

        Self {
            region,
            variant,
            rx: Some(rx),
        }
    }

    pub fn empty(region: Region) -> Self {
        Self {
            region,
            variant: RegionVariant::Empty,
            rx: None,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn variant(&self) -> RegionVariant {
        self.variant
    }

    /// Current display state, without waiting.
    pub fn state(&self) -> MountState<V> {
        let Some(rx) = &self.rx else {
            return MountState::Empty;
        };
        match &*rx.borrow() {
            Some(view) => MountState::Ready(view.clone()),
            None => MountState::Placeholder,
        }
    }

    /// Wait for the loader. `None` for an empty region or a loader that died
    /// before producing a view.
    pub async fn ready(&mut self) -> Option<V> {
        let rx = self.rx.as_mut()?;
        let view = rx.wait_for(Option::is_some).await.ok()?;
        (*view).clone()
    }
}
