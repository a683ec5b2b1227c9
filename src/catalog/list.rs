use anyhow::{Context, Result};

use super::{AppsBackend, CardListFilter};
use crate::model::App;
use crate::tags::TagFacetIndex;

/// The loaded app list in server order, the tag facet derived from it, and
/// the search keyword.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    apps: Vec<App>,
    facet: TagFacetIndex,
    keyword: String,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload(&mut self, backend: &dyn AppsBackend) -> Result<()> {
        let apps = backend.list_apps().context("load apps")?;
        log::info!("loaded {} apps", apps.len());
        self.set_apps(apps);
        Ok(())
    }

    pub fn set_apps(&mut self, apps: Vec<App>) {
        self.apps = apps;
        self.facet.rebuild(&self.apps);
    }

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn facet(&self) -> &TagFacetIndex {
        &self.facet
    }

    pub fn facet_mut(&mut self) -> &mut TagFacetIndex {
        &mut self.facet
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn filter(&self) -> CardListFilter<'_> {
        CardListFilter::new(&self.keyword, self.facet.selected())
    }

    /// Indices into [`Catalog::apps`] of the cards that pass the filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.filter().visible_indices(&self.apps)
    }

    pub fn visible(&self) -> Vec<&App> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.apps[i])
            .collect()
    }

    /// Current card order as sent to the reorder endpoint.
    pub fn card_order(&self) -> Vec<i64> {
        self.apps.iter().filter_map(|a| a.id).collect()
    }

    /// Moves a card locally without telling the server.
    pub fn move_card(&mut self, from: usize, to: usize) -> bool {
        if from >= self.apps.len() || to >= self.apps.len() || from == to {
            return false;
        }
        let app = self.apps.remove(from);
        self.apps.insert(to, app);
        true
    }

    /// Sends the current order. On any failure the list is refetched so the
    /// screen shows the server's order again; the original error is returned.
    pub fn persist_order(&mut self, backend: &dyn AppsBackend) -> Result<()> {
        let order = self.card_order();
        let err = match backend.reorder_apps(&order) {
            Ok(_) => {
                log::info!("saved card order {:?}", order);
                return Ok(());
            }
            Err(err) => err,
        };

        log::warn!("reorder failed, reloading list: {:#}", err);
        match self.reload(backend) {
            Ok(()) => Err(err.context("card order not saved; list reloaded from server")),
            Err(reload_err) => Err(err.context(format!(
                "card order not saved; reloading the list also failed: {:#}",
                reload_err
            ))),
        }
    }

    pub fn move_and_persist(
        &mut self,
        from: usize,
        to: usize,
        backend: &dyn AppsBackend,
    ) -> Result<bool> {
        if !self.move_card(from, to) {
            return Ok(false);
        }
        self.persist_order(backend)?;
        Ok(true)
    }

    /// Places the apps named by `ids` first, in that order, followed by the
    /// rest in their current order.
    pub fn arrange(&mut self, ids: &[i64]) -> Result<()> {
        let mut rest = std::mem::take(&mut self.apps);
        let mut next = Vec::with_capacity(rest.len());
        for id in ids {
            let Some(pos) = rest.iter().position(|a| a.id == Some(*id)) else {
                self.apps = next.into_iter().chain(rest).collect();
                anyhow::bail!("app {} is not in the list", id);
            };
            next.push(rest.remove(pos));
        }
        next.extend(rest);
        self.apps = next;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/catalog/list_tests.rs"]
mod tests;
