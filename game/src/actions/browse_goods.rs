use crate::api::ActionError::{InvalidSelection, NothingSelected, WrongCollection};
use crate::api::{ActionError, Event};
use crate::inventory::{fit_page, total_pages, wrap_page, Collection, Good, GoodKey};
use crate::model::Browsing::{CollectionOpened, GoodSelected, PageChanged, SelectionCleared};
use crate::model::{Browsing, Selection};
use crate::{occur, Game};

impl Game {
    pub(crate) fn select_good(
        &mut self,
        collection: Collection,
        key: GoodKey,
    ) -> Result<Vec<Event>, ActionError> {
        self.inventory.get_good(collection, &key)?;
        let selection = Selection { collection, key };
        self.browser.selection = Some(selection.clone());
        let events = occur![vec![GoodSelected { selection }]];
        Ok(events)
    }

    /// Switches the dialog to another collection starting from its first page.
    pub(crate) fn open_collection(
        &mut self,
        collection: Collection,
    ) -> Result<Vec<Event>, ActionError> {
        let mut events = vec![];
        if let Some(selection) = self.browser.selection.take() {
            if selection.collection == collection {
                self.browser.selection = Some(selection);
            } else {
                events.push(SelectionCleared { selection });
            }
        }
        self.browser.collection = collection;
        self.browser.page = 1;
        events.push(CollectionOpened { collection });
        events.push(self.page_changed());
        Ok(occur![events])
    }

    pub(crate) fn turn_page(&mut self, delta: isize) -> Result<Vec<Event>, ActionError> {
        let total = self.total_pages(self.browser.collection);
        self.browser.page = wrap_page(self.browser.page as isize + delta, total);
        Ok(occur![vec![self.page_changed()]])
    }

    /// Owned goods shrink after a transaction: forgets a selection that is
    /// gone and keeps the current page inside the collection.
    pub(crate) fn refresh_browser(&mut self) -> Vec<Event> {
        let mut events = vec![];
        if let Some(selection) = self.browser.selection.take() {
            if self
                .inventory
                .get_good(selection.collection, &selection.key)
                .is_ok()
            {
                self.browser.selection = Some(selection);
            } else {
                events.push(SelectionCleared { selection });
            }
        }
        let total = self.total_pages(self.browser.collection);
        let page = fit_page(self.browser.page, total);
        if page != self.browser.page {
            self.browser.page = page;
            events.push(self.page_changed());
        }
        if events.is_empty() {
            vec![]
        } else {
            occur![events]
        }
    }

    /// Selected good, which must come from the shop or from owned goods.
    pub(crate) fn ensure_selected_good(&self, owned: bool) -> Result<Good, ActionError> {
        let selection = self.browser.selection.as_ref().ok_or(NothingSelected)?;
        if selection.collection.is_owned() != owned {
            return Err(WrongCollection {
                collection: selection.collection,
            });
        }
        self.inventory
            .get_good(selection.collection, &selection.key)
            .map(Good::clone)
            .map_err(|_| InvalidSelection {
                selection: selection.clone(),
            })
    }

    fn total_pages(&self, collection: Collection) -> usize {
        total_pages(
            self.inventory.collection(collection).len(),
            self.config.page_size,
        )
    }

    fn page_changed(&self) -> Browsing {
        PageChanged {
            collection: self.browser.collection,
            page: self.browser.page,
            total: self.total_pages(self.browser.collection),
        }
    }
}
