//! Client-side pagination over an in-memory record collection.
//!
//! ## Core Components
//!
//! - **PageState**: the only mutable state, owned by a [`Paginator`]
//! - **derive_page**: pure slice of the collection for a given state
//! - **PageMeta**: display metadata (range, totals, page-number window)
//! - **PaginatedCollection**: a collection snapshot plus paginator that
//!   pushes each new [`DerivedPage`] to a listener
//!
//! Out-of-range requests are clamped and zero page sizes ignored; nothing
//! in here returns an error.
//!
//! Any change of the collection length sends the paginator back to page 1,
//! even when the current page would still exist.

use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of page numbers shown at once
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Current page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Number of pages needed for `total_items` at `items_per_page` per page.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Display metadata for one derived page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: usize,
    pub items_per_page: usize,
    /// Index of the first item on the page (0-based, inclusive)
    pub start_index: usize,
    /// Index one past the last item on the page
    pub end_index: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageMeta {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// 1-based number of the first item shown ("Showing 11 to 12 of 12")
    pub fn start_item(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.start_index + 1
        }
    }

    pub fn end_item(&self) -> usize {
        self.end_index
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Page-number links to render between the prev/next buttons
    pub fn window(&self) -> PageWindow {
        PageWindow::around(self.current_page, self.total_pages)
    }
}

/// Items of the current page plus their metadata.
///
/// Recomputed from the collection each time; never stored.
#[derive(Debug, PartialEq)]
pub struct DerivedPage<'a, T> {
    pub items: &'a [T],
    pub meta: PageMeta,
}

impl<T> Clone for DerivedPage<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DerivedPage<'_, T> {}

/// Slice `collection` according to `state`.
///
/// A state pointing past the end of the collection (possible for one render
/// before the paginator has seen a shrunk collection) is clamped first.
pub fn derive_page<'a, T>(collection: &'a [T], state: &PageState) -> DerivedPage<'a, T> {
    let total_items = collection.len();
    let items_per_page = state.items_per_page.max(1);
    let total_pages = total_pages(total_items, items_per_page);
    let current_page = state.current_page.clamp(1, total_pages.max(1));

    let start_index = ((current_page - 1) * items_per_page).min(total_items);
    let end_index = (current_page * items_per_page).min(total_items);

    DerivedPage {
        items: &collection[start_index..end_index],
        meta: PageMeta {
            current_page,
            items_per_page,
            start_index,
            end_index,
            total_items,
            total_pages,
        },
    }
}

/// One entry of the page-number bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Visible page numbers around the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub first: usize,
    pub last: usize,
    pub current: usize,
    pub total_pages: usize,
}

impl PageWindow {
    /// Up to [`MAX_VISIBLE_PAGES`] numbers centred on `current`, shifted to
    /// stay inside `1..=total_pages`.
    pub fn around(current: usize, total_pages: usize) -> Self {
        if total_pages == 0 {
            return Self {
                first: 1,
                last: 0,
                current,
                total_pages,
            };
        }

        let current = current.clamp(1, total_pages);
        let mut first = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
        let last = (first + MAX_VISIBLE_PAGES - 1).min(total_pages);
        if last + 1 - first < MAX_VISIBLE_PAGES {
            first = (last + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
        }

        Self {
            first,
            last,
            current,
            total_pages,
        }
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.first..=self.last
    }

    /// A link back to page 1 precedes the window
    pub fn shows_first(&self) -> bool {
        self.total_pages > 0 && self.first > 1
    }

    /// A link to the last page follows the window
    pub fn shows_last(&self) -> bool {
        self.total_pages > 0 && self.last < self.total_pages
    }

    /// Full link sequence, edges and ellipses included
    pub fn links(&self) -> Vec<PageLink> {
        let mut links = Vec::new();

        if self.shows_first() {
            links.push(PageLink::Page {
                number: 1,
                active: false,
            });
            if self.first > 2 {
                links.push(PageLink::Ellipsis);
            }
        }

        for number in self.pages() {
            links.push(PageLink::Page {
                number,
                active: number == self.current,
            });
        }

        if self.shows_last() {
            if self.last + 1 < self.total_pages {
                links.push(PageLink::Ellipsis);
            }
            links.push(PageLink::Page {
                number: self.total_pages,
                active: false,
            });
        }

        links
    }
}

/// Requests a view can send to a [`Paginator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorEvent {
    /// The watched collection now has this many items
    CollectionChanged(usize),
    /// Jump to a page; clamped to the valid range
    PageRequested(i64),
    /// Switch page size; zero is ignored
    PageSizeRequested(usize),
}

/// Owner of the [`PageState`] for one paginated view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paginator {
    state: PageState,
    total_items: usize,
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(items_per_page: usize) -> Self {
        Self {
            state: PageState {
                current_page: 1,
                items_per_page: items_per_page.max(1),
            },
            total_items: 0,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.state.items_per_page)
    }

    pub fn derive<'a, T>(&self, collection: &'a [T]) -> DerivedPage<'a, T> {
        derive_page(collection, &self.state)
    }

    /// Apply one event, returning whether the page state changed
    pub fn apply(&mut self, event: PaginatorEvent) -> bool {
        match event {
            PaginatorEvent::CollectionChanged(len) => self.on_collection_changed(len),
            PaginatorEvent::PageRequested(page) => self.on_page_change(page),
            PaginatorEvent::PageSizeRequested(size) => self.on_page_size_change(size),
        }
    }

    /// Clamp `page` into `[1, max(1, total_pages)]` and move there
    pub fn on_page_change(&mut self, page: i64) -> bool {
        let max_page = self.total_pages().max(1);
        let target = if page < 1 {
            1
        } else {
            usize::try_from(page).unwrap_or(usize::MAX).min(max_page)
        };

        if target == self.state.current_page {
            return false;
        }
        self.state.current_page = target;
        true
    }

    /// Change the page size and go back to page 1
    pub fn on_page_size_change(&mut self, items_per_page: usize) -> bool {
        if items_per_page == 0 {
            debug!("ignoring zero page size");
            return false;
        }

        let next = PageState {
            current_page: 1,
            items_per_page,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Record a new collection length; any change resets to page 1
    pub fn on_collection_changed(&mut self, total_items: usize) -> bool {
        if total_items == self.total_items {
            return false;
        }

        debug!(
            "collection length changed from {} to {}, back to page 1",
            self.total_items, total_items
        );
        self.total_items = total_items;
        let changed = self.state.current_page != 1;
        self.state.current_page = 1;
        changed
    }
}

type PageListener<T> = Box<dyn FnMut(&DerivedPage<'_, T>)>;

/// A collection snapshot kept in step with its paginator.
///
/// The listener receives the new derived page whenever the collection is
/// replaced or a page/size request moves the page state. In the browser the
/// `use_paginator` hook drives the same [`Paginator`] transitions through a
/// Yew reducer instead of a listener.
pub struct PaginatedCollection<T> {
    collection: Rc<[T]>,
    paginator: Paginator,
    listener: Option<PageListener<T>>,
}

impl<T> PaginatedCollection<T> {
    pub fn new(collection: Rc<[T]>) -> Self {
        Self::with_paginator(collection, Paginator::new())
    }

    pub fn with_paginator(collection: Rc<[T]>, mut paginator: Paginator) -> Self {
        paginator.on_collection_changed(collection.len());
        Self {
            collection,
            paginator,
            listener: None,
        }
    }

    /// Register the view callback; it is called once right away
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&DerivedPage<'_, T>) + 'static,
    {
        self.listener = Some(Box::new(listener));
        self.notify();
    }

    pub fn collection(&self) -> &Rc<[T]> {
        &self.collection
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn page(&self) -> DerivedPage<'_, T> {
        self.paginator.derive(&self.collection)
    }

    /// Swap in a new snapshot; the same `Rc` again is a no-op
    pub fn set_collection(&mut self, collection: Rc<[T]>) {
        if Rc::ptr_eq(&self.collection, &collection) {
            return;
        }
        self.paginator.on_collection_changed(collection.len());
        self.collection = collection;
        self.notify();
    }

    pub fn on_page_change(&mut self, page: i64) {
        if self.paginator.on_page_change(page) {
            self.notify();
        }
    }

    pub fn on_page_size_change(&mut self, items_per_page: usize) {
        if self.paginator.on_page_size_change(items_per_page) {
            self.notify();
        }
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            let page = self.paginator.derive(&self.collection);
            listener(&page);
        }
    }
}
