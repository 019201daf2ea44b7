use std::rc::Rc;

use shared::{PageMeta, Paginator, PaginatorEvent};
use yew::prelude::*;

/// Yew-side owner of a [`Paginator`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginatorState(pub Paginator);

impl Reducible for PaginatorState {
    type Action = PaginatorEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut paginator = self.0.clone();
        paginator.apply(action);
        // Compare whole paginators: a length change on page 1 still has to be kept
        if paginator == self.0 {
            self
        } else {
            Rc::new(PaginatorState(paginator))
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct PaginatorActions {
    pub change_page: Callback<i64>,
    pub change_page_size: Callback<usize>,
}

pub struct UsePaginatorResult<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
    pub actions: PaginatorActions,
}

/// Paginate `collection`, restarting at page 1 whenever its length changes.
///
/// Browser counterpart of [`shared::PaginatedCollection`]: the same
/// [`Paginator`] events, with re-rendering in place of the listener.
#[hook]
pub fn use_paginator<T>(collection: &Rc<[T]>, page_size: usize) -> UsePaginatorResult<T>
where
    T: Clone + 'static,
{
    let paginator = use_reducer(move || PaginatorState(Paginator::with_page_size(page_size)));

    {
        let paginator = paginator.clone();
        use_effect_with(collection.len(), move |len| {
            paginator.dispatch(PaginatorEvent::CollectionChanged(*len));
            || ()
        });
    }

    let change_page = {
        let paginator = paginator.clone();
        use_callback((), move |page: i64, _| {
            paginator.dispatch(PaginatorEvent::PageRequested(page));
        })
    };

    let change_page_size = {
        let paginator = paginator.clone();
        use_callback((), move |size: usize, _| {
            paginator.dispatch(PaginatorEvent::PageSizeRequested(size));
        })
    };

    let page = paginator.0.derive(collection);

    UsePaginatorResult {
        items: page.items.to_vec(),
        meta: page.meta,
        actions: PaginatorActions {
            change_page,
            change_page_size,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PaginatedCollection;

    #[test]
    fn test_reducer_keeps_length_change_on_first_page() {
        let state = Rc::new(PaginatorState::default());
        let next = state.clone().reduce(PaginatorEvent::CollectionChanged(42));
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(next.0.total_items(), 42);
        assert_eq!(next.0.state().current_page, 1);
    }

    #[test]
    fn test_reducer_returns_same_state_for_noop() {
        let state = Rc::new(PaginatorState::default()).reduce(PaginatorEvent::CollectionChanged(42));
        let same = state.clone().reduce(PaginatorEvent::PageRequested(1));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn test_reducer_page_flow() {
        let state = Rc::new(PaginatorState::default())
            .reduce(PaginatorEvent::CollectionChanged(42))
            .reduce(PaginatorEvent::PageRequested(3))
            .reduce(PaginatorEvent::PageSizeRequested(25));
        assert_eq!(state.0.state().current_page, 1);
        assert_eq!(state.0.state().items_per_page, 25);
    }

    #[test]
    fn test_reducer_matches_paginated_collection() {
        let first: Rc<[u32]> = (0..42).collect::<Vec<_>>().into();
        let mut collection = PaginatedCollection::new(first.clone());
        let mut state = Rc::new(PaginatorState::default())
            .reduce(PaginatorEvent::CollectionChanged(first.len()));
        assert_eq!(state.0, *collection.paginator());

        collection.on_page_change(4);
        state = state.reduce(PaginatorEvent::PageRequested(4));
        assert_eq!(state.0, *collection.paginator());

        collection.on_page_change(99);
        state = state.reduce(PaginatorEvent::PageRequested(99));
        assert_eq!(state.0, *collection.paginator());

        // Same length, new snapshot: page is kept on both sides
        let same_len: Rc<[u32]> = (100..142).collect::<Vec<_>>().into();
        collection.set_collection(same_len.clone());
        state = state.reduce(PaginatorEvent::CollectionChanged(same_len.len()));
        assert_eq!(state.0, *collection.paginator());
        assert_eq!(state.0.state().current_page, 5);

        let grown: Rc<[u32]> = (0..60).collect::<Vec<_>>().into();
        collection.set_collection(grown.clone());
        state = state.reduce(PaginatorEvent::CollectionChanged(grown.len()));
        assert_eq!(state.0, *collection.paginator());
        assert_eq!(state.0.state().current_page, 1);

        collection.on_page_size_change(25);
        state = state.reduce(PaginatorEvent::PageSizeRequested(25));
        assert_eq!(state.0, *collection.paginator());
        assert_eq!(state.0.derive(&grown), collection.page());
    }
}
