use shared::{PageLink, PageMeta, PAGE_SIZE_OPTIONS};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_paginator::PaginatorActions;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub meta: PageMeta,
    pub actions: PaginatorActions,
}

/// Page-size selector, item range and page links; hidden for an empty collection
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let meta = props.meta;
    if meta.is_empty() {
        return html! {};
    }

    let go_to = |page: i64| {
        let change_page = props.actions.change_page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            change_page.emit(page);
        })
    };

    let on_size_change = {
        let change_page_size = props.actions.change_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                change_page_size.emit(size);
            }
        })
    };

    let current = meta.current_page as i64;
    let last = meta.total_pages as i64;

    html! {
        <div class="pagination-bar d-flex justify-content-between align-items-center">
            <div class="page-size">
                <label for="page-size" class="me-2">{"Show"}</label>
                <select id="page-size" class="form-select form-select-sm" onchange={on_size_change}>
                    {for PAGE_SIZE_OPTIONS.iter().map(|&size| html! {
                        <option value={size.to_string()} selected={size == meta.items_per_page}>
                            {size}
                        </option>
                    })}
                </select>
            </div>
            <div class="page-info">
                {format!("Showing {} to {} of {} entries", meta.start_item(), meta.end_item(), meta.total_items)}
            </div>
            <ul class="pagination mb-0">
                <li class={classes!("page-item", meta.is_first_page().then_some("disabled"))}>
                    <a class="page-link" href="#" onclick={go_to(1)}>{"First"}</a>
                </li>
                <li class={classes!("page-item", meta.is_first_page().then_some("disabled"))}>
                    <a class="page-link" href="#" onclick={go_to(current - 1)}>{"Prev"}</a>
                </li>
                {for meta.window().links().into_iter().map(|link| match link {
                    PageLink::Page { number, active } => html! {
                        <li class={classes!("page-item", active.then_some("active"))}>
                            <a class="page-link" href="#" onclick={go_to(number as i64)}>{number}</a>
                        </li>
                    },
                    PageLink::Ellipsis => html! {
                        <li class="page-item disabled"><span class="page-link">{"..."}</span></li>
                    },
                })}
                <li class={classes!("page-item", meta.is_last_page().then_some("disabled"))}>
                    <a class="page-link" href="#" onclick={go_to(current + 1)}>{"Next"}</a>
                </li>
                <li class={classes!("page-item", meta.is_last_page().then_some("disabled"))}>
                    <a class="page-link" href="#" onclick={go_to(last)}>{"Last"}</a>
                </li>
            </ul>
        </div>
    }
}
