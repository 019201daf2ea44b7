use shared::{format_currency, Donation, SeriesMemo};
use yew::prelude::*;

use super::donation_table::DonationTable;
use super::edit_modal::EditModal;
use super::pagination::Pagination;
use super::summary_chart::{SeriesMetric, SummaryChart};
use crate::components::title::Title;
use crate::hooks::{use_alert, use_donations, use_paginator};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DonationListProps {
    pub api_client: ApiClient,
    pub page_size: usize,
}

/// Donations page: summary cards, the current page of the table and the edit dialog
#[function_component(DonationList)]
pub fn donation_list(props: &DonationListProps) -> Html {
    let alerts = use_alert();
    let donations = use_donations(&props.api_client, &alerts);
    let page = use_paginator(&donations.state.donations, props.page_size);
    let memo = use_mut_ref(SeriesMemo::<Donation>::new);

    let (series, total) = {
        let mut memo = memo.borrow_mut();
        let collection = &donations.state.donations;
        (memo.series(collection), memo.total(collection))
    };

    html! {
        <div class="donations-page">
            <Title title="Donations" />

            <div class="row summary-cards">
                <div class="col-md-6">
                    <div class="card summary-card">
                        <div class="card-body">
                            <h6 class="summary-label">{"DONATIONS"}</h6>
                            <h3 class="summary-value">{donations.state.donations.len()}</h3>
                            <SummaryChart series={series.clone()} metric={SeriesMetric::Count} />
                        </div>
                    </div>
                </div>
                <div class="col-md-6">
                    <div class="card summary-card">
                        <div class="card-body">
                            <h6 class="summary-label">{"RAISED"}</h6>
                            <h3 class="summary-value">{format_currency(total)}</h3>
                            <SummaryChart series={series} metric={SeriesMetric::Amount} />
                        </div>
                    </div>
                </div>
            </div>

            {if donations.state.loading && donations.state.donations.is_empty() {
                html! {
                    <div class="loading">
                        <div class="loading-spinner"></div>
                        <p>{"Loading donations..."}</p>
                    </div>
                }
            } else {
                html! {
                    <>
                        <DonationTable
                            donations={page.items}
                            deleting={donations.state.deleting}
                            actions={donations.actions.clone()}
                        />
                        <Pagination meta={page.meta} actions={page.actions} />
                    </>
                }
            }}

            {if let Some(donation) = donations.state.editing.clone() {
                html! {
                    <EditModal
                        donation={donation}
                        api_client={props.api_client.clone()}
                        on_close={donations.actions.cancel_edit.clone()}
                        on_save={donations.actions.update.clone()}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
