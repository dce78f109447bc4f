use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::model::campaign::CampaignDto;

/// Campaigns fetched through the `campaign.list` procedure.
#[component]
pub fn CampaignList() -> Element {
    #[allow(unused_mut)]
    let mut campaigns = use_signal(Vec::<CampaignDto>::new);
    #[allow(unused_mut)]
    let mut loaded = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        use crate::{client::util::rpc::query, model::campaign::CampaignListDto};

        let future = use_resource(|| async move { query::<CampaignListDto>("campaign.list").await });

        match &*future.read_unchecked() {
            Some(Ok(list)) => {
                if !loaded() {
                    campaigns.set(list.campaigns.clone());
                    loaded.set(true);
                }
            }
            Some(Err(err)) => {
                tracing::error!("Failed to load campaigns: {}", err);
            }
            None => (),
        }
    }

    rsx!(
        div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
            if campaigns.is_empty() && !loaded() {
                div { class: "skeleton h-40 w-full" }
                div { class: "skeleton h-40 w-full" }
            } else if campaigns.is_empty() {
                p { "No campaigns yet." }
            }
            {campaigns.iter().map(|c| rsx! {
                CampaignCard { key: "{c.id}", campaign: c.clone() }
            })}
        }
    )
}

#[component]
fn CampaignCard(campaign: CampaignDto) -> Element {
    let progress = campaign.progress_percent();

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "{campaign.title}" }
                p { "{campaign.description}" }
                progress {
                    class: "progress progress-primary w-full",
                    value: "{progress}",
                    max: "100",
                }
                p { class: "text-sm",
                    {format!("{} of {} raised ({}%)", format_amount(campaign.raised_amount), format_amount(campaign.goal_amount), progress)}
                }
            }
        }
    )
}

/// Formats minor currency units as a decimal amount
fn format_amount(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let units = minor_units.unsigned_abs();

    format!("{}{}.{:02}", sign, units / 100, units % 100)
}
