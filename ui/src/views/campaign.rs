use dioxus::prelude::*;

use crate::context::use_session;
use crate::core::{CampaignType, CounterField};
use crate::t;

#[component]
pub fn Campaign() -> Element {
    let mut session = use_session();
    let (counters, campaign_type) = {
        let current = session.read();
        (current.counters().clone(), current.campaign_type())
    };

    rsx! {
        section { class: "page page-campaign",
            h1 { {t!("tab-campaign")} }
            p { class: "page__intro", {t!("campaign-intro")} }

            div { class: "card campaign-form",
                label { class: "field", r#for: "campaign-type",
                    span { class: "field__label", {t!("campaign-type-label")} }
                    select {
                        id: "campaign-type",
                        class: "field__input",
                        value: "{campaign_type}",
                        onchange: move |evt: FormEvent| {
                            match evt.value().parse::<CampaignType>() {
                                Ok(kind) => session.with_mut(|s| s.set_campaign_type(kind)),
                                Err(err) => tracing::debug!("{err}"),
                            }
                        },
                        for kind in CampaignType::ALL {
                            option {
                                key: "{kind}",
                                value: "{kind}",
                                selected: kind == campaign_type,
                                {kind.label()}
                            }
                        }
                    }
                }

                for field in CounterField::ALL {
                    CounterInput {
                        key: "{field.key()}",
                        field,
                        value: counters.get(field).to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn CounterInput(field: CounterField, value: String) -> Element {
    let mut session = use_session();
    let label = field_label(field);
    let id = field.key();

    rsx! {
        label { class: "field", r#for: "{id}",
            span { class: "field__label", "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                class: "field__input",
                r#type: "text",
                placeholder: "{label}",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    session.with_mut(|s| s.update_field(field, evt.value()));
                },
            }
        }
    }
}

fn field_label(field: CounterField) -> String {
    match field {
        CounterField::Reach => t!("field-reach"),
        CounterField::Impressions => t!("field-impressions"),
        CounterField::Clicks => t!("field-clicks"),
        CounterField::Conversions => t!("field-conversions"),
        CounterField::Cost => t!("field-cost"),
    }
}
