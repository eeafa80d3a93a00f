//! View rendering for the festival lookup component.
//!
//! The form is always shown; below it either the record card, a failure
//! notice, or nothing, depending on the lookup phase.

use common::model::festival::FestivalRecord;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{FestivalLookupComponent, LookupState};

pub fn view(component: &FestivalLookupComponent, ctx: &Context<FestivalLookupComponent>) -> Html {
    let link = ctx.link();
    let loading = component.is_loading();

    html! {
        <main>
            <div class="festival-form">
                <input
                    type="text"
                    value={component.festival.clone()}
                    placeholder="Example: Diwali, Holi, Navratri"
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateFestival(input.value())
                    })}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        (e.key() == "Enter").then_some(Msg::Submit)
                    })}
                />
                {
                    if let Some(message) = &component.validation_message {
                        html! { <div class="validation">{ message.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
                <button disabled={loading} onclick={link.callback(|_| Msg::Submit)}>
                    { if loading { "Fetching details... 🎇" } else { "Generate Festival Info 🎆" } }
                </button>
            </div>
            {
                match &component.state {
                    LookupState::Displayed(record) => record_card(record),
                    LookupState::Error(_) => html! {
                        <div class="festival-error">
                            {"Oops! Something went wrong while generating festival details."}
                        </div>
                    },
                    LookupState::Idle | LookupState::Loading => html! {},
                }
            }
        </main>
    }
}

/// Renders the eight fields verbatim, labelled in Hindi.
fn record_card(record: &FestivalRecord) -> Html {
    let rows = [
        ("परिचय", &record.introduction),
        ("कारण", &record.reason_celebrated),
        ("विधि", &record.method_of_celebration),
        ("अनुष्ठान", &record.rituals),
        ("देवता", &record.deities),
        ("मंत्र", &record.mantras),
        ("कहानी", &record.backstory),
    ];

    html! {
        <div class="festival-card">
            <h2>{ record.name.clone() }</h2>
            { for rows.iter().map(|(label, value)| html! {
                <p><span class="label">{ format!("{}:", label) }</span>{" "}{ (*value).clone() }</p>
            }) }
        </div>
    }
}
