//! Update function for the festival lookup component.
//!
//! Elm-style: receives the current state and a `Msg`, mutates the state and
//! returns whether the view should re-render. The backend call runs in a
//! spawned task that reports back with `Msg::Received`.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{fetch_festival, show_toast};
use super::messages::Msg;
use super::state::FestivalLookupComponent;

pub fn update(
    component: &mut FestivalLookupComponent,
    ctx: &Context<FestivalLookupComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateFestival(festival) => {
            component.festival = festival;
            true
        }
        Msg::Submit => {
            let Some(festival) = component.begin_submit() else {
                // Still re-render so a fresh validation message shows up.
                return component.validation_message.is_some();
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = fetch_festival(festival).await;
                link.send_message(Msg::Received(outcome));
            });
            true
        }
        Msg::Received(outcome) => {
            if let Err(reason) = &outcome {
                error!("Failed to fetch festival details:", reason.clone());
                show_toast("Oops! Something went wrong while generating festival details.");
            }
            component.finish(outcome);
            true
        }
    }
}
