use crate::components::festival::FestivalLookupComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="festival-page">
                <header class="festival-header">
                    <h1>{"🎆 AI Festival Knowledge"}</h1>
                    <p>{"Enter any festival name to learn its meaning, rituals, story & more."}</p>
                </header>
                <FestivalLookupComponent />
            </div>
        }
    }
}
