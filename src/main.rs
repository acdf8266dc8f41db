use dioxus::prelude::*;

mod api;
mod components;
mod config;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Songboard" }
        document::Meta { name: "theme-color", content: "#18181b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
