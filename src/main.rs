use dioxus::prelude::*;

mod components;
mod diagnostics;
mod error;
mod preferences;
mod settings;
mod utils;

use components::FeedPage;

const FEED_CSS: Asset = asset!("/assets/styling/feed.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Stylesheet { href: FEED_CSS }

        FeedPage {}
    }
}
