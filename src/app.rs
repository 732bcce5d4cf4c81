use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::footer::Footer;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/uniswap-docs.css" />
        <Title text="Uniswap Docs" />
        <Router>
            <main class="min-h-screen flex flex-col">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DocsHome />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn DocsHome() -> impl IntoView {
    view! {
        <div class="flex-1 px-margin-mobile sm:px-margin-web py-margin-web">
            <h1 class="heading-1 text-light-neutral-1 dark:text-dark-neutral-1">"Uniswap Docs"</h1>
        </div>
    }
}
