mod contact;
mod experience;
mod footer;
mod home;
mod navbar;
mod projects;
mod skills;
mod social;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;
use contact::ContactPage;
use experience::ExperiencePage;
use footer::Footer;
use home::HomePage;
use navbar::Navbar;
use projects::ProjectsPage;
use skills::SkillsPage;
use social::FloatingSocialBar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
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
        // sets the document title
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <div class="flex flex-col min-h-screen">
                <header>
                    <Navbar />
                </header>
                <main class="flex-grow pt-16">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/skills") view=SkillsPage />
                        <Route path=path!("/experience") view=ExperiencePage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <footer>
                    <Footer />
                </footer>
                <FloatingSocialBar />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center px-4 text-center">
            <h1 class="text-5xl font-bold text-gray-800 mb-4">"404"</h1>
            <p class="text-gray-600 mb-8">"The page you are looking for does not exist."</p>
            <A
                href="/"
                attr:class="bg-blue-600 text-white px-6 py-3 rounded-full hover:bg-blue-700 transition"
            >
                "Back to Home"
            </A>
        </div>
    }
}
