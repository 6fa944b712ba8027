use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{CORE_COMPETENCIES, OWNER_ROLE, PROJECTS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-white">
            <div class="container mx-auto px-4 pt-24 md:pt-36 flex flex-col md:flex-row items-center justify-center">
                <div class="md:w-1/2 text-center md:text-left">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-800 mb-4">{OWNER_ROLE}</h1>
                    <p class="text-xl text-gray-600 mb-8">
                        "Bridging the gap between mechanical engineering, electronics, and software to create innovative technological solutions."
                    </p>

                    <div class="flex justify-center md:justify-start space-x-4">
                        <a
                            href="/resume.pdf"
                            download="resume.pdf"
                            class="flex items-center bg-blue-600 text-white px-6 py-3 rounded-full hover:bg-blue-700 transition"
                        >
                            <i class="extra-download mr-2"></i>
                            "Download CV"
                        </a>
                        <A
                            href="/contact"
                            attr:class="flex items-center bg-gray-200 text-gray-800 px-6 py-3 rounded-full hover:bg-gray-300 transition"
                        >
                            "Contact Me"
                        </A>
                    </div>
                </div>

                <div class="md:w-1/2 mt-8 md:mt-0 flex justify-center">
                    <div class="w-80 h-80 bg-blue-100 rounded-full flex items-center justify-center shadow-lg">
                        <img
                            src="/profile.png"
                            alt="Profile"
                            class="object-cover rounded-full"
                        />
                    </div>
                </div>
            </div>

            <section class="container mx-auto px-4 py-16">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-gray-800">
                    "My Core Competencies"
                </h2>

                <div class="grid md:grid-cols-3 gap-8">
                    {CORE_COMPETENCIES
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="bg-white p-6 rounded-lg shadow-md text-center hover:shadow-xl transition-shadow">
                                    <div class="text-5xl mb-4">{skill.icon}</div>
                                    <h3 class="text-xl font-semibold mb-2 text-gray-800">
                                        {skill.title}
                                    </h3>
                                    <p class="text-gray-600">{skill.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="container mx-auto px-4 py-16 bg-gray-50">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-gray-800">
                    "Featured Projects"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .take(3)
                        .map(|project| {
                            view! {
                                <div class="bg-white rounded-lg overflow-hidden shadow-md hover:shadow-xl transition-shadow">
                                    <div class="h-48 bg-gray-200"></div>
                                    <div class="p-4">
                                        <h3 class="text-xl font-semibold mb-2 text-gray-800">
                                            {project.title}
                                        </h3>
                                        <p class="text-gray-600">{project.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-8">
                    <A
                        href="/projects"
                        attr:class="bg-blue-600 text-white px-6 py-3 rounded-full hover:bg-blue-700 transition"
                    >
                        "View All Projects"
                    </A>
                </div>
            </section>
        </div>
    }
}
