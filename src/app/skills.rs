use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{CERTIFICATIONS, SKILL_CATEGORIES};

#[component]
pub fn SkillsPage() -> impl IntoView {
    // selection is positional: an index into SKILL_CATEGORIES
    let (selected, set_selected) = signal(0usize);

    view! {
        <Title text="Skills" />
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-blue-50 py-16 px-4">
            <div class="container mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-800 mb-4">"My Skills"</h1>
                    <p class="text-gray-600 max-w-2xl mx-auto">
                        "A comprehensive overview of my technical skills across various domains of mechatronics, software development, and engineering."
                    </p>
                </div>

                <div class="flex flex-col md:flex-row gap-8">
                    <div class="md:w-1/4 space-y-4">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(i, category)| {
                                view! {
                                    <button
                                        on:click=move |_| set_selected(i)
                                        class=move || {
                                            if selected.get() == i {
                                                "w-full flex items-center p-4 rounded-lg transition-colors duration-300 bg-blue-600 text-white"
                                            } else {
                                                "w-full flex items-center p-4 rounded-lg transition-colors duration-300 bg-white text-gray-800 hover:bg-blue-100"
                                            }
                                        }
                                    >
                                        <span class="mr-4 text-2xl">{category.icon}</span>
                                        {category.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="md:w-3/4 bg-white rounded-lg shadow-lg p-8">
                        {move || {
                            let category = &SKILL_CATEGORIES[selected.get()];
                            view! {
                                <h2 class="text-2xl font-semibold text-gray-800 mb-6 flex items-center">
                                    <span class="mr-4 text-3xl">{category.icon}</span>
                                    {category.name}
                                </h2>

                                <div class="space-y-4">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="flex items-center">
                                                    <div class="w-1/3 text-gray-700">{skill.name}</div>
                                                    <div class="w-2/3 bg-gray-200 rounded-full h-4 relative">
                                                        <div
                                                            class=format!(
                                                                "absolute top-0 left-0 h-full rounded-full {}",
                                                                skill.color,
                                                            )
                                                            style:width=format!("{}%", skill.level)
                                                        ></div>
                                                        <span class="absolute right-0 top-1/2 transform -translate-y-1/2 text-xs text-gray-600">
                                                            {skill.level} "%"
                                                        </span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        }}
                    </div>
                </div>

                <section class="mt-16">
                    <h2 class="text-3xl font-bold text-center mb-8 text-gray-800">
                        "Certifications"
                    </h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        {CERTIFICATIONS
                            .iter()
                            .map(|cert| {
                                view! {
                                    <div class="bg-white p-6 rounded-lg shadow-md text-center">
                                        <h3 class="text-xl font-semibold text-gray-800 mb-2">
                                            {cert.name}
                                        </h3>
                                        <p class="text-gray-600">{cert.issuer}</p>
                                        <span class="text-sm text-blue-600">{cert.year}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
