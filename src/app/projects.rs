use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Project, ProjectFilter, PROJECTS, PROJECT_CATEGORIES};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::new());
    let visible = Memo::new(move |_| filter.with(|f| f.visible(PROJECTS)));

    view! {
        <Title text="Projects" />
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-blue-50 py-16 px-4">
            <div class="container mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-800 mb-4">"My Projects"</h1>
                    <p class="text-gray-600 max-w-2xl mx-auto">
                        "A showcase of innovative projects that demonstrate my skills in mechatronics, robotics, and software development."
                    </p>
                </div>

                <div class="mb-12 flex flex-col md:flex-row justify-center items-center space-y-4 md:space-y-0 md:space-x-4">
                    <div class="flex flex-wrap justify-center gap-2">
                        {PROJECT_CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <button
                                        on:click=move |_| {
                                            set_filter.update(|f| f.set_category(*category))
                                        }
                                        class=move || {
                                            let active = filter.with(|f| f.category() == *category);
                                            if active {
                                                "px-4 py-2 rounded-full text-sm transition-colors duration-300 bg-blue-600 text-white"
                                            } else {
                                                "px-4 py-2 rounded-full text-sm transition-colors duration-300 bg-gray-200 text-gray-800 hover:bg-blue-100"
                                            }
                                        }
                                    >
                                        {*category}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <input
                        type="text"
                        placeholder="Search projects..."
                        on:input=move |ev| {
                            set_filter.update(|f| f.set_search(event_target_value(&ev)))
                        }
                        class="px-4 py-2 border border-gray-300 rounded-full w-full max-w-xs focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>

                <Show when=move || visible.with(|v| v.is_empty())>
                    <div class="text-center py-12">
                        <p class="text-gray-600">"No projects found matching your criteria."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg overflow-hidden shadow-lg">
            <div class="relative">
                <div class="w-full h-48 bg-gray-200">
                    {project.image.map(|src| {
                        view! { <img src=src alt=project.title class="w-full h-48 object-cover" /> }
                    })}
                </div>
                <div class="absolute top-4 right-4 flex space-x-2">
                    {project.github_link.map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="bg-gray-800 text-white p-2 rounded-full hover:bg-gray-700"
                                aria-label="Source code"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                        }
                    })}
                    {project.live_link.map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="bg-blue-600 text-white p-2 rounded-full hover:bg-blue-700"
                                aria-label="Live demo"
                            >
                                <i class="extra-link"></i>
                            </a>
                        }
                    })}
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-semibold text-gray-800 mb-2">{project.title}</h3>
                <p class="text-gray-600 mb-4">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded-full">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex flex-wrap gap-2">
                    {project
                        .categories
                        .iter()
                        .map(|category| {
                            view! {
                                <span class="bg-gray-200 text-gray-700 text-xs px-2 py-1 rounded-full">
                                    {*category}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
