use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{EntryKind, ExperienceEntry, ExperienceFilter, EXPERIENCE};

static FILTER_OPTIONS: &[(ExperienceFilter, &str)] = &[
    (ExperienceFilter::ALL, "All"),
    (ExperienceFilter(Some(EntryKind::Work)), "Work"),
    (ExperienceFilter(Some(EntryKind::Education)), "Education"),
];

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let (filter, set_filter) = signal(ExperienceFilter::ALL);
    let visible = Memo::new(move |_| filter.get().visible(EXPERIENCE));

    view! {
        <Title text="Experience" />
        <div class="min-h-screen bg-gradient-to-br from-white to-blue-50 py-20 px-4">
            <div class="container mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-800 mb-4">
                        "Professional Journey"
                    </h1>
                    <p class="text-gray-600 max-w-2xl mx-auto">
                        "A comprehensive overview of my professional experience and academic background in mechatronics and engineering."
                    </p>
                </div>

                <div class="flex justify-center mb-12 space-x-4">
                    {FILTER_OPTIONS
                        .iter()
                        .map(|(option, label)| {
                            view! {
                                <button
                                    on:click=move |_| set_filter(*option)
                                    class=move || {
                                        if filter.get() == *option {
                                            "px-6 py-2 rounded-full transition-colors duration-300 bg-blue-600 text-white"
                                        } else {
                                            "px-6 py-2 rounded-full transition-colors duration-300 bg-gray-200 text-gray-800 hover:bg-blue-100"
                                        }
                                    }
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="relative before:content-[''] before:absolute before:top-0 before:left-1/2 before:transform before:-translate-x-1/2 before:w-0.5 before:h-full before:bg-gray-300">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| view! { <TimelineCard index entry /> })
                            .collect_view()
                    }}
                </div>

                <Show when=move || visible.with(|v| v.is_empty())>
                    <div class="text-center py-12">
                        <p class="text-gray-600">"No experiences found in the selected category."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn TimelineCard(index: usize, entry: &'static ExperienceEntry) -> impl IntoView {
    let even = index % 2 == 0;
    let wrapper = if even {
        "relative mb-8 w-full md:pr-12 md:pl-0 pl-12"
    } else {
        "relative mb-8 w-full md:pl-12 md:pr-0 pr-12"
    };
    let marker_pos = if even {
        "left-0 md:right-[-50px]"
    } else {
        "right-0 md:left-[-50px]"
    };
    let marker_color = match entry.kind {
        EntryKind::Work => "bg-blue-600 text-white",
        EntryKind::Education => "bg-green-600 text-white",
    };
    let marker_icon = match entry.kind {
        EntryKind::Work => "💼",
        EntryKind::Education => "🎓",
    };
    let card = if even {
        "bg-white p-6 rounded-lg shadow-md hover:shadow-xl transition-shadow md:ml-12 md:text-left text-right"
    } else {
        "bg-white p-6 rounded-lg shadow-md hover:shadow-xl transition-shadow md:mr-12 md:text-right text-left"
    };

    view! {
        <div class=wrapper>
            <div class=format!(
                "absolute top-0 {marker_pos} w-10 h-10 rounded-full flex items-center justify-center {marker_color}",
            )>{marker_icon}</div>

            <div class=card>
                <h3 class="text-xl font-semibold text-gray-800 mb-2">{entry.title}</h3>
                <p class="text-gray-600 mb-2">{entry.organization}</p>

                <div class="flex items-center justify-between text-sm text-gray-500 mb-4">
                    <div class="flex items-center">
                        <i class="extra-location mr-2"></i>
                        {entry.location}
                    </div>
                    <div class="flex items-center">
                        <i class="extra-calendar mr-2"></i>
                        {entry.date}
                    </div>
                </div>

                <ul class="list-disc list-inside text-gray-700 mb-4">
                    {entry
                        .description
                        .iter()
                        .map(|desc| view! { <li class="mb-2">{*desc}</li> })
                        .collect_view()}
                </ul>

                <div class="flex flex-wrap gap-2">
                    {entry
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
            </div>
        </div>
    }
}
