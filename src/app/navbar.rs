use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::OWNER_NAME;
use crate::nav::{MenuState, NAV_ITEMS};

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white shadow-md">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center">
                        <A href="/" attr:class="text-2xl font-bold text-blue-600">
                            {OWNER_NAME}
                        </A>
                    </div>

                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <A
                                            href=item.path
                                            attr:class="text-gray-600 hover:bg-blue-100 hover:text-blue-600 px-3 py-2 rounded-md flex items-center transition-colors duration-300"
                                        >
                                            <i class=item.icon></i>
                                            <span class="ml-2">{item.label}</span>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="md:hidden">
                        <button
                            on:click=move |_| set_menu.update(|m| m.toggle())
                            class="text-blue-600 text-2xl focus:outline-none cursor-pointer"
                            aria-label="Toggle navigation menu"
                        >
                            {move || if menu.get().is_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <div class="fixed inset-0 bg-white z-40 md:hidden">
                    <div class="flex flex-col h-full pt-16 px-6 space-y-6">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <A
                                        href=item.path
                                        // selecting a link collapses the overlay before navigation
                                        on:click=move |_| set_menu.update(|m| m.close())
                                        attr:class="flex items-center text-xl text-gray-800 hover:text-blue-600 transition-colors duration-300 py-3"
                                    >
                                        <i class=item.icon></i>
                                        <span class="ml-4">{item.label}</span>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        on:click=move |_| set_menu.update(|m| m.close())
                        class="absolute top-4 right-4 text-2xl text-gray-600 hover:text-blue-600 cursor-pointer"
                        aria-label="Close navigation menu"
                    >
                        "✕"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
