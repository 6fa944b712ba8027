use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{
    CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, CONTACT_PHONE_TEL, OWNER_NAME, SOCIAL_LINKS,
};
use crate::nav::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="bg-gray-100 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8">
                <div class="flex flex-col">
                    <h2 class="text-2xl font-bold text-gray-800 mb-4">{OWNER_NAME}</h2>
                    <p class="text-gray-600 mb-4">
                        "Mechatronics Engineer passionate about building innovative technological solutions that bridge hardware and software."
                    </p>
                    <div class="flex space-x-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-800 hover:text-blue-600 text-2xl transition-colors duration-300"
                                        aria-label=social.name
                                    >
                                        <i class=social.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            class="text-red-500 hover:text-red-700 text-2xl transition-colors duration-300"
                            aria-label="Email"
                        >
                            <i class="extra-email"></i>
                        </a>
                    </div>
                </div>

                <div>
                    <h3 class="text-xl font-semibold text-gray-800 mb-4">"Quick Links"</h3>
                    <ul class="space-y-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <A
                                            href=item.path
                                            attr:class="text-gray-600 hover:text-blue-600 transition-colors duration-300"
                                        >
                                            {item.label}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="text-xl font-semibold text-gray-800 mb-4">"Contact Info"</h3>
                    <ul class="space-y-2 text-gray-600">
                        <li>
                            <strong>"Email: "</strong>
                            <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:text-blue-600">
                                {CONTACT_EMAIL}
                            </a>
                        </li>
                        <li>
                            <strong>"Phone: "</strong>
                            <a href=CONTACT_PHONE_TEL class="hover:text-blue-600">
                                {CONTACT_PHONE}
                            </a>
                        </li>
                        <li>
                            <strong>"Location: "</strong>
                            {CONTACT_LOCATION}
                        </li>
                    </ul>
                </div>
            </div>

            <div class="mt-8 pt-8 border-t border-gray-200 text-center">
                <p class="text-gray-600">
                    "© " {env!("BUILD_YEAR")} " " {OWNER_NAME} ". All Rights Reserved."
                </p>
            </div>
        </div>
    }
}
