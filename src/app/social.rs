use leptos::prelude::*;

use crate::content::SOCIAL_LINKS;

/// Floating social-links widget pinned to the left edge, rendered on every
/// page as part of the persistent frame.
#[component]
pub fn FloatingSocialBar() -> impl IntoView {
    view! {
        <div class="fixed top-1/2 left-4 transform -translate-y-1/2 z-50">
            <div class="bg-white/70 backdrop-blur-lg shadow-2xl rounded-full px-2 py-4 flex flex-col items-center space-y-4 border border-gray-200">
                {SOCIAL_LINKS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="w-10 h-10 rounded-full flex items-center justify-center bg-gray-800 text-white hover:bg-blue-600 transition-all duration-300 ease-in-out transform hover:scale-110"
                                aria-label=social.name
                            >
                                <i class=social.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
