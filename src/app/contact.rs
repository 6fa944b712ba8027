use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use crate::content::{
    CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, CONTACT_PHONE_TEL, SOCIAL_LINKS,
};
use crate::form::{ContactFormModel, FieldError};

#[component]
pub fn ContactPage() -> impl IntoView {
    let (model, set_model) = signal(ContactFormModel::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_model.update(|m| {
            if let Some(snapshot) = m.submit() {
                // no backend to send to; log the submission instead
                match serde_json::to_string(&snapshot) {
                    Ok(json) => log::info!("contact form submitted: {json}"),
                    Err(_) => log::info!("contact form submitted"),
                }
            }
        });
    };

    view! {
        <Title text="Contact" />
        <div class="min-h-screen bg-gradient-to-br from-white to-blue-50 py-16 px-4">
            <div class="container mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-800 mb-4">"Contact Me"</h1>
                    <p class="text-gray-600 max-w-2xl mx-auto">
                        "Have a project in mind or want to collaborate? I'm always open to discussing innovative technological solutions and exciting opportunities."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <div class="bg-white p-6 rounded-lg shadow-md hover:shadow-xl transition-shadow">
                            <h2 class="text-2xl font-semibold text-gray-800 mb-4">
                                "Contact Information"
                            </h2>

                            <div class="space-y-4">
                                <div class="flex items-center">
                                    <i class="extra-email mr-4 text-blue-600 text-2xl"></i>
                                    <div>
                                        <p class="text-gray-600">"Email"</p>
                                        <a
                                            href=format!("mailto:{CONTACT_EMAIL}")
                                            class="text-gray-800 hover:text-blue-600"
                                        >
                                            {CONTACT_EMAIL}
                                        </a>
                                    </div>
                                </div>

                                <div class="flex items-center">
                                    <i class="extra-phone mr-4 text-blue-600 text-2xl"></i>
                                    <div>
                                        <p class="text-gray-600">"Phone"</p>
                                        <a
                                            href=CONTACT_PHONE_TEL
                                            class="text-gray-800 hover:text-blue-600"
                                        >
                                            {CONTACT_PHONE}
                                        </a>
                                    </div>
                                </div>

                                <div class="flex items-center">
                                    <i class="extra-location mr-4 text-blue-600 text-2xl"></i>
                                    <div>
                                        <p class="text-gray-600">"Location"</p>
                                        <p class="text-gray-800">{CONTACT_LOCATION}</p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="bg-white p-6 rounded-lg shadow-md hover:shadow-xl transition-shadow">
                            <h2 class="text-2xl font-semibold text-gray-800 mb-4">
                                "Connect Online"
                            </h2>
                            <div class="flex space-x-6 justify-center">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-3xl text-gray-800 hover:text-blue-600 transition-transform duration-300 hover:scale-110"
                                                aria-label=social.name
                                            >
                                                <i class=social.icon></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <form
                        on:submit=on_submit
                        class="bg-white p-8 rounded-lg shadow-md hover:shadow-xl transition-shadow"
                    >
                        <h2 class="text-2xl font-semibold text-gray-800 mb-6">
                            "Send Me a Message"
                        </h2>

                        <Show when=move || model.with(|m| m.sent)>
                            <div class="mb-4 p-3 bg-green-100 text-green-800 rounded-lg">
                                "Message sent successfully!"
                            </div>
                        </Show>

                        <div class="mb-4">
                            <label for="name" class="block text-gray-700 mb-2">
                                "Full Name"
                            </label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || model.with(|m| m.form.name.clone())
                                on:input=move |ev| {
                                    set_model
                                        .update(|m| m.edit(|f| f.name = event_target_value(&ev)))
                                }
                                class=move || field_class(model.with(|m| m.errors.name))
                                placeholder="Enter your full name"
                            />
                            <FieldErrorNote error=Signal::derive(move || {
                                model.with(|m| m.errors.name)
                            }) />
                        </div>

                        <div class="mb-4">
                            <label for="email" class="block text-gray-700 mb-2">
                                "Email Address"
                            </label>
                            <input
                                type="email"
                                id="email"
                                prop:value=move || model.with(|m| m.form.email.clone())
                                on:input=move |ev| {
                                    set_model
                                        .update(|m| m.edit(|f| f.email = event_target_value(&ev)))
                                }
                                class=move || field_class(model.with(|m| m.errors.email))
                                placeholder="Enter your email address"
                            />
                            <FieldErrorNote error=Signal::derive(move || {
                                model.with(|m| m.errors.email)
                            }) />
                        </div>

                        <div class="mb-4">
                            <label for="subject" class="block text-gray-700 mb-2">
                                "Subject"
                            </label>
                            <input
                                type="text"
                                id="subject"
                                prop:value=move || model.with(|m| m.form.subject.clone())
                                on:input=move |ev| {
                                    set_model
                                        .update(|m| m.edit(|f| f.subject = event_target_value(&ev)))
                                }
                                class=move || field_class(model.with(|m| m.errors.subject))
                                placeholder="Enter the subject of your message"
                            />
                            <FieldErrorNote error=Signal::derive(move || {
                                model.with(|m| m.errors.subject)
                            }) />
                        </div>

                        <div class="mb-6">
                            <label for="message" class="block text-gray-700 mb-2">
                                "Your Message"
                            </label>
                            <textarea
                                id="message"
                                rows="5"
                                prop:value=move || model.with(|m| m.form.message.clone())
                                on:input=move |ev| {
                                    set_model
                                        .update(|m| m.edit(|f| f.message = event_target_value(&ev)))
                                }
                                class=move || field_class(model.with(|m| m.errors.message))
                                placeholder="Write your message here"
                            ></textarea>
                            <FieldErrorNote error=Signal::derive(move || {
                                model.with(|m| m.errors.message)
                            }) />
                        </div>

                        <button
                            type="submit"
                            class="w-full bg-blue-600 text-white py-3 rounded-lg hover:bg-blue-700 transition-colors duration-300 flex items-center justify-center"
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

fn field_class(error: Option<FieldError>) -> &'static str {
    if error.is_some() {
        "w-full px-4 py-2 border rounded-lg focus:outline-none focus:ring-2 border-red-500 focus:ring-red-500"
    } else {
        "w-full px-4 py-2 border rounded-lg focus:outline-none focus:ring-2 border-gray-300 focus:ring-blue-500"
    }
}

#[component]
fn FieldErrorNote(error: Signal<Option<FieldError>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|err| view! { <p class="text-red-500 text-sm mt-1">{err.to_string()}</p> })
    }
}
