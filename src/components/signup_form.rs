//! Signup form: student email plus an activity select.
//!
//! The fields are owned by the page so it can clear them once a successful
//! signup has finished refreshing the list.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

#[component]
pub fn SignupForm(
    #[prop(into)] options: Signal<Vec<String>>,
    activity: RwSignal<String>,
    email: RwSignal<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || activity.get()
                    on:change=move |ev| activity.set(event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    <For
                        each=move || options.get()
                        key=|name: &String| name.clone()
                        children=move |name: String| {
                            let label = name.clone();
                            view! { <option value=name>{label}</option> }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
