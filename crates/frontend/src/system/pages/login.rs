use contracts::system::auth::AdminLoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = AdminLoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(message) = request.validate() {
            error_message.set(Some(message));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    // Flipping the session swaps the shell to MainLayout.
                    session.sign_in(response.token, request.email);
                }
                Err(e) => {
                    error_message.set(Some(e.user_message()));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Agri Admin"</h1>
                    <h2>"Sign in"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <Label>"Email"</Label>
                            <Input value=email input_type=InputType::Email placeholder="admin@example.com" disabled=is_loading />
                        </div>

                        <div class="form-group">
                            <Label>"Password"</Label>
                            <Input value=password input_type=InputType::Password disabled=is_loading />
                        </div>

                        <Button
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                            disabled=is_loading
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </Button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
