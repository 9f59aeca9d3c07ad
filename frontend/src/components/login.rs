use crate::auth::use_app;
use crate::components::icons::{Lock, Mail};
use crate::components::modal::use_notifier;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use pharmaboard_shared::{AppRoute, auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let notifier = use_notifier();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);

        let app = app.clone();
        spawn_local(async move {
            let result = auth::login(
                &app.api,
                &app.session,
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;

            match result {
                Ok(target) => {
                    if let Some(route) = target {
                        router.go(route);
                    }
                    notifier.success("Connexion réussie!", "");
                }
                Err(e) => notifier.error("Erreur de connexion", &e.user_message()),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-gradient-to-r from-blue-100 to-purple-100">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body gap-6" on:submit=on_submit>
                        <h2 class="text-3xl font-bold text-center">"Connexion"</h2>

                        <label class="input input-bordered flex items-center gap-2">
                            <Mail attr:class="h-4 w-4 opacity-60" />
                            <input
                                type="email"
                                class="grow"
                                placeholder="Entrez votre email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                required
                            />
                        </label>
                        <label class="input input-bordered flex items-center gap-2">
                            <Lock attr:class="h-4 w-4 opacity-60" />
                            <input
                                type="password"
                                class="grow"
                                placeholder="Entrez votre mot de passe"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                required
                            />
                        </label>

                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Connexion..." }.into_any()
                            } else {
                                "Se connecter".into_any()
                            }}
                        </button>

                        <p class="text-center text-sm">
                            "Pas encore de compte ? "
                            <Link to=AppRoute::Signup class="link link-primary">
                                "Inscrivez-vous"
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
