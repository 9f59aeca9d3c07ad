use crate::auth::use_api;
use crate::components::icons::{Lock, Mail, Phone, User};
use crate::components::modal::use_notifier;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use pharmaboard_shared::screens::signup::{
    SIGNUP_ERROR_TITLE, SIGNUP_FALLBACK, SIGNUP_SUCCESS_TEXT, SIGNUP_SUCCESS_TITLE, build_signup,
    password_strength,
};
use pharmaboard_shared::{AppRoute, auth};

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();
    let notifier = use_notifier();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (tel, set_tel) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let strength = Memo::new(move |_| password.with(|p| password_strength(p)));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match build_signup(
            &name.get_untracked(),
            &email.get_untracked(),
            &tel.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(req) => req,
            Err(e) => {
                notifier.error(SIGNUP_ERROR_TITLE, &e.to_string());
                return;
            }
        };

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match auth::signup(&api, &request).await {
                Ok(target) => {
                    notifier.success(SIGNUP_SUCCESS_TITLE, SIGNUP_SUCCESS_TEXT);
                    router.go(target);
                }
                Err(e) => notifier.error(SIGNUP_ERROR_TITLE, &e.user_message(SIGNUP_FALLBACK)),
            }
            set_is_submitting.set(false);
        });
    };

    let bar_class = move || {
        let color = match strength.get().score() {
            0 => "bg-error",
            1 => "bg-warning",
            2 => "bg-info",
            _ => "bg-success",
        };
        format!("h-2 rounded transition-all {color}")
    };

    view! {
        <div class="hero min-h-screen bg-gradient-to-r from-blue-100 to-purple-100">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body gap-4" on:submit=on_submit>
                        <h2 class="text-3xl font-bold text-center">"Inscription"</h2>

                        <label class="input input-bordered flex items-center gap-2">
                            <User attr:class="h-4 w-4 opacity-60" />
                            <input
                                type="text"
                                class="grow"
                                placeholder="Nom complet"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                required
                            />
                        </label>
                        <label class="input input-bordered flex items-center gap-2">
                            <Mail attr:class="h-4 w-4 opacity-60" />
                            <input
                                type="email"
                                class="grow"
                                placeholder="Email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                required
                            />
                        </label>
                        <label class="input input-bordered flex items-center gap-2">
                            <Phone attr:class="h-4 w-4 opacity-60" />
                            <input
                                type="tel"
                                class="grow"
                                placeholder="Téléphone (10 chiffres)"
                                maxlength="10"
                                on:input=move |ev| set_tel.set(event_target_value(&ev))
                                prop:value=tel
                                required
                            />
                        </label>
                        <label class="input input-bordered flex items-center gap-2">
                            <Lock attr:class="h-4 w-4 opacity-60" />
                            <input
                                type="password"
                                class="grow"
                                placeholder="Mot de passe"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                required
                            />
                        </label>

                        <Show when=move || password.with(|p| !p.is_empty())>
                            <div class="space-y-1">
                                <div class="w-full bg-base-200 rounded h-2">
                                    <div
                                        class=bar_class
                                        style=move || format!("width: {}%", strength.get().percent())
                                    ></div>
                                </div>
                                <p class="text-xs opacity-70">
                                    "Force du mot de passe : " {move || strength.get().label()}
                                </p>
                            </div>
                        </Show>

                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Inscription..." }.into_any()
                            } else {
                                "S'inscrire".into_any()
                            }}
                        </button>

                        <p class="text-center text-sm">
                            "Déjà un compte ? "
                            <Link to=AppRoute::Login class="link link-primary">
                                "Connectez-vous"
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
