//! 管理员布局：侧边栏 + 用户信息 + 内容区

use crate::auth::use_session;
use crate::components::icons::*;
use crate::web::Timeout;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use pharmaboard_shared::{AppRoute, auth};

/// 点击登出后等待多久才真正清除会话
const LOGOUT_DELAY_MS: u32 = 3000;

#[derive(Clone, Copy)]
enum MenuIcon {
    Reports,
    Alerts,
    Users,
    Orders,
}

const MENU: [(&str, AppRoute, MenuIcon); 4] = [
    ("Rapports", AppRoute::Dashboard, MenuIcon::Reports),
    ("Stock & Alertes", AppRoute::Alerts, MenuIcon::Alerts),
    ("Utilisateurs", AppRoute::Users, MenuIcon::Users),
    ("Commandes", AppRoute::Orders, MenuIcon::Orders),
];

fn menu_icon(icon: MenuIcon) -> AnyView {
    match icon {
        MenuIcon::Reports => view! { <BarChart attr:class="h-5 w-5" /> }.into_any(),
        MenuIcon::Alerts => view! { <Bell attr:class="h-5 w-5" /> }.into_any(),
        MenuIcon::Users => view! { <Users attr:class="h-5 w-5" /> }.into_any(),
        MenuIcon::Orders => view! { <ShoppingCart attr:class="h-5 w-5" /> }.into_any(),
    }
}

#[component]
pub fn AdminLayout(active: AppRoute, children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row min-h-screen bg-base-200">
            <Sidebar active=active />
            <main class="flex-1 p-4 md:ml-64">
                <div class="flex justify-end mb-4">
                    <UserInfo />
                </div>
                {children()}
            </main>
        </div>
    }
}

#[component]
fn Sidebar(active: AppRoute) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (collapsed, set_collapsed) = signal(false);
    let (mobile_open, set_mobile_open) = signal(false);
    let (logging_out, set_logging_out) = signal(false);

    let on_logout = move |_| {
        set_logging_out.set(true);
        Timeout::new(LOGOUT_DELAY_MS, move || {
            let target = auth::logout(&session);
            router.go(target);
        })
        .forget();
    };

    let aside_class = move || {
        format!(
            "fixed z-40 flex flex-col justify-between bg-neutral text-neutral-content min-h-screen transition-all duration-300 {} {}",
            if collapsed.get() { "w-16" } else { "w-64" },
            if mobile_open.get() { "left-0" } else { "-left-full md:left-0" },
        )
    };

    view! {
        <button
            class="md:hidden fixed top-4 right-4 z-50 btn btn-square btn-neutral"
            on:click=move |_| set_mobile_open.update(|o| *o = !*o)
        >
            {move || if mobile_open.get() {
                view! { <X attr:class="h-5 w-5" /> }.into_any()
            } else {
                view! { <Menu attr:class="h-5 w-5" /> }.into_any()
            }}
        </button>

        <aside class=aside_class>
            <div>
                <div class="flex items-center justify-between p-4 border-b border-neutral-content/20">
                    <div class="flex items-center gap-2 text-2xl font-bold whitespace-nowrap overflow-hidden">
                        <Pill attr:class="h-6 w-6 text-info" />
                        <Show when=move || !collapsed.get()>"PharmaBoard"</Show>
                    </div>
                    <button
                        class="hidden md:block btn btn-ghost btn-sm btn-square"
                        title=move || if collapsed.get() { "Afficher la sidebar" } else { "Cacher la sidebar" }
                        on:click=move |_| set_collapsed.update(|c| *c = !*c)
                    >
                        {move || if collapsed.get() {
                            view! { <ChevronRight attr:class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <ChevronLeft attr:class="h-5 w-5" /> }.into_any()
                        }}
                    </button>
                </div>

                <nav class="mt-4 px-2 space-y-1" on:click=move |_| set_mobile_open.set(false)>
                    {MENU
                        .into_iter()
                        .map(|(name, route, icon)| {
                            let class = if route == active {
                                "flex items-center gap-3 p-3 rounded-lg bg-base-content/20 shadow-lg"
                            } else {
                                "flex items-center gap-3 p-3 rounded-lg hover:bg-base-content/10"
                            };
                            view! {
                                <Link to=route class=class>
                                    <span class="text-info">{menu_icon(icon)}</span>
                                    <Show when=move || !collapsed.get()>
                                        <span class="text-sm">{name}</span>
                                    </Show>
                                </Link>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>

            <div class="p-2 border-t border-neutral-content/20">
                <button
                    class="flex items-center gap-3 w-full p-3 rounded-lg hover:bg-base-content/10 disabled:opacity-50"
                    title="Déconnexion"
                    disabled=move || logging_out.get()
                    on:click=on_logout
                >
                    <span class="text-error">
                        {move || if logging_out.get() {
                            view! { <span class="loading loading-spinner loading-sm"></span> }.into_any()
                        } else {
                            view! { <LogOut attr:class="h-5 w-5" /> }.into_any()
                        }}
                    </span>
                    <Show when=move || !collapsed.get()>
                        <span class="text-sm">
                            {move || if logging_out.get() { "Déconnexion en cours..." } else { "Déconnexion" }}
                        </span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}

/// 当前用户的邮箱与角色
#[component]
pub fn UserInfo() -> impl IntoView {
    let claims = use_session().claims();
    let email = claims.as_ref().map(|c| c.email.clone()).unwrap_or_default();
    let role = claims.map(|c| c.role.label()).unwrap_or_default();

    view! {
        <div class="flex items-center gap-2 bg-neutral text-neutral-content p-2 rounded-box shadow">
            <div class="avatar placeholder">
                <div class="bg-info text-info-content rounded-full w-10 h-10 flex items-center justify-center">
                    <User attr:class="h-5 w-5" />
                </div>
            </div>
            <div class="hidden sm:flex sm:flex-col">
                <p class="text-sm font-medium">{email}</p>
                <p class="text-xs opacity-70">{role}</p>
            </div>
        </div>
    }
}
