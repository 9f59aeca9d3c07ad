use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="p-4">
            <h1 class="text-3xl font-bold mb-4">"Dashboard"</h1>
            <p>
                "Bienvenue sur le dashboard de votre pharmacie. Suivez ici l'activité globale et les statistiques clés."
            </p>
        </div>
    }
}
