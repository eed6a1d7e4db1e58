use leptos::prelude::*;

/// 404 fallback for unknown routes
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"This page drifted out of orbit."</p>
			<a href="/">"Back to the constellation"</a>
		</div>
	}
}
