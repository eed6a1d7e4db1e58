use leptos::prelude::*;

use crate::components::constellation::SkillsConstellation;

/// Portfolio landing page hosting the skills section
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="portfolio">
				<header class="portfolio-intro">
					<h1>"Skills"</h1>
					<p class="subtitle">"Hover a star for its links, click it for a burst, drag it anywhere."</p>
				</header>
				<SkillsConstellation />
			</main>
		</ErrorBoundary>
	}
}
